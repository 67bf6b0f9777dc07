//
// emojiver - selector
//
// Copyright 2026 emojiver contributors
//
// This file is part of emojiver.
//
// emojiver is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojiver is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojiver. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! One smoke-test code point per emoji release.
//!
//! A renderer that draws the representative of a release most likely
//! supports the whole release.

use indexmap::IndexMap;

use crate::{codekey::CodeKey, document::Group, version::Version};

/// Hand-picked representatives, in output order.
pub const CURATED_TESTS: &[(f64, &str)] = &[
    (12.0, "1f90d"),         // white heart
    (11.0, "1f970"),         // smiling face with hearts
    (10.0, "1f929"),         // star-struck
    (9.0, "1f923"),          // rolling on the floor laughing
    (8.0, "1f643"),          // upside-down face
    (7.0, "1f642"),          // slightly smiling face
    (6.0, "1f428"),          // koala
    (6.1, "1f617"),          // kissing face
    (5.2, "26f0"),           // mountain
    (5.1, "2b50"),           // star
    (4.1, "26ab"),           // black circle
    (4.0, "2615"),           // hot beverage
    (3.2, "2764"),           // red heart
    (3.0, "0023_fe0f_20e3"), // keycap: #
    (1.1, "231a"),           // watch
];

#[derive(Clone, Debug, Default)]
pub struct Representatives {
    /// Release to representative, curated entries first.
    pub tests: IndexMap<Version, CodeKey>,
    /// Releases without any emoji in the tree.
    pub missing: Vec<Version>,
}

impl Representatives {
    pub fn into_pairs(self) -> Vec<(Version, CodeKey)> {
        self.tests.into_iter().collect()
    }
}

fn first_with_version(groups: &[Group], version: Version) -> Option<&CodeKey> {
    for group in groups {
        for subgroup in &group.subgroups {
            if let Some(entry) = subgroup.emojis.iter().find(|e| e.version() == version) {
                return Some(entry.code());
            }
        }
    }
    None
}

/// Pick one code per release. Curated entries are always included; other
/// releases get the first emoji of that release in file order.
pub fn select_representatives(versions: &[Version], groups: &[Group]) -> Representatives {
    let mut tests: IndexMap<Version, CodeKey> = CURATED_TESTS
        .iter()
        .filter_map(|&(v, code)| Some((Version::new(v)?, CodeKey::from_canonical(code))))
        .collect();
    let mut missing = vec![];
    for &version in versions {
        if tests.contains_key(&version) {
            continue;
        }
        if let Some(code) = first_with_version(groups, version) {
            tests.insert(version, code.clone());
        } else {
            log::warn!("release {} has no emoji in the test table to represent it", version);
            missing.push(version);
        }
    }
    Representatives { tests, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EmojiEntry, Subgroup};

    fn v(s: &str) -> Version {
        s.parse().unwrap()
    }

    fn entry(code: &str, version: &str) -> EmojiEntry {
        EmojiEntry(CodeKey::normalize(code).unwrap(), code.to_string(), v(version))
    }

    #[test]
    fn test_select_representatives() {
        let groups = vec![
            Group {
                name: "Smileys & Emotion".into(),
                subgroups: vec![Subgroup {
                    name: "face-smiling".into(),
                    emojis: vec![entry("1F600", "1"), entry("1FAE0", "14")],
                }],
            },
            Group {
                name: "Animals & Nature".into(),
                subgroups: vec![
                    Subgroup {
                        name: "animal-mammal".into(),
                        emojis: vec![],
                    },
                    Subgroup {
                        name: "animal-bird".into(),
                        emojis: vec![entry("1FABF", "15"), entry("1FAE8", "15")],
                    },
                ],
            },
        ];
        let versions = [v("15"), v("14"), v("13.1"), v("12"), v("1")];
        let reps = select_representatives(&versions, &groups);

        assert_eq!(reps.missing, vec![v("13.1")]);
        let pairs = reps.into_pairs();
        assert_eq!(pairs.len(), CURATED_TESTS.len() + 3);
        assert_eq!(pairs[0], (v("12"), CodeKey::normalize("1f90d").unwrap()));
        assert_eq!(
            pairs[CURATED_TESTS.len()..],
            [
                (v("15"), CodeKey::normalize("1fabf").unwrap()),
                (v("14"), CodeKey::normalize("1fae0").unwrap()),
                (v("1"), CodeKey::normalize("1f600").unwrap()),
            ]
        );
    }

    #[test]
    fn test_curated_order() {
        let pairs = select_representatives(&[], &[]).into_pairs();
        assert_eq!(
            pairs.iter().map(|(v, _)| v.to_string()).collect::<Vec<_>>(),
            ["12", "11", "10", "9", "8", "7", "6", "6.1", "5.2", "5.1", "4.1", "4", "3.2", "3", "1.1"]
        );
        assert_eq!(pairs[13].1.as_str(), "0023_fe0f_20e3");
    }
}
