//
// emojiver - test_table
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

//! Parsing of `emoji-test.txt` into the group tree.
//!
//! ```text
//! # group: Smileys & Emotion
//!
//! # subgroup: face-smiling
//! 1F600                                      ; fully-qualified     # 😀 E1.0 grinning face
//! 263A FE0F                                  ; fully-qualified     # ☺️ E0.6 smiling face
//! 263A                                       ; unqualified         # ☺ E0.6 smiling face
//! ```
//!
//! Every other line is a comment and is ignored.

use std::io::BufRead;

use nom::{
    bytes::complete::{is_not, tag},
    character::complete::{multispace0, satisfy},
};

use crate::{
    codekey::CodeKey,
    document::{EmojiEntry, Group, Subgroup},
    error::{Error, ErrorKind, Result, ResultIntoError},
    parser::{version_token, word, IResult},
    sequences::VersionMap,
};

const GROUP_PREFIX: &str = "# group:";
const SUBGROUP_PREFIX: &str = "# subgroup:";
const SKIN_TONE: &str = "skin tone";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestLine<'l> {
    Group(&'l str),
    Subgroup(&'l str),
    Emoji {
        code: CodeKey,
        status: &'l str,
        name: &'l str,
    },
}

/// `<code-spec> ; <status> # <glyph> [E<version>] <name>`
fn emoji_row(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (input, code) = is_not(";")(input)?;
    let (input, _) = tag(";")(input)?;
    let (input, status) = is_not(";#")(input)?;
    let (input, _) = tag("#")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _glyph) = word(input)?;
    let (input, _) = satisfy(char::is_whitespace)(input)?;
    Ok(("", (code, status, strip_version_marker(input.trim()))))
}

/// Newer test files put the release between glyph and name
/// (`# 😀 E1.0 grinning face`); it is not part of the name.
fn strip_version_marker(name: &str) -> &str {
    match version_token(name) {
        Ok((rest, token))
            if token.starts_with('E')
                && rest.starts_with(char::is_whitespace)
                && !rest.trim().is_empty() =>
        {
            rest.trim()
        }
        _ => name,
    }
}

/// Classify one line of the test table. Blank lines, comments and lines that
/// match no grammar are `None`.
pub fn parse_test_line(line: &str) -> Option<TestLine<'_>> {
    let line = line.trim();
    if let Some(group) = line.strip_prefix(GROUP_PREFIX) {
        return Some(TestLine::Group(group.trim()));
    }
    if let Some(subgroup) = line.strip_prefix(SUBGROUP_PREFIX) {
        return Some(TestLine::Subgroup(subgroup.trim()));
    }
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (_, (code, status, name)) = emoji_row(line).ok()?;
    Some(TestLine::Emoji {
        code: CodeKey::normalize(code)?,
        status: status.trim(),
        name,
    })
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TableOptions {
    /// Leave out rows whose name mentions a skin tone.
    pub exclude_skin_tones: bool,
}

/// Keeps only the first of consecutive rows that share a name.
///
/// The test table lists the fully-qualified form of an emoji first, followed
/// by its minimally-qualified and unqualified renderings under the same
/// name. This is a heuristic tied to that layout and not a general
/// equivalence between sequences. The last name is tracked across the whole
/// file; group and subgroup headers do not reset it.
///
/// Every data row is observed, including rows the skin-tone filter drops.
/// Skipping the update for dropped rows would make `waving hand` after
/// `waving hand: light skin tone` a repeat only when filtering, so the
/// filter would change which other rows survive.
#[derive(Clone, Debug, Default)]
pub struct RepeatedNameFilter {
    previous: Option<String>,
}

impl RepeatedNameFilter {
    pub fn is_repeat(&self, name: &str) -> bool {
        !name.is_empty() && self.previous.as_deref() == Some(name)
    }

    pub fn observe(&mut self, name: &str) {
        if !name.is_empty() {
            self.previous = Some(name.to_string());
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TableStats {
    pub rows: usize,
    pub kept: usize,
    pub repeats: usize,
    pub skin_tones: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    NoGroup,
    InGroup,
    InSubgroup,
}

/// Builds the group tree one line at a time.
#[derive(Debug)]
pub struct TreeBuilder<'m> {
    versions: &'m VersionMap,
    options: TableOptions,
    state: State,
    groups: Vec<Group>,
    names: RepeatedNameFilter,
    stats: TableStats,
}

impl<'m> TreeBuilder<'m> {
    pub fn new(versions: &'m VersionMap, options: TableOptions) -> Self {
        Self {
            versions,
            options,
            state: State::NoGroup,
            groups: vec![],
            names: RepeatedNameFilter::default(),
            stats: TableStats::default(),
        }
    }

    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        match parse_test_line(line) {
            None => Ok(()),
            Some(TestLine::Group(name)) => {
                self.groups.push(Group {
                    name: name.to_string(),
                    subgroups: vec![],
                });
                self.state = State::InGroup;
                Ok(())
            }
            Some(TestLine::Subgroup(name)) => self.open_subgroup(name),
            Some(TestLine::Emoji { code, status, name }) => {
                self.stats.rows += 1;
                let ret = self.add_emoji(code, status, name);
                self.names.observe(name);
                ret
            }
        }
    }

    fn open_subgroup(&mut self, name: &str) -> Result<()> {
        let group = match (self.state, self.groups.last_mut()) {
            (State::InGroup | State::InSubgroup, Some(group)) => group,
            _ => {
                return Err(Error::new(format!(
                    "must have a group to add subgroup: {}",
                    name
                ))
                .set_kind(ErrorKind::Structure))
            }
        };
        group.subgroups.push(Subgroup {
            name: name.to_string(),
            emojis: vec![],
        });
        self.state = State::InSubgroup;
        Ok(())
    }

    fn add_emoji(&mut self, code: CodeKey, status: &str, name: &str) -> Result<()> {
        if self.names.is_repeat(name) {
            log::trace!("{} ({}) repeats {:?}", code, status, name);
            self.stats.repeats += 1;
            return Ok(());
        }
        if self.options.exclude_skin_tones && name.contains(SKIN_TONE) {
            self.stats.skin_tones += 1;
            return Ok(());
        }
        let subgroup = match (self.state, self.groups.last_mut()) {
            (State::InSubgroup, Some(group)) => group.subgroups.last_mut(),
            _ => None,
        };
        let Some(subgroup) = subgroup else {
            return Err(Error::new(format!(
                "must have a subgroup to add an emoji: {} ({})",
                code, name
            ))
            .set_kind(ErrorKind::Structure));
        };
        let Some(version) = self.versions.get(code.as_str()) else {
            return Err(
                Error::new(format!("no version found for {} ({})", code, name))
                    .set_kind(ErrorKind::MissingVersion),
            );
        };
        subgroup
            .emojis
            .push(EmojiEntry(code, name.to_string(), version));
        self.stats.kept += 1;
        Ok(())
    }

    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn finish(self) -> Vec<Group> {
        log::debug!("test table: {:?}", self.stats);
        self.groups
    }
}

/// Read a whole test table into the group tree.
pub fn parse_test_table<R: BufRead>(
    reader: R,
    versions: &VersionMap,
    options: TableOptions,
) -> Result<Vec<Group>> {
    let mut builder = TreeBuilder::new(versions, options);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        builder
            .feed_line(&line)
            .chain_err_details(|| format!("Line {}: {:?}", idx + 1, line.trim()))?;
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_line_kinds() {
        assert_eq!(
            parse_test_line("# group: Smileys & Emotion"),
            Some(TestLine::Group("Smileys & Emotion"))
        );
        assert_eq!(
            parse_test_line("  # subgroup: face-smiling  "),
            Some(TestLine::Subgroup("face-smiling"))
        );
        assert_eq!(
            parse_test_line("0023 FE0F 20E3 ; fully-qualified # 2.0 keycap: #"),
            Some(TestLine::Emoji {
                code: CodeKey::normalize("0023 FE0F 20E3").unwrap(),
                status: "fully-qualified",
                name: "keycap: #",
            })
        );
        for line in [
            "",
            "# emoji-test.txt",
            "# Smileys & Emotion subtotal:		1",
            "#EOF",
            "1F600 ; fully-qualified",
            "1F600 ; fully-qualified # 😀",
        ] {
            assert_eq!(parse_test_line(line), None, "{:?}", line);
        }
    }

    #[test]
    fn test_parse_test_line_names() {
        let name = |line| match parse_test_line(line) {
            Some(TestLine::Emoji { name, .. }) => name,
            other => panic!("{:?}", other),
        };
        assert_eq!(
            name("1F600                                      ; fully-qualified     # 😀 grinning face"),
            "grinning face"
        );
        assert_eq!(
            name("1F600 ; fully-qualified # 😀 E1.0 grinning face"),
            "grinning face"
        );
        assert_eq!(
            name("0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #"),
            "keycap: #"
        );
        assert_eq!(
            name("1F46E 1F3FB ; fully-qualified # 👮🏻 police officer: light skin tone"),
            "police officer: light skin tone"
        );
    }

    #[test]
    fn test_repeated_name_filter() {
        let mut filter = RepeatedNameFilter::default();
        assert!(!filter.is_repeat("smiling face"));
        filter.observe("smiling face");
        assert!(filter.is_repeat("smiling face"));
        filter.observe("");
        assert!(filter.is_repeat("smiling face"));
        assert!(!filter.is_repeat(""));
        filter.observe("frowning face");
        assert!(!filter.is_repeat("smiling face"));
    }

    #[test]
    fn test_tree_builder_stats() {
        let mut versions = VersionMap::new();
        versions
            .extend_from_str(
                "263A FE0F ; Basic_Emoji ; smiling face # 1.1\n\
                 1F44B 1F3FB ; RGI_Emoji_Modifier_Sequence ; waving hand: light skin tone # 8.0\n",
            )
            .unwrap();
        let mut builder = TreeBuilder::new(
            &versions,
            TableOptions {
                exclude_skin_tones: true,
            },
        );
        for line in [
            "# group: Smileys & Emotion",
            "# subgroup: face-affection",
            "263A FE0F ; fully-qualified # ☺️ smiling face",
            "263A ; unqualified # ☺ smiling face",
            "# subgroup: hand-fingers-open",
            "1F44B 1F3FB ; fully-qualified # 👋🏻 waving hand: light skin tone",
        ] {
            builder.feed_line(line).unwrap();
        }
        assert_eq!(
            builder.stats(),
            TableStats {
                rows: 3,
                kept: 1,
                repeats: 1,
                skin_tones: 1,
            }
        );
        let groups = builder.finish();
        assert_eq!(groups[0].subgroups.len(), 2);
        assert!(groups[0].subgroups[1].emojis.is_empty());

        let mut builder = TreeBuilder::new(&versions, TableOptions::default());
        let err = builder.feed_line("# subgroup: face-affection").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structure);
        assert_eq!(err.summary, "must have a group to add subgroup: face-affection");
    }
}
