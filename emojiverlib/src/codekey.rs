//
// emojiver - codekey
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

//! Canonical keys for code point sequences.
//!
//! Unicode data files write sequences as upper case hexadecimal code points
//! separated by spaces (`0023 FE0F 20E3`). Every table is joined on the
//! canonical form: lower case code points joined with `_` (`0023_fe0f_20e3`).

use std::{borrow::Borrow, fmt};

use smallvec::SmallVec;

use crate::error::{Error, ErrorKind, Result};

/// Separator between code points of a canonical key.
pub const SEPARATOR: char = '_';

/// Suffix of the fully-qualified form of a sequence (`U+FE0F VARIATION
/// SELECTOR-16`).
pub const FULLY_QUALIFIED_SUFFIX: &str = "_fe0f";

const VARIATION_SELECTOR_16: &str = "fe0f";

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CodeKey(String);

impl CodeKey {
    /// Canonicalize a raw code point token: trim, lowercase and join
    /// whitespace separated code points with `_`.
    ///
    /// Returns `None` if nothing is left after trimming.
    ///
    /// ```rust
    /// # use emojiverlib::codekey::CodeKey;
    /// let key = CodeKey::normalize(" 0023 FE0F  20E3 ").unwrap();
    /// assert_eq!(key.as_str(), "0023_fe0f_20e3");
    /// assert_eq!(CodeKey::normalize(key.as_str()).unwrap(), key);
    /// assert!(CodeKey::normalize("   ").is_none());
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        let mut ret = String::with_capacity(raw.len());
        for code_point in raw.split_whitespace() {
            if !ret.is_empty() {
                ret.push(SEPARATOR);
            }
            ret.extend(code_point.chars().flat_map(char::to_lowercase));
        }
        if ret.is_empty() {
            return None;
        }
        Some(Self(ret))
    }

    /// Wrap a string that is already in canonical form.
    pub(crate) fn from_canonical<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.0.ends_with(FULLY_QUALIFIED_SUFFIX)
    }

    /// The key with the trailing fully-qualified suffix removed, if it had
    /// one.
    pub fn unqualified(&self) -> Option<Self> {
        self.0
            .strip_suffix(FULLY_QUALIFIED_SUFFIX)
            .filter(|s| !s.is_empty())
            .map(Self::from_canonical)
    }

    /// The key with every `U+FE0F` removed, if it had any.
    pub fn without_variation_selectors(&self) -> Option<Self> {
        if !self.code_points().any(|cp| cp == VARIATION_SELECTOR_16) {
            return None;
        }
        let ret = self
            .code_points()
            .filter(|cp| *cp != VARIATION_SELECTOR_16)
            .collect::<Vec<_>>()
            .join("_");
        if ret.is_empty() {
            None
        } else {
            Some(Self(ret))
        }
    }

    pub fn code_points(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(SEPARATOR)
    }

    /// Decode every code point into a Unicode scalar value.
    pub fn to_chars(&self) -> Result<SmallVec<[char; 8]>> {
        self.code_points()
            .map(|cp| {
                let value = u32::from_str_radix(cp, 16).map_err(|err| {
                    Error::from(err)
                        .set_summary(format!("`{}` in `{}` is not a hex code point", cp, self))
                })?;
                char::from_u32(value).ok_or_else(|| {
                    Error::new(format!(
                        "U+{:04X} in `{}` is not a Unicode scalar value",
                        value, self
                    ))
                    .set_kind(ErrorKind::ValueError)
                })
            })
            .collect()
    }

    /// Render the sequence as text.
    pub fn glyph(&self) -> Result<String> {
        Ok(self.to_chars()?.into_iter().collect())
    }
}

impl fmt::Display for CodeKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

impl AsRef<str> for CodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codekey_normalize() {
        assert_eq!(CodeKey::normalize("1F600").unwrap().as_str(), "1f600");
        assert_eq!(
            CodeKey::normalize("1F468 200D\t1F469 ").unwrap().as_str(),
            "1f468_200d_1f469"
        );
        for canonical in ["1f600", "0023_fe0f_20e3", "1f3fb..1f3ff"] {
            assert_eq!(CodeKey::normalize(canonical).unwrap().as_str(), canonical);
        }
        assert_eq!(CodeKey::normalize(""), None);
    }

    #[test]
    fn test_codekey_qualification() {
        let key = CodeKey::normalize("0023 FE0F 20E3").unwrap();
        assert!(!key.is_fully_qualified());
        assert_eq!(key.unqualified(), None);
        assert_eq!(
            key.without_variation_selectors().unwrap().as_str(),
            "0023_20e3"
        );

        let key = CodeKey::normalize("263A FE0F").unwrap();
        assert!(key.is_fully_qualified());
        assert_eq!(key.unqualified().unwrap().as_str(), "263a");
        assert_eq!(
            key.without_variation_selectors(),
            key.unqualified()
        );
        assert_eq!(CodeKey::normalize("1F600").unwrap().without_variation_selectors(), None);
    }

    #[test]
    fn test_codekey_glyph() {
        let key = CodeKey::normalize("0023 FE0F 20E3").unwrap();
        assert_eq!(key.glyph().unwrap(), "#\u{fe0f}\u{20e3}");
        assert_eq!(
            CodeKey::normalize("1F600").unwrap().glyph().unwrap(),
            "\u{1f600}"
        );
        let err = CodeKey::normalize("D800").unwrap().glyph().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
        let err = CodeKey::normalize("XYZ").unwrap().glyph().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
    }
}
