//
// emojiver - document
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

//! The generated document and the group tree it contains.
//!
//! The JSON shape is:
//!
//! ```text
//! {
//!   "versions": [12, 11, ...],
//!   "tests":    [[12, "1f90d"], ...],
//!   "groups":   [{ "group": "Smileys & Emotion",
//!                  "subgroups": [{ "subgroup": "face-smiling",
//!                                  "emojis": [["1f600", "grinning face", 6.1], ...] }] }]
//! }
//! ```

use crate::{codekey::CodeKey, error::Result, version::Version};

/// One emoji row: code, display name and the release that introduced it.
/// Serialized as a three element array.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct EmojiEntry(pub CodeKey, pub String, pub Version);

impl EmojiEntry {
    pub fn code(&self) -> &CodeKey {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }

    pub fn version(&self) -> Version {
        self.2
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Subgroup {
    #[serde(rename = "subgroup")]
    pub name: String,
    pub emojis: Vec<EmojiEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(rename = "group")]
    pub name: String,
    pub subgroups: Vec<Subgroup>,
}

impl Group {
    pub fn entries(&self) -> impl Iterator<Item = &EmojiEntry> + '_ {
        self.subgroups.iter().flat_map(|s| s.emojis.iter())
    }
}

/// How the document is laid out when serialized. The content is the same
/// either way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Every release found in the sequence tables, newest first.
    pub versions: Vec<Version>,
    /// One representative code per release.
    pub tests: Vec<(Version, CodeKey)>,
    pub groups: Vec<Group>,
}

impl Document {
    /// All emoji rows in file order, ignoring groups and subgroups.
    pub fn entries(&self) -> impl Iterator<Item = &EmojiEntry> + '_ {
        self.groups.iter().flat_map(Group::entries)
    }

    pub fn to_json(&self, style: JsonStyle) -> Result<String> {
        Ok(match style {
            JsonStyle::Compact => serde_json::to_string(self)?,
            JsonStyle::Pretty => serde_json::to_string_pretty(self)?,
        })
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
