//
// emojiver - fixture
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

//! Per-release text listing of a document, used as golden test data.
//!
//! ```text
//! ### v2 - count 1
//!
//! 0023_fe0f_20e3	#️⃣	keycap: #
//!
//! ```

use std::collections::BTreeMap;

use crate::{
    document::{Document, EmojiEntry},
    error::Result,
    version::Version,
};

fn entry_line(entry: &EmojiEntry) -> Result<String> {
    let code = entry.code();
    let mut line = format!("{}\t{}\t{}", code, code.glyph()?, entry.name());
    if let Some(unqualified) = code.unqualified() {
        line.push_str(&format!(
            "\t(UNQUALIFIED: {} {})",
            unqualified,
            unqualified.glyph()?
        ));
    }
    Ok(line)
}

/// Group every emoji of `doc` by release, oldest release first.
pub fn render_fixture(doc: &Document) -> Result<String> {
    let mut by_version: BTreeMap<Version, Vec<&EmojiEntry>> = BTreeMap::new();
    for entry in doc.entries() {
        by_version.entry(entry.version()).or_default().push(entry);
    }

    let mut ret = String::new();
    for (version, entries) in by_version {
        ret.push_str(&format!("### v{} - count {}\n\n", version, entries.len()));
        for entry in entries {
            ret.push_str(&entry_line(entry)?);
            ret.push('\n');
        }
        ret.push('\n');
    }
    Ok(ret)
}
