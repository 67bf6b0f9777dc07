//
// emojiver - sequences
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

//! Parsing of `emoji-sequences.txt` and `emoji-zwj-sequences.txt` into a
//! code to version table.
//!
//! Data lines look like:
//!
//! ```text
//! 231A..231B    ; Basic_Emoji            ; watch            # E0.6   [2] (⌚..⌛)
//! 0023 FE0F 20E3; Emoji_Keycap_Sequence  ; keycap: \x{23}   # E0.6   [1] (#️⃣)
//! ```
//!
//! The first field is either a single code point sequence or a range of
//! single code points, and the release is the first token of the trailing
//! comment.

use std::{collections::HashMap, io::BufRead};

use nom::{
    bytes::complete::{is_not, tag},
    character::complete::multispace0,
};

use crate::{
    codekey::CodeKey,
    error::{Error, ErrorKind, Result, ResultIntoError},
    parser::{version_token, IResult},
    range::{expand_range, RANGE_DIVIDER},
    version::Version,
};

/// The keys registered by one data line and their release.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionLine {
    pub codes: Vec<CodeKey>,
    pub version: Version,
}

/// `<code-spec> ; <field> ; <field> # <version> ...`
fn version_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, code_spec) = is_not(";")(input)?;
    let (input, _) = tag(";")(input)?;
    let (input, _) = is_not(";")(input)?;
    let (input, _) = tag(";")(input)?;
    let (input, _) = is_not("#")(input)?;
    let (input, _) = tag("#")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, version) = version_token(input)?;
    Ok((input, (code_spec, version)))
}

/// Parse one line of a sequence table.
///
/// Returns `Ok(None)` for blank lines, comments and anything else that does
/// not follow the grammar. A code point field that mixes a range divider with
/// a multi code point sequence is an error.
pub fn parse_version_line(line: &str) -> Result<Option<VersionLine>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let Ok((_, (code_spec, version))) = version_line(line) else {
        log::trace!("skipping line without a version: {:?}", line);
        return Ok(None);
    };
    let code_spec = code_spec.trim();
    if code_spec.contains(RANGE_DIVIDER) && code_spec.contains(char::is_whitespace) {
        return Err(Error::new(format!(
            "cannot have spaces and a range divider: {}",
            code_spec
        ))
        .set_kind(ErrorKind::MalformedInput));
    }
    let Some(key) = CodeKey::normalize(code_spec) else {
        return Ok(None);
    };
    let version: Version = version.parse()?;

    let codes = if let Some((start, end)) = key.as_str().split_once(RANGE_DIVIDER) {
        match expand_range(start, end) {
            Ok(codes) => codes,
            Err(err) => {
                log::warn!("skipping line {:?}: {}", line, err);
                return Ok(None);
            }
        }
    } else {
        // Lookups may use either qualification, so all forms share one
        // release.
        let mut codes = vec![key];
        for alias in [codes[0].unqualified(), codes[0].without_variation_selectors()]
            .into_iter()
            .flatten()
        {
            if !codes.contains(&alias) {
                codes.push(alias);
            }
        }
        codes
    };

    Ok(Some(VersionLine { codes, version }))
}

/// Code point sequence to the release that introduced it.
#[derive(Clone, Debug, Default)]
pub struct VersionMap {
    map: HashMap<CodeKey, Version>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from sources in merge order. When several sources
    /// register the same key, the last one wins, so ZWJ sequences must come
    /// after plain sequences.
    pub fn from_readers<I, R>(readers: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: BufRead,
    {
        let mut ret = Self::new();
        for reader in readers {
            ret.extend_from_reader(reader)?;
        }
        Ok(ret)
    }

    /// Register a key, returning the release it previously mapped to.
    pub fn insert(&mut self, code: CodeKey, version: Version) -> Option<Version> {
        self.map.insert(code, version)
    }

    pub fn get(&self, code: &str) -> Option<Version> {
        self.map.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.map.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CodeKey, Version)> + '_ {
        self.map.iter().map(|(k, v)| (k, *v))
    }

    /// Distinct releases, newest first.
    pub fn versions(&self) -> Vec<Version> {
        let mut ret: Vec<Version> = self.map.values().copied().collect();
        ret.sort_unstable_by(|a, b| b.cmp(a));
        ret.dedup();
        ret
    }

    /// Merge the lines of one sequence table. Returns the number of data
    /// lines that registered keys.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(VersionLine { codes, version }) = parse_version_line(&line)
                .chain_err_details(|| format!("Line {}: {:?}", idx + 1, line))?
            else {
                continue;
            };
            count += 1;
            for code in codes {
                if let Some(prev) = self.map.get(&code) {
                    if *prev != version {
                        log::trace!("{} changes release from {} to {}", code, prev, version);
                    }
                }
                self.map.insert(code, version);
            }
        }
        log::debug!(
            "read {} sequence lines, {} keys in total",
            count,
            self.map.len()
        );
        Ok(count)
    }

    pub fn extend_from_str(&mut self, s: &str) -> Result<usize> {
        self.extend_from_reader(s.as_bytes())
    }
}
