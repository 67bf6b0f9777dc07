//
// emojiver - pipeline
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

//! Wires the parsers together: sequence tables, then the test table, then
//! the representative selection.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    document::{Document, Group},
    error::{Result, ResultIntoError},
    selector::select_representatives,
    sequences::VersionMap,
    test_table::{parse_test_table, TableOptions},
};

pub const EMOJI_TEST: &str = "emoji-test.txt";
pub const EMOJI_SEQUENCES: &str = "emoji-sequences.txt";
pub const EMOJI_ZWJ_SEQUENCES: &str = "emoji-zwj-sequences.txt";

/// Input files of one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sources {
    pub emoji_test: PathBuf,
    /// Sequence tables in merge order: on shared keys the later file wins.
    pub sequences: Vec<PathBuf>,
}

impl Sources {
    /// The standard file names inside `dir`, with ZWJ sequences merged after
    /// plain sequences.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            emoji_test: dir.join(EMOJI_TEST),
            sequences: vec![dir.join(EMOJI_SEQUENCES), dir.join(EMOJI_ZWJ_SEQUENCES)],
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .chain_err_summary(|| format!("Could not open {}", path.display()))
        .chain_err_related_path(path)?;
    Ok(BufReader::new(file))
}

/// Assemble a document from in-memory readers.
pub fn build_document_from_readers<I, R, T>(
    sequences: I,
    test_table: T,
    options: TableOptions,
) -> Result<Document>
where
    I: IntoIterator<Item = R>,
    R: BufRead,
    T: BufRead,
{
    let versions = VersionMap::from_readers(sequences)?;
    let groups = parse_test_table(test_table, &versions, options)?;
    Ok(assemble(&versions, groups))
}

/// Read every source file and assemble the document.
pub fn build_document(sources: &Sources, options: TableOptions) -> Result<Document> {
    let mut versions = VersionMap::new();
    for path in &sources.sequences {
        log::debug!("reading sequences from {}", path.display());
        versions
            .extend_from_reader(open(path)?)
            .chain_err_related_path(path)?;
    }
    log::debug!("reading test table from {}", sources.emoji_test.display());
    let groups = parse_test_table(open(&sources.emoji_test)?, &versions, options)
        .chain_err_related_path(&sources.emoji_test)?;
    Ok(assemble(&versions, groups))
}

fn assemble(versions: &VersionMap, groups: Vec<Group>) -> Document {
    let versions = versions.versions();
    let tests = select_representatives(&versions, &groups).into_pairs();
    Document {
        versions,
        tests,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;
    use crate::{error::ErrorKind, version::Version};

    #[test]
    fn test_build_document_from_dir() {
        let tmp_dir = TempDir::new().unwrap();
        for (name, content) in [
            (
                EMOJI_SEQUENCES,
                "0023 FE0F 20E3 ; Basic_Emoji ; fully-qualified # E2.0 keycap: #\n",
            ),
            (EMOJI_ZWJ_SEQUENCES, "# no ZWJ sequences\n"),
            (
                EMOJI_TEST,
                "# group: Smileys\n# subgroup: face-positive\n0023 FE0F 20E3 ; fully-qualified # 2.0 keycap: #\n",
            ),
        ] {
            let mut f = File::create(tmp_dir.path().join(name)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }
        let doc = build_document(&Sources::in_dir(tmp_dir.path()), TableOptions::default())
            .unwrap();
        assert_eq!(doc.versions, vec!["2".parse::<Version>().unwrap()]);
        assert_eq!(doc.groups.len(), 1);
        assert_eq!(doc.entries().count(), 1);
    }

    #[test]
    fn test_build_document_missing_file() {
        let tmp_dir = TempDir::new().unwrap();
        let err = build_document(&Sources::in_dir(tmp_dir.path()), TableOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
        assert_eq!(
            err.related_path.as_deref(),
            Some(tmp_dir.path().join(EMOJI_SEQUENCES).as_path())
        );
    }
}
