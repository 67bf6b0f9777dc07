//
// emojiver - subcommands.rs
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

use std::io::{Read, Write};

use emojiverlib::{build_document, render_fixture};

use crate::*;

fn read_input(input: Option<PathOrStdio>) -> Result<String> {
    match input {
        Some(PathOrStdio::Path(path)) => std::fs::read_to_string(&path)
            .chain_err_summary(|| format!("Could not read {}", path.display()))
            .chain_err_related_path(&path),
        Some(PathOrStdio::Stdio) | None => {
            let mut ret = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut ret)
                .chain_err_summary(|| "Could not read standard input")?;
            Ok(ret)
        }
    }
}

/// Output is only touched once `contents` is complete.
fn write_output(output: Option<PathOrStdio>, contents: &str) -> Result<()> {
    match output {
        Some(PathOrStdio::Path(path)) => std::fs::write(&path, contents)
            .chain_err_summary(|| format!("Could not write {}", path.display()))
            .chain_err_related_path(&path),
        Some(PathOrStdio::Stdio) | None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Run the pipeline over the configured sources and write the JSON
/// document.
pub fn generate(settings: &Settings, output: Option<PathOrStdio>) -> Result<()> {
    let sources = settings.sources.sources();
    let doc = build_document(&sources, settings.output.table_options())?;
    log::info!(
        "{} releases, {} emoji in {} groups",
        doc.versions.len(),
        doc.entries().count(),
        doc.groups.len()
    );
    let json = doc.to_json(settings.output.json_style())?;
    write_output(output, &json)
}

pub fn make_test(input: Option<PathOrStdio>, output: Option<PathOrStdio>) -> Result<()> {
    let doc = Document::from_json(&read_input(input)?)?;
    let fixture = render_fixture(&doc)?;
    write_output(output, &fixture)
}

pub fn print_default_config() -> Result<()> {
    write_output(None, &Settings::default().to_toml_string()?)
}
