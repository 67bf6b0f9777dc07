//
// emojiver - main.rs
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

//! Command line binary.
//!
//! Without a subcommand, reads the Unicode emoji data files and prints the
//! versioned emoji document as JSON.

use emojiver::*;

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(mut opt: Opt) -> Result<()> {
    let mut logger = StderrLogger::new(opt.log_level.unwrap_or_default());

    if let Some(result) = opt.execute() {
        return result;
    }

    let settings = Settings::new(&opt)?;
    logger.change_log_level(settings.log.level);
    log::debug!("settings: {:?}", settings);

    subcommands::generate(&settings, opt.output.take())
}
