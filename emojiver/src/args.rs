//
// emojiver - args.rs
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

//! Command line arguments.

use std::ffi::OsStr;

use super::*;

fn try_path_or_stdio(input: &OsStr) -> PathOrStdio {
    if input == "-" {
        PathOrStdio::Stdio
    } else {
        PathOrStdio::Path(PathBuf::from(input))
    }
}

fn parse_log_level(input: &str) -> Result<LogLevel> {
    input.parse()
}

/// `Pathbuf` or standard stream (`-` operand).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathOrStdio {
    /// Path
    Path(PathBuf),
    /// standard stream (`-` operand)
    Stdio,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "emojiver",
    about = "build a versioned emoji list from Unicode emoji data files",
    version_short = "v"
)]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// indent the JSON output
    #[structopt(short, long)]
    pub pretty: bool,

    /// leave out emoji whose name mentions a skin tone
    #[structopt(short = "S", long)]
    pub no_skin_tone: bool,

    /// directory holding emoji-test.txt and the sequence files
    #[structopt(short, long, value_name = "DIR", parse(from_os_str))]
    pub data_dir: Option<PathBuf>,

    /// one of OFF, ERROR, WARN, INFO, DEBUG, TRACE
    #[structopt(long, value_name = "LEVEL", parse(try_from_str = parse_log_level))]
    pub log_level: Option<LogLevel>,

    /// write the document to this file instead of standard output (`-`)
    #[structopt(short, long, value_name = "OUTPUT", parse(from_os_str = try_path_or_stdio))]
    pub output: Option<PathOrStdio>,

    #[structopt(subcommand)]
    pub subcommand: Option<SubCommand>,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// list a generated JSON document per release, for use as test data.
    /// Paths default to the standard streams, `-` selects them explicitly.
    #[structopt(display_order = 1)]
    MakeTest {
        #[structopt(value_name = "INPUT", parse(from_os_str = try_path_or_stdio))]
        input: Option<PathOrStdio>,
        #[structopt(value_name = "OUTPUT", parse(from_os_str = try_path_or_stdio))]
        output: Option<PathOrStdio>,
    },
    /// print the default configuration file to stdout and exit.
    #[structopt(display_order = 2)]
    PrintDefaultConfig,
}

impl Opt {
    /// Execute `self.subcommand` if any, and return its result. Otherwise
    /// return `None`.
    pub fn execute(&mut self) -> Option<Result<()>> {
        Some(match self.subcommand.take()? {
            SubCommand::MakeTest { input, output } => subcommands::make_test(input, output),
            SubCommand::PrintDefaultConfig => subcommands::print_default_config(),
        })
    }
}
