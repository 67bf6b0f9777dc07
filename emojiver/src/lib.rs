//
// emojiver - lib.rs
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

#![deny(
    rustdoc::redundant_explicit_links,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]

//! Command line frontend.
//!
//! Parsing and the data model live in the `emojiverlib` crate. This crate
//! only reads arguments and the configuration file, picks input and output
//! streams and reports errors.

pub use std::path::PathBuf;

#[macro_use]
extern crate serde_derive;

pub use structopt::StructOpt;

pub extern crate emojiverlib;
pub extern crate log;
pub use emojiverlib::{error::*, Document, JsonStyle, LogLevel, StderrLogger, TableOptions};

pub mod args;
pub mod conf;
pub mod subcommands;

pub use crate::{args::*, conf::Settings};
