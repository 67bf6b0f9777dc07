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
    unsafe_op_in_unsafe_fn,
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

//! Turn the Unicode emoji data files into one structured document.
//!
//! The pipeline reads three plain text tables:
//! - `emoji-sequences.txt` and `emoji-zwj-sequences.txt` give the release
//!   that introduced each code point sequence (see module [`sequences`]).
//! - `emoji-test.txt` lists every emoji under its group and subgroup (see
//!   module [`test_table`]).
//!
//! Rows are joined on a canonical [`CodeKey`], each gets its [`Version`], and
//! one representative per release is picked for smoke tests (see module
//! [`selector`]). The result is a [`Document`] that serializes to JSON.
//!
//! ```rust
//! use emojiverlib::{build_document_from_readers, JsonStyle, TableOptions};
//!
//! let sequences = "0023 FE0F 20E3 ; Basic_Emoji ; fully-qualified # E2.0 keycap: #\n";
//! let test_table = concat!(
//!     "# group: Smileys\n",
//!     "# subgroup: face-positive\n",
//!     "0023 FE0F 20E3 ; fully-qualified # 2.0 keycap: #\n",
//! );
//! let doc = build_document_from_readers(
//!     [sequences.as_bytes()],
//!     test_table.as_bytes(),
//!     TableOptions::default(),
//! )
//! .unwrap();
//! assert!(doc
//!     .to_json(JsonStyle::Compact)
//!     .unwrap()
//!     .starts_with(r#"{"versions":[2],"#));
//! ```

#[macro_use]
extern crate serde_derive;
pub extern crate indexmap;
pub extern crate log;

pub mod codekey;
pub mod document;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod range;
pub mod selector;
pub mod sequences;
pub mod test_table;
pub mod version;

pub use codekey::CodeKey;
pub use document::{Document, EmojiEntry, Group, JsonStyle, Subgroup};
pub use error::{Error, ErrorKind, IntoError, Result, ResultIntoError};
pub use fixture::render_fixture;
pub use logging::{LogLevel, StderrLogger};
pub use pipeline::{build_document, build_document_from_readers, Sources};
pub use selector::{select_representatives, Representatives};
pub use sequences::VersionMap;
pub use test_table::TableOptions;
pub use version::Version;
