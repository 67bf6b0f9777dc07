//
// emojiver - parser
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

//! Shared `nom` plumbing for the line grammars of the data files.

use std::borrow::Cow;

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    error::ErrorKind,
    sequence::{pair, tuple},
};

use crate::error::{Error, ErrorKind as EmojiErrorKind};

#[derive(Debug, Eq, PartialEq)]
pub struct ParsingError<I> {
    pub input: I,
    pub error: Cow<'static, str>,
}

pub type IResult<I, O, E = ParsingError<I>> = std::result::Result<(I, O), nom::Err<E>>;

impl<I> nom::error::ParseError<I> for ParsingError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Self {
            input,
            error: kind.description().to_string().into(),
        }
    }

    fn append(input: I, kind: ErrorKind, other: Self) -> Self {
        Self {
            input,
            error: format!("{}, {}", kind.description(), other.error).into(),
        }
    }
}

impl<'i> From<ParsingError<&'i str>> for Error {
    fn from(val: ParsingError<&'i str>) -> Self {
        Self::new("Parsing error")
            .set_details(format!(
                r#"In input: "{}...",
Error: {}"#,
                val.input.chars().take(30).collect::<String>(),
                val.error
            ))
            .set_kind(EmojiErrorKind::Parsing)
    }
}

impl<'i> From<nom::Err<ParsingError<&'i str>>> for Error {
    fn from(val: nom::Err<ParsingError<&'i str>>) -> Self {
        match val {
            nom::Err::Incomplete(_) => {
                Self::new("Parsing Error: Incomplete").set_kind(EmojiErrorKind::Parsing)
            }
            nom::Err::Error(err) | nom::Err::Failure(err) => err.into(),
        }
    }
}

/// An emoji release number, optionally prefixed with `E`: `12`, `6.1`,
/// `E13.1`.
pub fn version_token(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char('E')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

/// A run of non-whitespace characters.
pub fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_token() {
        assert_eq!(version_token("E2.0 keycap"), Ok((" keycap", "E2.0")));
        assert_eq!(version_token("12  [1]"), Ok(("  [1]", "12")));
        assert_eq!(version_token("5.2."), Ok((".", "5.2")));
        assert!(version_token("NA").is_err());
        assert!(version_token("E").is_err());
    }

    #[test]
    fn test_parsing_error_into_error() {
        let err: Error = version_token("NA").unwrap_err().into();
        assert_eq!(err.kind, EmojiErrorKind::Parsing);
        assert!(err.to_string().contains(r#"In input: "NA...""#));
    }
}
