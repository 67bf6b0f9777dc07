//
// emojiver - error module
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

//! An error object for `emojiverlib`

use std::{borrow::Cow, fmt, io, path::PathBuf, result, sync::Arc};

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    /// Unspecified
    #[default]
    None,
    /// Reading or writing a stream failed.
    Io,
    /// Input did not match a grammar where a match was required.
    Parsing,
    /// A recognized line carries a value that cannot be used, such as a
    /// non-hexadecimal code point.
    ValueError,
    /// A code-point field mixes a range divider with a multi code point
    /// sequence.
    MalformedInput,
    /// A subgroup header or emoji row appeared outside of an open group or
    /// subgroup.
    Structure,
    /// An emoji row has no entry in the version table.
    MissingVersion,
    /// Invalid configuration values.
    Configuration,
}

impl ErrorKind {
    /// Whether this error means the input tables disagree with each other.
    pub const fn is_fatal_integrity(self) -> bool {
        matches!(
            self,
            Self::MalformedInput | Self::Structure | Self::MissingVersion
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Self::None => "Error",
                Self::Io => "I/O error",
                Self::Parsing => "Parsing error",
                Self::ValueError => "Invalid value",
                Self::MalformedInput => "Malformed input",
                Self::Structure => "Data integrity error: missing enclosing group",
                Self::MissingVersion => "Data integrity error: missing version",
                Self::Configuration => "Configuration error",
            }
        )
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Cow<'static, str>,
    pub details: Option<Cow<'static, str>>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub related_path: Option<PathBuf>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;

    fn chain_err_related_path(self, p: &std::path::Path) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_details<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_details(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_details<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_details(msg_fn()))
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }

    #[inline]
    fn chain_err_related_path(self, p: &std::path::Path) -> Result<T> {
        self.map_err(|err| Into::<Error>::into(err).set_related_path(Some(p)))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: msg.into(),
            details: None,
            source: None,
            related_path: None,
            kind: ErrorKind::None,
        }
    }

    pub fn set_details<M>(mut self, details: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        if let Some(old_details) = self.details.as_ref() {
            self.details = Some(format!("{}. {}", old_details, details.into()).into());
        } else {
            self.details = Some(details.into());
        }
        self
    }

    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let old_summary = std::mem::replace(&mut self.summary, summary.into());
        if !old_summary.is_empty() {
            self = self.set_details(old_summary);
        }
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }

    pub fn set_related_path<P: Into<PathBuf>>(mut self, new_val: Option<P>) -> Self {
        self.related_path = new_val.map(Into::into);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.kind != ErrorKind::None {
            write!(f, "{}: ", self.kind)?;
        }
        write!(f, "{}", self.summary)?;
        if let Some(details) = self.details.as_ref() {
            if !details.trim().is_empty() {
                write!(f, "\n{}", details)?;
            }
        }
        if let Some(ref path) = self.related_path {
            write!(f, "\nRelated path: {}", path.display())?;
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        let s = err.to_string();
        Self::new(s)
            .set_kind(ErrorKind::Io)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::Parsing)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<std::num::ParseIntError> for Error {
    #[inline]
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<std::num::ParseFloatError> for Error {
    #[inline]
    fn from(err: std::num::ParseFloatError) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<Box<dyn std::error::Error + Sync + Send + 'static>> for Error {
    #[inline]
    fn from(err: Box<dyn std::error::Error + Sync + Send + 'static>) -> Self {
        Self::new(err.to_string()).set_source(Some(err.into()))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(err: &str) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(err: String) -> Self {
        Self::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::new("no version found for 1f600 (grinning face)")
            .set_kind(ErrorKind::MissingVersion)
            .set_related_path(Some("data-sources/emoji-test.txt"));
        let s = err.to_string();
        assert!(s.starts_with("Data integrity error: missing version: no version found"));
        assert!(s.ends_with("Related path: data-sources/emoji-test.txt"));
        assert!(err.kind.is_fatal_integrity());
    }

    #[test]
    fn test_error_summary_chain() {
        let res: Result<()> = Err(Error::new("inner"));
        let err = res.chain_err_summary(|| "outer").unwrap_err();
        assert_eq!(err.summary, "outer");
        assert_eq!(err.details.as_deref(), Some("inner"));
        assert!(!ErrorKind::Io.is_fatal_integrity());
    }
}
