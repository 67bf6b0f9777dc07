//
// emojiver - version
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

//! Emoji release numbers.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, ErrorKind};

/// An emoji release such as `12`, `6.1` or `5.2`.
///
/// Whole numbers serialize as JSON integers and the rest as decimals, so a
/// document lists `[12, 6.1]` and not `[12.0, 6.1]`.
#[derive(Clone, Copy, Debug)]
pub struct Version(f64);

impl Version {
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 {
            // `-0.0` and `0.0` must hash alike.
            Some(Self(value + 0.0))
        } else {
            None
        }
    }

    pub const fn as_f64(self) -> f64 {
        self.0
    }

    fn is_whole(self) -> bool {
        self.0.fract() == 0.0 && self.0 <= u64::MAX as f64
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Parse a version token. The `E` prefix of newer data files (`E13.1`)
    /// is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('E').unwrap_or(s);
        let value: f64 = digits
            .parse()
            .map_err(|err| Error::from(err).set_summary(format!("Invalid version `{}`", s)))?;
        Self::new(value).ok_or_else(|| {
            Error::new(format!("Invalid version `{}`", s)).set_kind(ErrorKind::ValueError)
        })
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_whole() {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid emoji version {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!("12".parse::<Version>().unwrap().as_f64(), 12.0);
        assert_eq!("E2.0".parse::<Version>().unwrap().as_f64(), 2.0);
        assert_eq!(" 6.1".parse::<Version>().unwrap().as_f64(), 6.1);
        assert_eq!(
            "NA".parse::<Version>().unwrap_err().kind,
            ErrorKind::ValueError
        );
        assert!("-1".parse::<Version>().is_err());
    }

    #[test]
    fn test_version_order_and_display() {
        let mut v: Vec<Version> = ["1.1", "12", "6.1", "6", "5.2"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        v.sort_by(|a, b| b.cmp(a));
        assert_eq!(
            v.iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["12", "6.1", "6", "5.2", "1.1"]
        );
    }

    #[test]
    fn test_version_json() {
        let v: Vec<Version> = ["12", "6.1", "E2.0"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[12,6.1,2]");
        let back: Vec<Version> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }
}
