//
// emojiver - range
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

//! Expansion of `start..end` code point ranges.

use crate::{
    codekey::CodeKey,
    error::{Error, ErrorKind, Result},
};

/// Divider between the two ends of a range, e.g. `1F3FB..1F3FF`.
pub const RANGE_DIVIDER: &str = "..";

/// Widest range accepted: the size of the Unicode code space.
pub const MAX_RANGE_LEN: u32 = 0x11_0000;

/// Expand an inclusive range between two canonical keys.
///
/// Both ends share a literal prefix; the first differing character starts a
/// hexadecimal suffix. Generated suffixes are zero padded to the width of the
/// suffix of `start`, so that `0023..0025` gives `0023`, `0024`, `0025`
/// instead of `23`, `24`, `25`.
///
/// An inverted range yields no keys. A range wider than the code space is an
/// error.
pub fn expand_range(start: &str, end: &str) -> Result<Vec<CodeKey>> {
    if start == end {
        return Ok(vec![CodeKey::from_canonical(start)]);
    }

    let prefix_len = start
        .char_indices()
        .zip(end.chars())
        .find(|((_, s), e)| s != e)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| start.len().min(end.len()));
    let (prefix, start_suffix) = start.split_at(prefix_len);
    let end_suffix = &end[prefix_len..];

    let parse_suffix = |suffix: &str| -> Result<u32> {
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::new(format!(
                "Invalid code point range `{}{}{}`",
                start, RANGE_DIVIDER, end
            ))
            .set_details(format!("`{}` is not a hexadecimal suffix.", suffix))
            .set_kind(ErrorKind::ValueError));
        }
        Ok(u32::from_str_radix(suffix, 16)?)
    };
    let first = parse_suffix(start_suffix)?;
    let last = parse_suffix(end_suffix)?;
    if last >= first && last - first >= MAX_RANGE_LEN {
        return Err(Error::new(format!(
            "Invalid code point range `{}{}{}`",
            start, RANGE_DIVIDER, end
        ))
        .set_details(format!(
            "A range cannot span more than {:#x} code points.",
            MAX_RANGE_LEN
        ))
        .set_kind(ErrorKind::ValueError));
    }
    let width = start_suffix.len();

    Ok((first..=last)
        .map(|t| CodeKey::from_canonical(format!("{}{:0width$x}", prefix, t, width = width)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(v: &[CodeKey]) -> Vec<&str> {
        v.iter().map(CodeKey::as_str).collect()
    }

    #[test]
    fn test_range_expand() {
        assert_eq!(
            keys(&expand_range("1f3fb", "1f3fe").unwrap()),
            ["1f3fb", "1f3fc", "1f3fd", "1f3fe"]
        );
        assert_eq!(
            keys(&expand_range("1f1e6", "1f1ff").unwrap()).len(),
            0x1a
        );
        assert_eq!(
            keys(&expand_range("0023", "0025").unwrap()),
            ["0023", "0024", "0025"]
        );
        assert_eq!(
            keys(&expand_range("0030", "0039").unwrap()).last(),
            Some(&"0039")
        );
    }

    #[test]
    fn test_range_single_element() {
        assert_eq!(keys(&expand_range("231a", "231a").unwrap()), ["231a"]);
    }

    #[test]
    fn test_range_crosses_digit_boundary() {
        assert_eq!(
            keys(&expand_range("26f8", "2702").unwrap()),
            [
                "26f8", "26f9", "26fa", "26fb", "26fc", "26fd", "26fe", "26ff", "2700", "2701",
                "2702"
            ]
        );
    }

    #[test]
    fn test_range_inverted_is_empty() {
        assert!(expand_range("1f3fe", "1f3fb").unwrap().is_empty());
    }

    #[test]
    fn test_range_too_wide() {
        let err = expand_range("0000", "ffffffff").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
        assert!(err.to_string().contains("0x110000"));
    }

    #[test]
    fn test_range_invalid() {
        assert_eq!(
            expand_range("1f3fz", "1f3fy").unwrap_err().kind,
            ErrorKind::ValueError
        );
        assert_eq!(
            expand_range("1f3f", "1f3f0").unwrap_err().kind,
            ErrorKind::ValueError
        );
    }
}
