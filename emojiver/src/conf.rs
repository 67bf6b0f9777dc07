//
// emojiver - conf.rs
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

//! Configuration file.
//!
//! Every key is optional. Command line flags are applied on top with
//! [`Settings::apply_args`].

use std::{path::Path, sync::Arc};

use emojiverlib::pipeline::{Sources, EMOJI_SEQUENCES, EMOJI_TEST, EMOJI_ZWJ_SEQUENCES};

use crate::*;

pub const DEFAULT_DATA_DIR: &str = "data-sources";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesSettings {
    /// Base directory for relative paths.
    pub data_dir: PathBuf,
    pub emoji_test: PathBuf,
    /// Merge order: on shared code points the later file wins.
    pub sequences: Vec<PathBuf>,
}

impl Default for SourcesSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            emoji_test: PathBuf::from(EMOJI_TEST),
            sequences: vec![
                PathBuf::from(EMOJI_SEQUENCES),
                PathBuf::from(EMOJI_ZWJ_SEQUENCES),
            ],
        }
    }
}

impl SourcesSettings {
    pub fn sources(&self) -> Sources {
        Sources {
            emoji_test: self.data_dir.join(&self.emoji_test),
            sequences: self
                .sequences
                .iter()
                .map(|p| self.data_dir.join(p))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub pretty: bool,
    pub no_skin_tone: bool,
}

impl OutputSettings {
    pub fn json_style(&self) -> JsonStyle {
        if self.pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            exclude_skin_tones: self.no_skin_tone,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub level: LogLevel,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub sources: SourcesSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        serde_path_to_error::deserialize(toml::Deserializer::new(s)).map_err(|err| {
            Error::new("Configuration file contains errors")
                .set_source(Some(Arc::new(err)))
                .set_kind(ErrorKind::Configuration)
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read configuration file {}", path.display()))
            .chain_err_related_path(path)?;
        Self::from_toml_str(&s).chain_err_related_path(path)
    }

    /// Defaults, or the file given with `--config`, with flags applied.
    pub fn new(opt: &Opt) -> Result<Self> {
        let mut ret = match opt.config.as_deref() {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        ret.apply_args(opt);
        Ok(ret)
    }

    /// Flags can only turn toggles on.
    pub fn apply_args(&mut self, opt: &Opt) {
        if opt.pretty {
            self.output.pretty = true;
        }
        if opt.no_skin_tone {
            self.output.no_skin_tone = true;
        }
        if let Some(dir) = opt.data_dir.as_ref() {
            self.sources.data_dir = dir.clone();
        }
        if let Some(level) = opt.log_level {
            self.log.level = level;
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| {
            Error::new("Could not serialize configuration")
                .set_details(err.to_string())
                .set_kind(ErrorKind::Configuration)
        })
    }
}
