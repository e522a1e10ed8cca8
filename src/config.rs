// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deserializable logger configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Logger;
use crate::LoggerBuilder;
use crate::layout::JsonLayout;
use crate::layout::LegacyLayout;

/// The line format written to every sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// [`JsonLayout`]: escaped JSON with native number and boolean values.
    #[default]
    Json,
    /// [`LegacyLayout`]: the historical unescaped format with every value quoted.
    Legacy,
}

/// Logger configuration, typically embedded in an application's own config file.
///
/// Every field is optional when deserializing.
///
/// # Examples
///
/// ```
/// let config: linelog::Config = serde_json::from_str(
///     r#"{"dir": "/tmp/linelog-doc", "level": "info", "stderr": false}"#,
/// )
/// .unwrap();
///
/// let logger = config.init();
/// logger.info().msg("configured");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of the log file, created with mode 0700 if missing.
    pub dir: PathBuf,
    /// Name of the log file; empty for no file.
    pub file: String,
    /// Level name; unrecognized names fall back to `error`.
    pub level: String,
    /// Whether to write to stderr.
    pub stderr: bool,
    /// Component name recorded by the startup announcement.
    pub component: String,
    /// Line format.
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            file: String::new(),
            level: "error".to_string(),
            stderr: true,
            component: env!("CARGO_PKG_NAME").to_string(),
            format: Format::default(),
        }
    }
}

impl Config {
    /// Create a [`LoggerBuilder`] from this configuration.
    pub fn builder(&self) -> LoggerBuilder {
        let builder = crate::builder()
            .level(&self.level)
            .stderr(self.stderr)
            .file(&self.dir, &self.file);
        match self.format {
            Format::Json => builder.layout(JsonLayout::default()),
            Format::Legacy => builder.layout(LegacyLayout::default()),
        }
    }

    /// Build the logger and write the startup announcement.
    pub fn init(&self) -> Logger {
        let logger = self.builder().build();
        logger.announce(&self.component, &self.level);
        logger
    }
}
