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

use std::path::PathBuf;

use jiff::tz::TimeZone;

use crate::Append;
use crate::Layout;
use crate::LevelMask;
use crate::Logger;
use crate::Trap;
use crate::append::SingleFileBuilder;
use crate::append::Stderr;
use crate::layout::JsonLayout;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] with the defaults: mask [`LevelMask::ERROR`], stderr on, no
/// log file, [`JsonLayout`].
///
/// # Examples
///
/// ```
/// let logger = linelog::builder().level("warn").build();
///
/// logger.warn().str("component", "cache").msg("eviction storm");
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        mask: LevelMask::default(),
        stderr: true,
        file: None,
        log_file: PathBuf::new(),
        layout: Box::new(JsonLayout::default()),
        timezone: None,
        appends: vec![],
        trap: Box::new(DefaultTrap::default()),
    }
}

/// A builder for configuring a [`Logger`].
#[must_use = "call `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    mask: LevelMask,
    stderr: bool,
    file: Option<SingleFileBuilder>,
    log_file: PathBuf,
    layout: Box<dyn Layout>,
    timezone: Option<TimeZone>,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Set the mask from a level name: `trace`, `debug`, `info`, `warn` or `error`, in any case.
    ///
    /// An unrecognized name keeps the current mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelog::LevelMask;
    ///
    /// let logger = linelog::builder().level("INFO").build();
    /// assert_eq!(logger.mask(), LevelMask::ERROR | LevelMask::WARN | LevelMask::INFO);
    ///
    /// let logger = linelog::builder().level("loud").build();
    /// assert_eq!(logger.mask(), LevelMask::ERROR);
    /// ```
    pub fn level(mut self, name: &str) -> Self {
        if let Some(mask) = LevelMask::from_name(name) {
            self.mask = mask;
        }
        self
    }

    /// Set the mask directly.
    pub fn mask(mut self, mask: LevelMask) -> Self {
        self.mask = mask;
        self
    }

    /// Whether to write lines to stderr. Default to `true`.
    pub fn stderr(mut self, stderr: bool) -> Self {
        self.stderr = stderr;
        self
    }

    /// Write lines to `<dir>/<filename>` as well.
    ///
    /// An empty `filename` disables the file sink but still records the resolved path.
    pub fn file(mut self, dir: impl Into<PathBuf>, filename: &str) -> Self {
        let dir = dir.into();
        self.log_file = dir.join(filename);
        self.file = (!filename.is_empty()).then(|| SingleFileBuilder::new(dir, filename));
        self
    }

    /// Set the layout lines are rendered with. Default to [`JsonLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the timezone for timestamps. Default to the system timezone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Add a sink, written after stderr and the log file.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Set the trap that receives failures to open the log file. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    ///
    /// If the log file cannot be opened, the error goes to the trap and the logger is built
    /// without the file sink.
    pub fn build(self) -> Logger {
        let LoggerBuilder {
            mask,
            stderr,
            file,
            log_file,
            layout,
            timezone,
            appends: extra,
            trap,
        } = self;

        let mut appends: Vec<Box<dyn Append>> = vec![];
        if stderr {
            appends.push(Box::new(Stderr::default()));
        }
        if let Some(file) = file {
            match file.build() {
                Ok(file) => appends.push(Box::new(file)),
                Err(err) => trap.trap(&err),
            }
        }
        appends.extend(extra);

        Logger::new(mask, layout, timezone, appends, log_file)
    }
}

/// Build a logger the one-call way and write the startup announcement.
///
/// This is equivalent to
///
/// ```
/// # let (dir, file, level, stderr) = ("/tmp/linelog-doc", "", "info", false);
/// let logger = linelog::builder()
///     .level(level)
///     .stderr(stderr)
///     .file(dir, file)
///     .build();
/// logger.announce("linelog", level);
/// ```
///
/// # Examples
///
/// ```no_run
/// let logger = linelog::init("/var/log/my_service", "app.log", "warn", true);
///
/// logger.error().str("component", "x").msg("boom");
/// logger.shutdown().unwrap();
/// ```
pub fn init(dir: impl Into<PathBuf>, file: &str, level: &str, stderr: bool) -> Logger {
    let logger = builder().level(level).stderr(stderr).file(dir, file).build();
    logger.announce(env!("CARGO_PKG_NAME"), level);
    logger
}
