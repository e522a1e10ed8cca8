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

use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Append;
use crate::Error;
use crate::Layout;
use crate::Level;
use crate::LevelMask;
use crate::kv::Field;
use crate::logger::event::Event;
use crate::record::Record;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();
static FALLBACK_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the process-wide default logger.
///
/// Before [`set_default_logger`] is called, this is a logger that writes errors and fatal events
/// to stderr.
pub fn default_logger() -> &'static Logger {
    match DEFAULT_LOGGER.get() {
        Some(logger) => logger,
        None => FALLBACK_LOGGER.get_or_init(|| crate::builder().build()),
    }
}

/// Set the process-wide default logger.
///
/// # Errors
///
/// Return the logger back if a default logger has already been set.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// A logger that filters events by a [`LevelMask`] and writes rendered lines to its sinks.
///
/// Loggers are built with [`builder`](crate::builder) or [`init`](crate::init) and passed to
/// the code that logs; nothing is global unless [`set_default_logger`] is called.
#[derive(Debug)]
pub struct Logger {
    mask: LevelMask,
    layout: Box<dyn Layout>,
    timezone: Option<TimeZone>,
    appends: Vec<Box<dyn Append>>,
    log_file: PathBuf,
}

impl Logger {
    pub(super) fn new(
        mask: LevelMask,
        layout: Box<dyn Layout>,
        timezone: Option<TimeZone>,
        appends: Vec<Box<dyn Append>>,
        log_file: PathBuf,
    ) -> Self {
        Self {
            mask,
            layout,
            timezone,
            appends,
            log_file,
        }
    }

    /// The mask events are filtered by.
    pub fn mask(&self) -> LevelMask {
        self.mask
    }

    /// Whether events at `level` are written.
    pub fn enabled(&self, level: Level) -> bool {
        self.mask.enables(level)
    }

    /// The resolved log file path, `<dir>/<file>`.
    ///
    /// The path is recorded even if the file could not be opened.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Start an event at `level`.
    pub fn event(&self, level: Level) -> Event<'_> {
        Event::new(self, level)
    }

    /// Start a trace event.
    pub fn trace(&self) -> Event<'_> {
        self.event(Level::Trace)
    }

    /// Start a debug event.
    pub fn debug(&self) -> Event<'_> {
        self.event(Level::Debug)
    }

    /// Start an info event.
    pub fn info(&self) -> Event<'_> {
        self.event(Level::Info)
    }

    /// Start a warn event.
    pub fn warn(&self) -> Event<'_> {
        self.event(Level::Warn)
    }

    /// Start an error event.
    pub fn error(&self) -> Event<'_> {
        self.event(Level::Error)
    }

    /// Start a fatal event. Fatal events are never filtered and do not end the process.
    pub fn fatal(&self) -> Event<'_> {
        self.event(Level::Fatal)
    }

    /// Write the startup announcement.
    ///
    /// This is an ordinary info event, so it is filtered like any other.
    pub fn announce(&self, component: &str, level_name: &str) {
        self.info()
            .str("component", component)
            .str("log_level", level_name)
            .str("file", &self.log_file.to_string_lossy())
            .msg("logging started");
    }

    pub(crate) fn emit(&self, level: Level, fields: &[Field], message: &str) {
        let time = match &self.timezone {
            Some(tz) => Timestamp::now().to_zoned(tz.clone()),
            None => Zoned::now(),
        };
        let record = Record::new(time, level, fields, message);

        let Ok(mut line) = self.layout.format(&record) else {
            return;
        };
        line.push(b'\n');

        for append in &self.appends {
            let _ = append.append(&line);
        }
    }

    /// Flush every sink.
    ///
    /// # Errors
    ///
    /// Return the first flush error; the remaining sinks are still flushed.
    pub fn flush(&self) -> Result<(), Error> {
        let mut result = Ok(());
        for append in &self.appends {
            let flushed = append.flush();
            if result.is_ok() {
                result = flushed;
            }
        }
        result
    }

    /// Flush and close every sink.
    ///
    /// Succeeds trivially when no file was opened.
    ///
    /// # Errors
    ///
    /// Return the first flush error; every sink is closed regardless.
    pub fn shutdown(self) -> Result<(), Error> {
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::append::Testing;
    use crate::layout::LegacyLayout;

    #[derive(Debug)]
    struct FailingAppend;

    impl Append for FailingAppend {
        fn append(&self, _: &[u8]) -> Result<(), Error> {
            Err(Error::new("sink is gone"))
        }

        fn flush(&self) -> Result<(), Error> {
            Err(Error::new("sink is gone"))
        }
    }

    #[test]
    fn test_filter_per_level() {
        let cases = [
            ("info", vec![Level::Fatal, Level::Error, Level::Warn, Level::Info]),
            ("warn", vec![Level::Fatal, Level::Error, Level::Warn]),
            ("error", vec![Level::Fatal, Level::Error]),
            ("nonsense", vec![Level::Fatal, Level::Error]),
            (
                "debug",
                vec![
                    Level::Fatal,
                    Level::Error,
                    Level::Warn,
                    Level::Info,
                    Level::Debug,
                    Level::Trace,
                ],
            ),
        ];

        for (name, expected) in cases {
            let capture = Testing::default();
            let logger = crate::builder()
                .level(name)
                .stderr(false)
                .append(capture.clone())
                .build();
            for level in [
                Level::Fatal,
                Level::Error,
                Level::Warn,
                Level::Info,
                Level::Debug,
                Level::Trace,
            ] {
                logger.event(level).msg("probe");
            }

            let levels = capture
                .lines()
                .iter()
                .map(|line| {
                    let v: serde_json::Value = serde_json::from_str(line).unwrap();
                    v["level"].as_str().unwrap().to_string()
                })
                .collect::<Vec<_>>();
            let expected = expected
                .iter()
                .map(|l| l.as_str().to_string())
                .collect::<Vec<_>>();
            assert_eq!(levels, expected, "level name {name:?}");
        }
    }

    #[test]
    fn test_same_bytes_to_every_sink() {
        let first = Testing::default();
        let second = Testing::default();
        let logger = crate::builder()
            .stderr(false)
            .layout(LegacyLayout::default())
            .append(first.clone())
            .append(second.clone())
            .build();

        logger.error().str("component", "x").msg("boom");

        assert_eq!(first.contents(), second.contents());
        assert!(first.contents().ends_with("\n"));
        assert_eq!(first.lines().len(), 1);
    }

    #[test]
    fn test_write_errors_are_ignored() {
        let capture = Testing::default();
        let logger = crate::builder()
            .stderr(false)
            .append(FailingAppend)
            .append(capture.clone())
            .build();

        logger.error().msg("still delivered");
        assert_eq!(capture.lines().len(), 1);
        assert_eq!(logger.flush().unwrap_err().message(), "sink is gone");
    }

    #[test]
    fn test_timestamp_taken_at_msg() {
        let capture = Testing::default();
        let logger = crate::builder()
            .stderr(false)
            .timezone(TimeZone::UTC)
            .append(capture.clone())
            .build();

        let before = Timestamp::now().as_second();
        logger.error().msg("now");
        let after = Timestamp::now().as_second();

        let line: serde_json::Value = serde_json::from_str(&capture.lines()[0]).unwrap();
        let time = line["time"].as_str().unwrap();
        assert!(time.ends_with('Z'), "{time}");
        let logged = time.parse::<Timestamp>().unwrap().as_second();
        assert!(before <= logged && logged <= after);
    }

    #[test]
    fn test_concurrent_lines_stay_whole() {
        let capture = Testing::default();
        let logger = Arc::new(
            crate::builder()
                .level("info")
                .stderr(false)
                .append(capture.clone())
                .build(),
        );

        let handles = (0..8)
            .map(|t| {
                let logger = logger.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        logger
                            .info()
                            .int("thread", t)
                            .int("i", i)
                            .str("pad", &"x".repeat(64))
                            .msg("concurrent");
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = capture.lines();
        assert_eq!(lines.len(), 800);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(&line).is_ok(), "{line}");
        }
    }

    #[test]
    fn test_shutdown_without_file() {
        let logger = crate::builder().stderr(false).build();
        logger.shutdown().unwrap();
    }
}
