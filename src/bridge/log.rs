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

//! A bridge to forward logs from the `log` crate.

use crate::Level;
use crate::Logger;
use crate::default_logger;
use crate::kv::Field;
use crate::kv::Value;

fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}

struct KvCollector<'a> {
    fields: &'a mut Vec<Field>,
}

impl<'kvs> log::kv::VisitSource<'kvs> for KvCollector<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        self.fields
            .push((key.as_str().to_owned(), Value::Str(value.to_string())));
        Ok(())
    }
}

/// Events from the `log` crate: key-values become string fields, in order, and the formatted
/// arguments become the message.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, level_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let level = level_of(record.level());
        if !Logger::enabled(self, level) {
            return;
        }

        let mut fields = vec![];
        let mut visitor = KvCollector {
            fields: &mut fields,
        };
        let _ = record.key_values().visit(&mut visitor);

        self.emit(level, &fields, &record.args().to_string());
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record)
    }

    fn flush(&self) {
        log::Log::flush(default_logger())
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that all logs from the log crate are forwarded to
/// the [`default_logger`]. Set it with [`set_default_logger`](crate::set_default_logger) before
/// or after this call; until then the fallback logger is used.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = linelog::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// linelog::bridge::setup_log_crate();
/// log::error!("forwarded to the default logger");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "linelog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use log::Log;

    use crate::append::Testing;

    #[test]
    fn test_log_record_to_line() {
        let capture = Testing::default();
        let logger = crate::builder()
            .level("warn")
            .stderr(false)
            .append(capture.clone())
            .build();

        let kvs: &[(&str, &str)] = &[("user", "alice"), ("attempt", "2")];
        logger.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("login {} failed", "ssh"))
                .key_values(&kvs)
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("filtered"))
                .build(),
        );

        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(
            lines[0].ends_with(
                r#""level":"warn","user":"alice","attempt":"2","message":"login ssh failed"}"#
            ),
            "{}",
            lines[0]
        );
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(!Log::enabled(&logger, &debug));
    }
}
