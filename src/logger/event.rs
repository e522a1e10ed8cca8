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

use std::fmt;

use crate::Level;
use crate::Logger;
use crate::kv::Field;
use crate::kv::Value;

/// A log event under construction.
///
/// Obtained from [`Logger::info`] and its siblings. Field setters return the event so they can
/// be chained, and [`Event::msg`] renders and writes it.
///
/// The filter decision is taken once, when the event is created: a filtered-out event is
/// [`Event::Suppressed`], which holds nothing and on which every call is a no-op.
///
/// # Examples
///
/// ```
/// let logger = linelog::builder().level("info").stderr(false).build();
///
/// logger
///     .error()
///     .str("component", "db")
///     .int("retries", 3)
///     .err(Some("connection reset"))
///     .msg("query failed");
///
/// assert!(!logger.debug().is_enabled());
/// ```
#[must_use = "call `msg` to emit the event"]
#[derive(Debug)]
pub enum Event<'a> {
    /// An event that passed the filter and accumulates fields.
    Active(ActiveEvent<'a>),
    /// An event that was filtered out.
    Suppressed,
}

/// The state of an [`Event`] that passed the filter.
#[derive(Debug)]
pub struct ActiveEvent<'a> {
    logger: &'a Logger,
    level: Level,
    fields: Vec<Field>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level) -> Self {
        if logger.enabled(level) {
            Event::Active(ActiveEvent {
                logger,
                level,
                fields: Vec::new(),
            })
        } else {
            Event::Suppressed
        }
    }

    fn field(self, key: &str, value: impl FnOnce() -> Value) -> Self {
        match self {
            Event::Active(mut event) => {
                event.fields.push((key.to_owned(), value()));
                Event::Active(event)
            }
            Event::Suppressed => Event::Suppressed,
        }
    }

    /// Add a string field.
    pub fn str(self, key: &str, value: &str) -> Self {
        self.field(key, || Value::from(value))
    }

    /// Add an integer field.
    pub fn int(self, key: &str, value: i32) -> Self {
        self.field(key, || Value::from(value))
    }

    /// Add a 64-bit integer field.
    pub fn int64(self, key: &str, value: i64) -> Self {
        self.field(key, || Value::from(value))
    }

    /// Add a float field.
    pub fn float(self, key: &str, value: f32) -> Self {
        self.field(key, || Value::from(value))
    }

    /// Add a boolean field.
    pub fn bool(self, key: &str, value: bool) -> Self {
        self.field(key, || Value::from(value))
    }

    /// Add the `error` field, or nothing if `err` is `None`.
    ///
    /// ```
    /// let capture = linelog::append::Testing::default();
    /// let logger = linelog::builder().stderr(false).append(capture.clone()).build();
    ///
    /// let ok: Result<(), std::io::Error> = Ok(());
    /// logger.error().err(ok.err()).msg("nothing went wrong");
    ///
    /// let line: serde_json::Value = serde_json::from_str(&capture.lines()[0]).unwrap();
    /// assert_eq!(line["level"], "error");
    /// assert!(line.get("error").is_none());
    /// ```
    pub fn err<E: fmt::Display>(self, err: Option<E>) -> Self {
        match err {
            Some(err) => self.field("error", || Value::Str(err.to_string())),
            None => self,
        }
    }

    /// Whether this event will be written.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Event::Active(_))
    }

    /// The fields added so far; always empty for a suppressed event.
    pub fn fields(&self) -> &[Field] {
        match self {
            Event::Active(event) => &event.fields,
            Event::Suppressed => &[],
        }
    }

    /// Render the event with `message` and write it to every sink of the logger.
    ///
    /// The timestamp is taken now, not when the event was created. Write errors are ignored.
    pub fn msg(self, message: &str) {
        if let Event::Active(event) = self {
            event.logger.emit(event.level, &event.fields, message);
        }
    }
}
