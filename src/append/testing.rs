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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::append::Append;

/// An appender that keeps log lines in memory so tests can inspect them.
///
/// Clones share the same buffer: hand one clone to the logger and keep another to read back.
///
/// # Examples
///
/// ```
/// use linelog::append::Testing;
///
/// let capture = Testing::default();
/// let logger = linelog::builder()
///     .level("info")
///     .stderr(false)
///     .append(capture.clone())
///     .build();
///
/// logger.info().str("user", "alice").msg("signed in");
///
/// let lines = capture.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with(r#""user":"alice","message":"signed in"}"#));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Testing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Testing {
    /// Return everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Return the lines written so far, without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Append for Testing {
    fn append(&self, line: &[u8]) -> Result<(), Error> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(line);
        Ok(())
    }
}
