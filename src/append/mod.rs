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

//! Sinks for rendered log lines.

use std::fmt;

use crate::Error;

mod single_file;
mod stdio;
mod testing;

pub use self::single_file::SingleFile;
pub use self::single_file::SingleFileBuilder;
pub use self::stdio::Stderr;
pub use self::testing::Testing;

/// An appender that writes rendered log lines to a destination.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered line, terminator included.
    ///
    /// Implementations must write the whole line at once so that concurrent callers do not
    /// interleave within a line.
    fn append(&self, line: &[u8]) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
