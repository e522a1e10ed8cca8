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

//! Layouts for rendering log records into a single line.

use std::fmt;

pub use self::json::JsonLayout;
pub use self::legacy::LegacyLayout;

use crate::Error;
use crate::record::Record;

mod json;
mod legacy;

/// A layout for rendering log records.
///
/// The rendered bytes must not contain the line terminator; the logger appends `\n`.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Render a log record.
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
