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

//! A finalized log event, as handed to layouts.

use jiff::Zoned;

use crate::Level;
use crate::kv::Field;

/// The payload of a log event.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    time: Zoned,
    level: Level,
    fields: &'a [Field],
    message: &'a str,
}

impl<'a> Record<'a> {
    /// Create a record observed at the given time.
    pub fn new(time: Zoned, level: Level, fields: &'a [Field], message: &'a str) -> Self {
        Self {
            time,
            level,
            fields,
            message,
        }
    }

    /// The observed time.
    pub fn time(&self) -> &Zoned {
        &self.time
    }

    /// The severity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The caller-supplied fields, in call order.
    pub fn fields(&self) -> &'a [Field] {
        self.fields
    }

    /// The message.
    pub fn message(&self) -> &'a str {
        self.message
    }
}
