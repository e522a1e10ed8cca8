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

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;
use crate::time::rfc3339;

/// A JSON layout for rendering log records.
///
/// Keys, string values and the message are escaped; integers, floats and booleans are written
/// as native JSON values.
///
/// Output format:
///
/// ```json
/// {"time":"2024-08-11T22:44:57+08:00","level":"error","component":"db","retries":3,"message":"connection lost"}
/// {"time":"2024-08-11T22:44:58+08:00","level":"info","ready":true,"message":"say \"hi\""}
/// ```
///
/// # Examples
///
/// ```
/// use linelog::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct JsonLayout {}

struct RecordLine<'a> {
    time: String,
    record: &'a Record<'a>,
}

impl Serialize for RecordLine<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = self.record.fields();
        let mut map = serializer.serialize_map(Some(fields.len() + 3))?;
        map.serialize_entry("time", &self.time)?;
        map.serialize_entry("level", self.record.level().as_str())?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("message", self.record.message())?;
        map.end()
    }
}

impl Layout for JsonLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let line = RecordLine {
            time: rfc3339(record.time()),
            record,
        };
        serde_json::to_vec(&line).map_err(Error::from_json_error)
    }
}
