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

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;
use crate::time::rfc3339;

/// A layout that reproduces the historical line format byte for byte.
///
/// Every value is written as a quoted string, floats with six decimals, and nothing is escaped:
/// a key, value or message containing `"` or `\` yields a line that is not valid JSON. Use it
/// only when downstream consumers depend on the exact historical bytes; prefer [`JsonLayout`].
///
/// Output format:
///
/// ```text
/// {"time":"2024-08-11T22:44:57+08:00","level":"error","retries":"3","ready":"true","message":"connection lost"}
/// ```
///
/// [`JsonLayout`]: crate::layout::JsonLayout
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct LegacyLayout {}

impl Layout for LegacyLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut line = format!(
            r#"{{"time":"{}","level":"{}","#,
            rfc3339(record.time()),
            record.level()
        );
        for (key, value) in record.fields() {
            line.push_str(&format!(r#""{key}":"{value}","#));
        }
        line.push_str(&format!(r#""message":"{}"}}"#, record.message()));
        Ok(line.into_bytes())
    }
}
