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

//! RFC3339 rendering of event timestamps.

use jiff::Zoned;
use jiff::tz::Offset;

/// Format a zoned time as RFC3339 at second precision.
///
/// A zero offset is written as `Z`, any other offset as `+HH:MM`.
pub(crate) fn rfc3339(time: &Zoned) -> String {
    if time.offset() == Offset::UTC {
        time.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        time.strftime("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz;
    use jiff::tz::TimeZone;

    use super::*;

    fn at(tz: TimeZone) -> Zoned {
        "2024-08-11T14:44:57.172051Z"
            .parse::<Timestamp>()
            .unwrap()
            .to_zoned(tz)
    }

    #[test]
    fn test_utc_is_zulu() {
        assert_eq!(rfc3339(&at(TimeZone::UTC)), "2024-08-11T14:44:57Z");
    }

    #[test]
    fn test_fixed_offsets() {
        let east = TimeZone::fixed(tz::offset(8));
        assert_eq!(rfc3339(&at(east)), "2024-08-11T22:44:57+08:00");

        let west = TimeZone::fixed(tz::offset(-5));
        assert_eq!(rfc3339(&at(west)), "2024-08-11T09:44:57-05:00");
    }

    #[test]
    fn test_parses_back() {
        let text = rfc3339(&Zoned::now());
        assert!(text.parse::<Timestamp>().is_ok(), "{text}");
    }
}
