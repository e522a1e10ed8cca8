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

//! Severities and the bitmask that filters them.

use std::fmt;
use std::ops::BitOr;

/// An enum representing the severities an event can be logged at.
///
/// Each severity carries a bit pattern; see [`Level::bits`]. `Fatal` is a sentinel with no bits
/// set and is never filtered, while `Debug` and `Trace` share the all-bits pattern and are
/// therefore always enabled or disabled together.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Designates errors the process cannot recover from. Never filtered.
    Fatal,
    /// Designates very serious errors.
    Error,
    /// Designates hazardous situations.
    Warn,
    /// Designates useful information.
    Info,
    /// Designates lower priority information.
    Debug,
    /// Designates very low priority, often extremely verbose, information.
    Trace,
}

impl Level {
    /// Return the bit pattern of the `Level`.
    pub const fn bits(self) -> u8 {
        match self {
            Level::Fatal => LevelMask::FATAL.0,
            Level::Error => LevelMask::ERROR.0,
            Level::Warn => LevelMask::WARN.0,
            Level::Info => LevelMask::INFO.0,
            Level::Debug | Level::Trace => LevelMask::TRACE.0,
        }
    }

    /// Return the string representation of the `Level`, as written to the `level` key.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A bitwise-OR'd combination of severity bits.
///
/// An event passes the mask if all of its severity bits are contained in the mask.
///
/// # Examples
///
/// ```
/// use linelog::Level;
/// use linelog::LevelMask;
///
/// let mask = LevelMask::ERROR | LevelMask::WARN;
///
/// assert!(mask.enables(Level::Error));
/// assert!(mask.enables(Level::Warn));
/// assert!(!mask.enables(Level::Info));
/// assert!(mask.enables(Level::Fatal));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelMask(u8);

impl LevelMask {
    /// All bits set; enables every severity.
    pub const TRACE: LevelMask = LevelMask(0xFF);
    /// The sentinel pattern of [`Level::Fatal`].
    pub const FATAL: LevelMask = LevelMask(0x00);
    /// The bit of [`Level::Info`].
    pub const INFO: LevelMask = LevelMask(0x04);
    /// The bit of [`Level::Warn`].
    pub const WARN: LevelMask = LevelMask(0x02);
    /// The bit of [`Level::Error`].
    pub const ERROR: LevelMask = LevelMask(0x01);

    /// Create a mask from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        LevelMask(bits)
    }

    /// Return the raw bits of the mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Resolve a level name to a mask, ignoring ASCII case.
    ///
    /// Returns `None` for unrecognized names; callers keep their current mask in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelog::LevelMask;
    ///
    /// assert_eq!(LevelMask::from_name("WARN"), Some(LevelMask::ERROR | LevelMask::WARN));
    /// assert_eq!(LevelMask::from_name("debug"), Some(LevelMask::TRACE));
    /// assert_eq!(LevelMask::from_name("verbose"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<LevelMask> {
        const NAMES: [(&str, LevelMask); 5] = [
            ("trace", LevelMask::TRACE),
            ("debug", LevelMask::TRACE),
            ("error", LevelMask::ERROR),
            ("warn", LevelMask(LevelMask::ERROR.0 | LevelMask::WARN.0)),
            (
                "info",
                LevelMask(LevelMask::ERROR.0 | LevelMask::WARN.0 | LevelMask::INFO.0),
            ),
        ];

        NAMES
            .iter()
            .find(|(n, _)| name.eq_ignore_ascii_case(n))
            .map(|(_, mask)| *mask)
    }

    /// Check whether events at `level` pass this mask.
    pub const fn enables(self, level: Level) -> bool {
        match level {
            Level::Fatal => true,
            level => self.0 & level.bits() == level.bits(),
        }
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        LevelMask::ERROR
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl fmt::Debug for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelMask({:#04x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [Level; 6] = [
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    #[test]
    fn test_from_name() {
        assert_eq!(LevelMask::from_name("trace"), Some(LevelMask::TRACE));
        assert_eq!(LevelMask::from_name("Debug"), Some(LevelMask::TRACE));
        assert_eq!(LevelMask::from_name("ERROR"), Some(LevelMask::ERROR));
        assert_eq!(
            LevelMask::from_name("warn"),
            Some(LevelMask::ERROR | LevelMask::WARN)
        );
        assert_eq!(
            LevelMask::from_name("iNfO"),
            Some(LevelMask::ERROR | LevelMask::WARN | LevelMask::INFO)
        );
    }

    #[test]
    fn test_unrecognized_names() {
        for name in ["", "fatal", "warning", "off", " info", "information", "all"] {
            assert_eq!(LevelMask::from_name(name), None, "{name:?}");
        }
        assert_eq!(LevelMask::default(), LevelMask::ERROR);
    }

    #[test]
    fn test_enables_is_containment() {
        for bits in [0x00, 0x01, 0x03, 0x07, 0x04, 0x7F, 0xFF] {
            let mask = LevelMask::from_bits(bits);
            for level in LEVELS {
                let expected = level == Level::Fatal || bits & level.bits() == level.bits();
                assert_eq!(mask.enables(level), expected, "{mask:?} {level}");
            }
        }
    }

    #[test]
    fn test_named_masks() {
        let info = LevelMask::from_name("info").unwrap();
        assert!(info.enables(Level::Info));
        assert!(!info.enables(Level::Debug));
        assert!(!info.enables(Level::Trace));

        let warn = LevelMask::from_name("warn").unwrap();
        assert!(warn.enables(Level::Error));
        assert!(!warn.enables(Level::Info));

        let debug = LevelMask::from_name("debug").unwrap();
        for level in LEVELS {
            assert!(debug.enables(level));
        }

        let error = LevelMask::ERROR;
        assert!(error.enables(Level::Fatal));
        assert!(!error.enables(Level::Warn));
    }

    #[test]
    fn test_level_strings() {
        assert_eq!(Level::Fatal.to_string(), "fatal");
        assert_eq!(Level::Debug.as_str(), "debug");
        assert_eq!(format!("{:>5}", Level::Info), " info");
        assert_eq!(Level::Trace.bits(), Level::Debug.bits());
    }
}
