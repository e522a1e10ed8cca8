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

//! Linelog writes log events as single-line JSON objects to stderr and an optional log file.
//!
//! # Overview
//!
//! A [`Logger`] filters events by a [`LevelMask`], resolved from a level name when the logger is
//! built. Each log call obtains an [`Event`] for a severity, chains typed fields onto it and
//! finishes with a message. Events that do not pass the mask are [`Event::Suppressed`] and cost
//! nothing beyond the filter check. Fatal events always pass.
//!
//! Every line carries `time`, `level`, the fields in call order, and `message` last:
//!
//! ```json
//! {"time":"2024-08-11T22:44:57+08:00","level":"error","component":"x","message":"boom"}
//! ```
//!
//! # Examples
//!
//! One-call setup, as a service would do it at startup:
//!
//! ```no_run
//! let logger = linelog::init("/var/log/my_service", "app.log", "warn", true);
//!
//! logger.error().str("component", "x").msg("boom");
//! logger.info().msg("hidden");
//!
//! logger.shutdown().unwrap();
//! ```
//!
//! Explicit setup with a builder:
//!
//! ```
//! use linelog::layout::LegacyLayout;
//!
//! let logger = linelog::builder()
//!     .level("info")
//!     .layout(LegacyLayout::default())
//!     .build();
//!
//! logger.fatal().int("code", 1).msg("dying");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod kv;
pub mod layout;
pub mod record;
pub mod trap;

mod config;
mod error;
mod level;
mod logger;
mod time;

pub use self::append::Append;
pub use self::config::Config;
pub use self::config::Format;
pub use self::error::Error;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::level::LevelMask;
pub use self::logger::*;
pub use self::trap::Trap;
