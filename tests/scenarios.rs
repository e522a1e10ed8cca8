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

use std::fs;
use std::path::Path;

use linelog::Level;
use linelog::LevelMask;
use linelog::append::Testing;
use serde_json::Value;
use tempfile::TempDir;

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_warn_level_writes_errors_to_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let dir = temp_dir.path().join("x");

    let logger = linelog::init(&dir, "app.log", "warn", true);
    assert_eq!(logger.log_file(), dir.join("app.log"));

    logger.error().str("component", "x").msg("boom");
    logger.info().msg("hidden");
    logger.shutdown().unwrap();

    // the startup announcement is an info event and is filtered out too
    let lines = read_lines(&dir.join("app.log"));
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains(r#""level":"error""#));
    assert!(lines[0].contains(r#""component":"x""#));
    assert!(lines[0].contains(r#""message":"boom""#));
}

#[test]
fn test_info_level_hides_debug() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    let logger = linelog::init(temp_dir.path(), "app.log", "info", false);
    logger.debug().msg("x");
    logger.trace().msg("x");
    logger.shutdown().unwrap();

    let lines = read_lines(&temp_dir.path().join("app.log"));
    assert_eq!(lines.len(), 1, "{lines:?}");
    let announcement: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(announcement["level"], "info");
    assert_eq!(announcement["component"], "linelog");
    assert_eq!(announcement["log_level"], "info");
    assert_eq!(announcement["message"], "logging started");
}

#[test]
fn test_fatal_bypasses_error_only_mask() {
    let capture = Testing::default();
    let logger = linelog::builder()
        .stderr(false)
        .append(capture.clone())
        .build();
    assert_eq!(logger.mask(), LevelMask::ERROR);

    logger.fatal().int("code", 1).msg("dying");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    let line: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(line["level"], "fatal");
    assert_eq!(line["code"], 1);
    assert_eq!(line["message"], "dying");
}

#[test]
fn test_unrecognized_level_defaults_to_error() {
    for name in ["verbose", "", "warning", "none"] {
        let capture = Testing::default();
        let logger = linelog::builder()
            .level(name)
            .stderr(false)
            .append(capture.clone())
            .build();
        assert_eq!(logger.mask(), LevelMask::ERROR, "{name:?}");

        logger.warn().msg("dropped");
        logger.error().msg("kept");
        assert_eq!(capture.lines().len(), 1, "{name:?}");
    }
}

#[test]
fn test_line_is_json_with_message_last() {
    let capture = Testing::default();
    let logger = linelog::builder()
        .level("debug")
        .stderr(false)
        .append(capture.clone())
        .build();

    logger
        .debug()
        .str("user", "alice \"the admin\"")
        .int64("bytes", 1 << 40)
        .float("load", 0.75)
        .bool("cached", false)
        .err(Some("timed out"))
        .msg("request done");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    let line: Value = serde_json::from_str(&lines[0]).unwrap();
    let keys = line.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys.len(), 8);
    assert_eq!(line["user"], "alice \"the admin\"");
    assert_eq!(line["bytes"], 1_i64 << 40);
    assert_eq!(line["load"], 0.75);
    assert_eq!(line["cached"], false);
    assert_eq!(line["error"], "timed out");

    let raw = &lines[0];
    assert!(raw.starts_with(r#"{"time":""#), "{raw}");
    assert!(raw.contains(r#""level":"debug","user":"#), "{raw}");
    assert!(raw.ends_with(r#""error":"timed out","message":"request done"}"#), "{raw}");
}

#[test]
fn test_reopen_appends() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");

    for round in 0..3 {
        let logger = linelog::init(temp_dir.path(), "app.log", "error", false);
        logger.error().int("round", round).msg("tick");
        logger.shutdown().unwrap();
    }

    let rounds = read_lines(&temp_dir.path().join("app.log"))
        .iter()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["round"].clone())
        .collect::<Vec<_>>();
    assert_eq!(rounds, vec![0, 1, 2]);
}

#[test]
fn test_event_for_every_level() {
    let logger = linelog::builder().level("warn").stderr(false).build();
    let enabled = [
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ]
    .map(|level| logger.event(level).is_enabled());
    assert_eq!(enabled, [true, true, true, false, false, false]);
}
