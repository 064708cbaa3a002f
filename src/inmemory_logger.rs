// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory capture logger.
//!
//! [`MemoryLogger`] records every emitted call as a structured [`LogRecord`]
//! instead of writing anywhere, which makes it the test instrument for this
//! crate and for code that logs through it: run the code under test, then
//! [`drain`](MemoryLogger::drain) and assert on the captured records. Loggers
//! derived via `with_fields` share the same buffer, so a capture handle kept
//! by the test observes everything logged through any derivation.
//!
//! Captures at Debug by default so minimum-severity decoration is observable
//! rather than pre-filtered.

use crate::console_logger::encode_json;
use crate::field::Field;
use crate::level::{Level, LevelHandle};
use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MemoryLogger {
    shared: Arc<Shared>,
    fields: Vec<Field>,
}

#[derive(Debug)]
struct Shared {
    records: Mutex<Vec<LogRecord>>,
    level: LevelHandle,
}

impl MemoryLogger {
    pub fn new() -> MemoryLogger {
        MemoryLogger {
            shared: Arc::new(Shared {
                records: Mutex::new(Vec::new()),
                level: LevelHandle::new(Level::Debug),
            }),
            fields: Vec::new(),
        }
    }

    /// The captured records so far, oldest first, without clearing.
    pub fn records(&self) -> Vec<LogRecord> {
        self.shared.records.lock().unwrap().clone()
    }

    /// Takes all captured records, clearing the buffer.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.shared.records.lock().unwrap())
    }

    /// Takes all captured records rendered as timestamp-free JSON lines, for
    /// exact string assertions.
    pub fn drain_lines(&self) -> Vec<String> {
        self.drain()
            .into_iter()
            .map(|r| encode_json(None, r.level, &r.message, &[&r.fields]))
            .collect()
    }

    /// The handle governing this logger's capture threshold.
    pub fn level(&self) -> LevelHandle {
        self.shared.level.clone()
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        MemoryLogger::new()
    }
}

impl Logger for MemoryLogger {
    fn enabled(&self, level: Level) -> bool {
        self.shared.level.enabled(level)
    }

    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        let merged = self
            .fields
            .iter()
            .chain(fields)
            .filter(|f| !f.is_skip())
            .cloned()
            .collect();
        self.shared
            .records
            .lock()
            .unwrap()
            .push(LogRecord::new(level, message, merged));
    }

    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Logger> {
        let mut merged = self.fields.clone();
        merged.extend_from_slice(fields);
        Arc::new(MemoryLogger {
            shared: self.shared.clone(),
            fields: merged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_and_drains() {
        let logger = MemoryLogger::new();
        logger.info("first", &[Field::int("n", 1)]);
        logger.warn("second", &[]);

        let records = logger.drain();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Info);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].level, Level::Warn);

        assert!(logger.drain().is_empty());
    }

    #[test]
    fn derived_loggers_share_the_buffer() {
        let capture = Arc::new(MemoryLogger::new());
        let as_dyn: Arc<dyn Logger> = capture.clone();
        let derived = as_dyn.with_fields(&[Field::string("request", "r-1")]);
        derived.info("hello", &[Field::string("extra", "x")]);

        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert!(records[0].field("request").is_some());
        assert!(records[0].field("extra").is_some());
    }

    #[test]
    fn capture_threshold_is_adjustable() {
        let logger = MemoryLogger::new();
        logger.level().set(Level::Error);
        logger.info("dropped", &[]);
        logger.error("kept", &[]);
        let records = logger.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
    }
}
