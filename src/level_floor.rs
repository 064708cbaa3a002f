// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimum-severity decoration over an arbitrary logger.

use crate::field::Field;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

/**
Wraps a logger so that only calls at or above `floor` reach it.

The comparison is the numeric level ordering; the wrapped logger still applies
its own enablement afterwards, so nesting floors gates at the most restrictive
one regardless of nesting order.
*/
#[derive(Debug)]
pub(crate) struct LevelFloor {
    inner: Arc<dyn Logger>,
    floor: Level,
}

impl LevelFloor {
    pub(crate) fn new(inner: Arc<dyn Logger>, floor: Level) -> LevelFloor {
        LevelFloor { inner, floor }
    }
}

impl Logger for LevelFloor {
    fn enabled(&self, level: Level) -> bool {
        level >= self.floor && self.inner.enabled(level)
    }

    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        // Only the local floor check; the inner logger gates itself.
        if level < self.floor {
            return;
        }
        self.inner.log(level, message, fields);
    }

    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Logger> {
        // Fields attach beneath the floor so the floor keeps gating them.
        Arc::new(LevelFloor {
            inner: self.inner.with_fields(fields),
            floor: self.floor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_logger::MemoryLogger;

    fn capture() -> (Arc<MemoryLogger>, Arc<dyn Logger>) {
        let logger = Arc::new(MemoryLogger::new());
        let as_dyn: Arc<dyn Logger> = logger.clone();
        (logger, as_dyn)
    }

    #[test]
    fn gates_below_floor() {
        let (capture, inner) = capture();
        let floored = LevelFloor::new(inner, Level::Warn);

        assert!(!floored.enabled(Level::Info));
        assert!(floored.enabled(Level::Warn));

        floored.log(Level::Info, "dropped", &[]);
        floored.log(Level::Error, "kept", &[]);
        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
    }

    #[test]
    fn nested_floors_gate_at_the_most_restrictive() {
        let (capture, inner) = capture();
        let strict_then_loose = LevelFloor::new(Arc::new(LevelFloor::new(inner, Level::Error)), Level::Info);

        strict_then_loose.log(Level::Warn, "dropped", &[]);
        strict_then_loose.log(Level::Error, "kept", &[]);
        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
        assert!(!strict_then_loose.enabled(Level::Warn));
    }

    #[test]
    fn fields_attach_beneath_the_floor() {
        let (capture, inner) = capture();
        let floored = LevelFloor::new(inner, Level::Warn);
        let with_fields = floored.with_fields(&[Field::string("request", "r-1")]);

        with_fields.log(Level::Info, "dropped", &[]);
        with_fields.log(Level::Warn, "kept", &[]);
        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "kept");
        assert!(records[0].field("request").is_some());
    }
}
