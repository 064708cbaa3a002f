// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bridge from the `log` facade.
//!
//! Code written against the `log` crate's macros can be redirected into a
//! [`Logger`] with [`install_log_bridge`]. The facade's coarser level set
//! maps onto this crate's levels, and each record carries its module, file,
//! and line as fields. The facade's own timestamp handling is ignored; the
//! receiving encoder stamps its own.

use crate::field::Field;
use crate::level::Level;
use crate::logger::Logger;
use std::sync::Arc;

fn bridge_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Debug, // no equivalent below Debug
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warn,
        log::Level::Error => Level::Error,
    }
}

/// Adapts a [`Logger`] to the `log::Log` facade interface.
#[derive(Debug)]
pub struct LogBridge {
    logger: Arc<dyn Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<dyn Logger>) -> LogBridge {
        LogBridge { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(bridge_level(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut fields = vec![Field::string("module", record.target().to_string())];
        if let Some(file) = record.file() {
            fields.push(Field::string("file", file.to_string()));
        }
        if let Some(line) = record.line() {
            fields.push(Field::uint("line", line.into()));
        }
        self.logger.log(
            bridge_level(record.level()),
            &record.args().to_string(),
            &fields,
        );
    }

    fn flush(&self) {}
}

/// Registers `logger` as the destination for everything logged through the
/// `log` facade. Fails if a facade logger is already installed.
pub fn install_log_bridge(logger: Arc<dyn Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    // Filtering belongs to the receiving logger, so the facade passes
    // everything through.
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::inmemory_logger::MemoryLogger;
    use log::Log;

    #[test]
    fn forwards_records_with_source_fields() {
        let capture = Arc::new(MemoryLogger::new());
        let bridge = LogBridge::new(capture.clone());

        bridge.log(
            &log::Record::builder()
                .args(format_args!("hello from the facade"))
                .level(log::Level::Warn)
                .target("app::worker")
                .file(Some("src/worker.rs"))
                .line(Some(17))
                .build(),
        );

        let records = capture.drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Warn);
        assert_eq!(records[0].message, "hello from the facade");
        assert_eq!(
            records[0].field("module"),
            Some(&FieldValue::Str("app::worker".to_string()))
        );
        assert_eq!(
            records[0].field("file"),
            Some(&FieldValue::Str("src/worker.rs".to_string()))
        );
        assert_eq!(records[0].field("line"), Some(&FieldValue::Uint(17)));
    }

    #[test]
    fn maps_facade_levels() {
        assert_eq!(bridge_level(log::Level::Trace), Level::Debug);
        assert_eq!(bridge_level(log::Level::Debug), Level::Debug);
        assert_eq!(bridge_level(log::Level::Info), Level::Info);
        assert_eq!(bridge_level(log::Level::Warn), Level::Warn);
        assert_eq!(bridge_level(log::Level::Error), Level::Error);
    }

    #[test]
    fn respects_the_receiving_logger_threshold() {
        let capture = Arc::new(MemoryLogger::new());
        capture.level().set(Level::Error);
        let bridge = LogBridge::new(capture.clone());

        assert!(!bridge.enabled(
            &log::Metadata::builder().level(log::Level::Info).build()
        ));
        bridge.log(
            &log::Record::builder()
                .args(format_args!("dropped"))
                .level(log::Level::Info)
                .build(),
        );
        assert!(capture.drain().is_empty());
    }
}
