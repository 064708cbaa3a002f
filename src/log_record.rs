// SPDX-License-Identifier: MIT OR Apache-2.0

//! One captured log call.
//!
//! [`LogRecord`] is the currency of the in-memory logger: the level, message,
//! and the merged field set (logger fields first, then call fields) of a
//! single emitted call.

use crate::field::{Field, FieldValue};
use crate::level::Level;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub fields: Vec<Field>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>, fields: Vec<Field>) -> LogRecord {
        LogRecord {
            level,
            message: message.into(),
            fields,
        }
    }

    /// The value of the first field named `key`, if any.
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.key() == key)
            .map(|f| f.value())
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.level.as_upper_str(), self.message)?;
        if !self.fields.is_empty() {
            write!(f, "\t{}", crate::console_logger::fields_object(&self.fields))?;
        }
        Ok(())
    }
}

/*
Boilerplate notes.

# LogRecord

Clone/PartialEq derive so tests can compare captured records directly. Hash
is absent: FieldValue holds floats and JSON values, neither of which hashes.
Display renders the text-encoder shape minus the timestamp, which is the
useful form for assertion messages.
*/
