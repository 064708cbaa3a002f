// SPDX-License-Identifier: MIT OR Apache-2.0

//! A console logger over any `Write` sink.
//!
//! Two line encodings:
//!
//! - [`Encoding::Json`]: one JSON object per line, keys in order `level`
//!   (lowercase), `ts` (RFC 3339 UTC), `msg`, then the unioned fields.
//! - [`Encoding::Text`]: `<ts>\t<LEVEL>\t<msg>`, plus one tab and the fields
//!   as a JSON object when any are present.
//!
//! The minimum severity comes from a shared [`LevelHandle`], so verbosity can
//! be adjusted at runtime without touching the logger. Write failures are
//! dropped: the logging layer has nowhere to log about itself.

use crate::field::Field;
use crate::level::{Level, LevelHandle};
use crate::logger::Logger;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Text,
}

pub struct ConsoleLogger {
    core: Arc<Core>,
    fields: Vec<Field>,
}

struct Core {
    encoding: Encoding,
    level: LevelHandle,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLogger {
    /// JSON lines to stdout at Info.
    pub fn json() -> ConsoleLogger {
        ConsoleLogger::with_sink(
            Encoding::Json,
            Box::new(std::io::stdout()),
            LevelHandle::new(Level::Info),
        )
    }

    /// Text lines to stderr at Info.
    pub fn text() -> ConsoleLogger {
        ConsoleLogger::with_sink(
            Encoding::Text,
            Box::new(std::io::stderr()),
            LevelHandle::new(Level::Info),
        )
    }

    pub fn with_sink(
        encoding: Encoding,
        sink: Box<dyn Write + Send>,
        level: LevelHandle,
    ) -> ConsoleLogger {
        ConsoleLogger {
            core: Arc::new(Core {
                encoding,
                level,
                sink: Mutex::new(sink),
            }),
            fields: Vec::new(),
        }
    }

    /// The handle governing this logger's minimum severity.
    pub fn level(&self) -> LevelHandle {
        self.core.level.clone()
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: Level) -> bool {
        self.core.level.enabled(level)
    }

    fn log(&self, level: Level, message: &str, fields: &[Field]) {
        if !self.enabled(level) {
            return;
        }
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = match self.core.encoding {
            Encoding::Json => encode_json(Some(&ts), level, message, &[&self.fields, fields]),
            Encoding::Text => encode_text(Some(&ts), level, message, &[&self.fields, fields]),
        };
        if let Ok(mut sink) = self.core.sink.lock() {
            let _ = sink.write_all(line.as_bytes());
            let _ = sink.write_all(b"\n");
        }
    }

    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Logger> {
        let mut merged = self.fields.clone();
        merged.extend_from_slice(fields);
        Arc::new(ConsoleLogger {
            core: self.core.clone(),
            fields: merged,
        })
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("encoding", &self.core.encoding)
            .field("level", &self.core.level.get())
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// One JSON line, without the trailing newline. `ts` is omitted when `None`
/// so captured output can be asserted exactly.
pub(crate) fn encode_json(
    ts: Option<&str>,
    level: Level,
    message: &str,
    field_sets: &[&[Field]],
) -> String {
    let mut object = serde_json::Map::new();
    object.insert("level".to_string(), Value::String(level.as_str().to_string()));
    if let Some(ts) = ts {
        object.insert("ts".to_string(), Value::String(ts.to_string()));
    }
    object.insert("msg".to_string(), Value::String(message.to_string()));
    union_into(&mut object, field_sets);
    Value::Object(object).to_string()
}

/// One text line, without the trailing newline.
pub(crate) fn encode_text(
    ts: Option<&str>,
    level: Level,
    message: &str,
    field_sets: &[&[Field]],
) -> String {
    let mut line = String::new();
    if let Some(ts) = ts {
        line.push_str(ts);
        line.push('\t');
    }
    line.push_str(level.as_upper_str());
    line.push('\t');
    line.push_str(message);

    let mut object = serde_json::Map::new();
    union_into(&mut object, field_sets);
    if !object.is_empty() {
        line.push('\t');
        line.push_str(&Value::Object(object).to_string());
    }
    line
}

/// The field sets of one record as a JSON object string.
pub(crate) fn fields_object(fields: &[Field]) -> String {
    let mut object = serde_json::Map::new();
    union_into(&mut object, &[fields]);
    Value::Object(object).to_string()
}

fn union_into(object: &mut serde_json::Map<String, Value>, field_sets: &[&[Field]]) {
    for fields in field_sets {
        for field in *fields {
            if field.is_skip() {
                continue;
            }
            object.insert(field.key().to_string(), field.value().to_json());
        }
    }
}
