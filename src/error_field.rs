// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering errors as structured fields.
//!
//! [`Field::error`] turns an error into one logging field whose value carries
//! the flat message plus, when the chain has any structure worth keeping, an
//! ordered trace of `{loc, msg}` levels from the outermost wrap down to the
//! leaf cause. This is different from logging `err.to_string()` because the
//! logged error also includes where each wrapping level was constructed.

use crate::field::{Field, FieldValue};
use crate::traced::Traced;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::error::Error;

/// One level of a rendered error chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// "file:line" of the level's construction site, when known.
    #[serde(rename = "loc", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The level's wrap message, or the leaf's string form.
    #[serde(rename = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The JSON value logged for one error: the flat message plus the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub msg: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceEntry>,
}

impl ErrorObject {
    /// Renders `err` fresh: the flat `to_string` form plus the trace walk.
    pub fn render(err: &(dyn Error + 'static)) -> ErrorObject {
        ErrorObject {
            msg: err.to_string(),
            trace: error_trace(err),
        }
    }
}

impl Field {
    /// A field logging `err` with its trace under the key `error`.
    ///
    /// For `None` the result is the no-op field: the backend emits no key at
    /// all, so call sites can pass an optional error unconditionally.
    pub fn error(err: Option<&(dyn Error + 'static)>) -> Field {
        match err {
            None => Field::skip(),
            Some(err) => {
                let value = serde_json::to_value(ErrorObject::render(err)).unwrap_or(Value::Null);
                Field::from_parts(Cow::Borrowed("error"), FieldValue::Json(value))
            }
        }
    }
}

/// Walks the chain from the outermost wrap to the leaf cause.
///
/// Each level contributes its construction location (only [`Traced`] levels
/// carry one) and its own message. A wrapping level descends through
/// `source()`; the leaf contributes its string form and stops. A chain that
/// is just a bare leaf with no location renders as no trace at all, since the
/// flat message already says everything it would.
fn error_trace(err: &(dyn Error + 'static)) -> Vec<TraceEntry> {
    let mut trace = Vec::new();
    let mut current = Some(err);
    while let Some(err) = current {
        let mut entry = TraceEntry {
            location: None,
            message: None,
        };
        if let Some(traced) = err.downcast_ref::<Traced>() {
            let (file, line) = traced.location();
            if !file.is_empty() {
                entry.location = Some(format!("{file}:{line}"));
            }
        }
        match err.source() {
            Some(source) => {
                entry.message = wrap_message(err).filter(|m| !m.is_empty());
                trace.push(entry);
                current = Some(source);
            }
            None => {
                if trace.is_empty() && entry.location.is_none() {
                    return Vec::new();
                }
                let message = err.to_string();
                entry.message = (!message.is_empty()).then_some(message);
                trace.push(entry);
                current = None;
            }
        }
    }
    trace
}

/// The message a wrapping level contributes on its own, excluding the chain
/// beneath it. `Traced` distinguishes the two; for anything else the `Display`
/// form is the best available (and by thiserror-style convention excludes the
/// source already).
fn wrap_message(err: &(dyn Error + 'static)) -> Option<String> {
    match err.downcast_ref::<Traced>() {
        Some(traced) => traced.message().map(str::to_owned),
        None => Some(err.to_string()),
    }
}
