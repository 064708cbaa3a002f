// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed key-value logging fields.
//!
//! A [`Field`] is one `key: value` pair attached to a log call or accumulated
//! on a logger. Encoders union field sets in order, so a later field with the
//! same key shadows an earlier one. The [`Field::skip`] marker carries no key
//! and is dropped entirely by every encoder; it exists so an API that may or
//! may not have something to report can always return a `Field`.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: Cow<'static, str>,
    value: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Json(Value),
    /// Encoders emit nothing for this value, not even the key.
    Skip,
}

impl Field {
    pub fn string(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Field {
        Field {
            key: key.into(),
            value: FieldValue::Str(value.into()),
        }
    }

    pub fn int(key: impl Into<Cow<'static, str>>, value: i64) -> Field {
        Field {
            key: key.into(),
            value: FieldValue::Int(value),
        }
    }

    pub fn uint(key: impl Into<Cow<'static, str>>, value: u64) -> Field {
        Field {
            key: key.into(),
            value: FieldValue::Uint(value),
        }
    }

    pub fn float(key: impl Into<Cow<'static, str>>, value: f64) -> Field {
        Field {
            key: key.into(),
            value: FieldValue::Float(value),
        }
    }

    pub fn bool(key: impl Into<Cow<'static, str>>, value: bool) -> Field {
        Field {
            key: key.into(),
            value: FieldValue::Bool(value),
        }
    }

    /// A field whose value is the JSON serialization of `value`.
    ///
    /// Serialization failures become a string placeholder rather than an
    /// error; a log call has nowhere to report one.
    pub fn json<T: Serialize>(key: impl Into<Cow<'static, str>>, value: &T) -> Field {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {e}>")));
        Field {
            key: key.into(),
            value: FieldValue::Json(value),
        }
    }

    /// The no-op field: encoders emit nothing for it.
    pub fn skip() -> Field {
        Field {
            key: Cow::Borrowed(""),
            value: FieldValue::Skip,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub(crate) fn from_parts(key: Cow<'static, str>, value: FieldValue) -> Field {
        Field { key, value }
    }

    pub(crate) fn is_skip(&self) -> bool {
        matches!(self.value, FieldValue::Skip)
    }
}

impl FieldValue {
    /// The JSON rendering of this value, used by both encoders.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Str(s) => Value::String(s.clone()),
            FieldValue::Int(i) => Value::from(*i),
            FieldValue::Uint(u) => Value::from(*u),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Json(v) => v.clone(),
            FieldValue::Skip => Value::Null,
        }
    }
}
