// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end rendering of error fields through a logger, mirroring how a
//! call site logs an optional error alongside a message.

use ctxlog::{Context, ErrorObject, Field, MemoryLogger, Traced};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct Eof;

impl fmt::Display for Eof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EOF")
    }
}

impl Error for Eof {}

fn capture() -> (Arc<MemoryLogger>, Context) {
    let logger = Arc::new(MemoryLogger::new());
    let ctx = ctxlog::with_logger(&Context::root(), logger.clone());
    (logger, ctx)
}

#[test]
fn wrapped_chain_renders_one_entry_per_level() {
    let err = Traced::new("something");
    let err = Traced::mask(err);
    let err = Traced::annotate(err, "an error");

    let (logger, ctx) = capture();
    ctxlog::info(&ctx, "a message", &[Field::error(Some(&err))]);

    let records = logger.drain();
    assert_eq!(records.len(), 1);
    let value = records[0].field("error").expect("error field missing");
    let json = value.to_json();

    assert_eq!(json["msg"], "an error: something");
    let trace = json["trace"].as_array().expect("trace missing");
    assert_eq!(trace.len(), 3);

    // Outermost wrap first, leaf cause last; every level was constructed in
    // this file.
    for entry in trace {
        let loc = entry["loc"].as_str().expect("loc missing");
        assert!(loc.contains("error_field.rs:"), "unexpected loc {loc}");
    }
    assert_eq!(trace[0]["msg"], "an error");
    assert!(trace[1].get("msg").is_none());
    assert_eq!(trace[2]["msg"], "something");
}

#[test]
fn json_line_shape_is_stable() {
    let err = Traced::annotate(Eof, "reading stream");
    let (logger, ctx) = capture();
    ctxlog::info(&ctx, "a message", &[Field::error(Some(&err))]);

    let line = logger.drain_lines().remove(0);
    assert!(line.starts_with(r#"{"level":"info","msg":"a message","error":{"msg":"reading stream: EOF","trace":[{"loc":""#));
    assert!(line.ends_with(r#"","msg":"reading stream"},{"msg":"EOF"}]}}"#));
}

#[test]
fn nil_error_logs_no_error_key_at_all() {
    let (logger, ctx) = capture();
    ctxlog::info(&ctx, "a message", &[Field::error(None)]);

    let lines = logger.drain_lines();
    assert_eq!(lines, [r#"{"level":"info","msg":"a message"}"#]);
}

#[test]
fn bare_leaf_error_logs_flat_message_only() {
    let (logger, ctx) = capture();
    ctxlog::info(&ctx, "a message", &[Field::error(Some(&Eof))]);

    let lines = logger.drain_lines();
    assert_eq!(
        lines,
        [r#"{"level":"info","msg":"a message","error":{"msg":"EOF"}}"#]
    );
}

#[test]
fn rendered_object_matches_the_logged_value() {
    let err = Traced::annotate(Traced::new("inner"), "outer");
    let rendered = ErrorObject::render(&err);
    assert_eq!(rendered.msg, "outer: inner");
    assert_eq!(rendered.trace.len(), 2);
    assert_eq!(rendered.trace[0].message.as_deref(), Some("outer"));
    assert_eq!(rendered.trace[1].message.as_deref(), Some("inner"));

    let (logger, ctx) = capture();
    ctxlog::error(&ctx, "failed", &[Field::error(Some(&err))]);
    let records = logger.drain();
    let logged = records[0].field("error").expect("error field missing");
    assert_eq!(
        logged.to_json(),
        serde_json::to_value(&rendered).expect("rendered object serializes")
    );
}
