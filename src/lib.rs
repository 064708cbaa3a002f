//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# ctxlog

ctxlog attaches structured loggers to request-scoped contexts.

# The problem

A request handler wants every log line it emits, directly or three calls
deep, to carry the request's identifiers, and sometimes to turn a noisy
subtree down to warnings only. Threading a logger parameter through every
function signature to get that is invasive; a process-global logger can't do
it at all, because two concurrent requests need different fields.

ctxlog solves this with an immutable [`Context`] that carries the current
effective logger. Deriving a context with extra fields or a stricter minimum
level is O(1) and never affects the original, so concurrent branches of a
call tree stay independent; any leaf resolves its effective logger from the
context it was handed.

```rust
use std::sync::Arc;
use ctxlog::{Context, Field, Level, MemoryLogger};

let logger = Arc::new(MemoryLogger::new());
let ctx = ctxlog::with_logger(&Context::root(), logger.clone());

// Narrow a subtree: request fields everywhere, warnings only.
let ctx = ctxlog::with_fields(&ctx, &[Field::string("request", "r-42")]);
let quiet = ctxlog::with_level(&ctx, Level::Warn);

ctxlog::info(&ctx, "accepted", &[]);
ctxlog::info(&quiet, "suppressed", &[]);
ctxlog::warn(&quiet, "slow backend", &[]);

let messages: Vec<_> = logger.drain().into_iter().map(|r| r.message).collect();
assert_eq!(messages, ["accepted", "slow backend"]);
```

A context with no logger resolves to the process-wide default (JSON to
stdout at Info), which tests replace for a scope via
[`replace_default_logger`].

# Error traces

[`Field::error`] logs an error as a structured field: the flat message plus
one `{loc, msg}` entry per wrapping level, built from [`Traced`] annotations
and `source()` chains.

```rust
use ctxlog::{ErrorObject, Traced};

let err = Traced::new("connection reset");
let err = Traced::annotate(err, "fetching block");
let rendered = ErrorObject::render(&err);
assert_eq!(rendered.msg, "fetching block: connection reset");
assert_eq!(rendered.trace.len(), 2);
```

# The pieces

* [`Logger`] is the capability every backend implements: leveled calls with
  typed [`Field`]s, an enablement check, and field accumulation. Minimum-level
  decoration composes over any implementation.
* [`ConsoleLogger`] encodes JSON or text lines to any `Write` sink;
  [`MemoryLogger`] captures records for tests.
* [`install_log_bridge`] redirects the `log` facade into a [`Logger`] for
  dependencies that predate structured logging.
*/

mod console_logger;
mod context;
mod error_field;
mod field;
pub mod global_logger;
mod inmemory_logger;
mod level;
mod level_floor;
mod log_bridge;
mod log_record;
mod logger;
mod registry;
mod traced;

pub use console_logger::{ConsoleLogger, Encoding};
pub use context::Context;
pub use error_field::{ErrorObject, TraceEntry};
pub use field::{Field, FieldValue};
pub use global_logger::{
    DefaultLoggerGuard, default_level, default_logger, replace_default_logger,
    set_default_logger,
};
pub use inmemory_logger::MemoryLogger;
pub use level::{Level, LevelHandle};
pub use log_bridge::{LogBridge, install_log_bridge};
pub use log_record::LogRecord;
pub use logger::Logger;
pub use registry::{
    NoLoggerInContext, debug, error, expect_logger, info, logger, try_logger, warn,
    with_fields, with_level, with_logger,
};
pub use traced::Traced;
