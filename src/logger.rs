// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::field::Field;
use crate::level::Level;
use std::fmt::Debug;
use std::sync::Arc;

/**
The leveled structured-logging capability.

Implementations accept one leveled call carrying a message and a set of typed
fields, report whether a given level would be emitted, and can derive a new
logger that always logs additional fields. Decorators implement this same
trait over an inner `Arc<dyn Logger>`, so wrappers nest to arbitrary depth
without special cases.
*/
pub trait Logger: Debug + Send + Sync {
    /// Whether a call at `level` would be emitted.
    fn enabled(&self, level: Level) -> bool;

    /**
    Submits one leveled call.

    Implementations gate on their own enablement before emitting; callers do
    not need to check [`enabled`](Logger::enabled) first.
    */
    fn log(&self, level: Level, message: &str, fields: &[Field]);

    /**
    A logger that logs `fields` on every call, in addition to everything this
    logger already logs. Field sets union; a later duplicate key shadows an
    earlier one at encode time.
    */
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Logger>;

    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(Level::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[Field]) {
        self.log(Level::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[Field]) {
        self.log(Level::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[Field]) {
        self.log(Level::Error, message, fields);
    }
}

/*
Boilerplate notes.

# Logger

Clone on a capability trait doesn't compose with trait objects; derivation
goes through with_fields instead, which returns a fresh Arc. Debug is
required so anything holding an Arc<dyn Logger> can itself derive Debug.
Send + Sync because loggers are shared across threads by construction.
*/
