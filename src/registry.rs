// SPDX-License-Identifier: MIT OR Apache-2.0

//! Associating loggers with contexts.
//!
//! The association lives in the context under a private key type, so only
//! this module can read or replace it. Every derivation resolves the current
//! effective logger first, wraps or extends it, and attaches the result to a
//! new context; nothing is ever mutated in place.

use crate::context::Context;
use crate::field::Field;
use crate::global_logger::default_logger;
use crate::level::Level;
use crate::level_floor::LevelFloor;
use crate::logger::Logger;
use std::sync::Arc;

/// Private slot type holding the context's logger association.
struct LoggerSlot(Arc<dyn Logger>);

/// Returned by [`try_logger`] when no logger is associated with the context
/// or any of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("logger not found in the context")]
pub struct NoLoggerInContext;

/// A new context derived from `ctx` that resolves to `logger`.
pub fn with_logger(ctx: &Context, logger: Arc<dyn Logger>) -> Context {
    ctx.with_value(LoggerSlot(logger))
}

/// A new context derived from `ctx` whose logger always logs `fields` in
/// addition to whatever the effective logger for `ctx` already logs.
pub fn with_fields(ctx: &Context, fields: &[Field]) -> Context {
    with_logger(ctx, logger(ctx).with_fields(fields))
}

/// A new context derived from `ctx` whose logger only emits calls at or
/// above `floor`. Floors compose: the most restrictive one on the chain
/// wins, in either order relative to [`with_fields`].
pub fn with_level(ctx: &Context, floor: Level) -> Context {
    with_logger(ctx, Arc::new(LevelFloor::new(logger(ctx), floor)))
}

fn lookup(ctx: &Context) -> Option<Arc<dyn Logger>> {
    ctx.value::<LoggerSlot>().map(|slot| slot.0.clone())
}

/// The logger associated with `ctx`, or the process-wide default if there is
/// none anywhere on the parent chain.
pub fn logger(ctx: &Context) -> Arc<dyn Logger> {
    lookup(ctx).unwrap_or_else(default_logger)
}

/// The logger associated with `ctx`, or a typed error on absence, for call
/// sites that must distinguish "no logger configured" from "default logger
/// configured".
pub fn try_logger(ctx: &Context) -> Result<Arc<dyn Logger>, NoLoggerInContext> {
    lookup(ctx).ok_or(NoLoggerInContext)
}

/// The logger associated with `ctx`; panics on absence.
///
/// For call sites that require a logger to have been explicitly provisioned
/// upstream, where absence is a programmer error.
pub fn expect_logger(ctx: &Context) -> Arc<dyn Logger> {
    match lookup(ctx) {
        Some(logger) => logger,
        None => panic!("logger not found in the context"),
    }
}

/// Logs at Debug via the effective logger for `ctx`.
pub fn debug(ctx: &Context, message: &str, fields: &[Field]) {
    logger(ctx).log(Level::Debug, message, fields);
}

/// Logs at Info via the effective logger for `ctx`.
pub fn info(ctx: &Context, message: &str, fields: &[Field]) {
    logger(ctx).log(Level::Info, message, fields);
}

/// Logs at Warn via the effective logger for `ctx`.
pub fn warn(ctx: &Context, message: &str, fields: &[Field]) {
    logger(ctx).log(Level::Warn, message, fields);
}

/// Logs at Error via the effective logger for `ctx`.
pub fn error(ctx: &Context, message: &str, fields: &[Field]) {
    logger(ctx).log(Level::Error, message, fields);
}
