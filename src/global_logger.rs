// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! Context resolution falls back to this logger when no association exists
//! anywhere on the parent chain. It initializes lazily to a JSON console
//! logger on stdout gated by [`default_level`] at Info, and is held in a
//! lock-free swap slot: readers never block, and operators (typically tests)
//! replace it either permanently with [`set_default_logger`] or for a scope
//! with [`replace_default_logger`], whose guard restores the previous logger
//! on every exit path.

use crate::console_logger::{ConsoleLogger, Encoding};
use crate::level::{Level, LevelHandle};
use crate::logger::Logger;
use arc_swap::ArcSwap;
use std::sync::{Arc, OnceLock};

static DEFAULT_LEVEL: OnceLock<LevelHandle> = OnceLock::new();
static DEFAULT_LOGGER: OnceLock<ArcSwap<CurrentDefault>> = OnceLock::new();

// ArcSwap needs a sized pointee, so the trait object rides in a newtype.
struct CurrentDefault(Arc<dyn Logger>);

fn slot() -> &'static ArcSwap<CurrentDefault> {
    DEFAULT_LOGGER.get_or_init(|| {
        let logger = ConsoleLogger::with_sink(
            Encoding::Json,
            Box::new(std::io::stdout()),
            default_level(),
        );
        ArcSwap::from_pointee(CurrentDefault(Arc::new(logger)))
    })
}

/// The minimum severity of the initial default logger. Adjusting it takes
/// effect immediately; it has no bearing on a replacement default unless the
/// replacement was built over the same handle.
pub fn default_level() -> LevelHandle {
    DEFAULT_LEVEL
        .get_or_init(|| LevelHandle::new(Level::Info))
        .clone()
}

/// The current process-wide default logger.
pub fn default_logger() -> Arc<dyn Logger> {
    slot().load().0.clone()
}

/// Atomically replaces the default logger, returning the previous one.
pub fn set_default_logger(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    slot().swap(Arc::new(CurrentDefault(logger))).0.clone()
}

/// Replaces the default logger for a scope; the returned guard restores the
/// previous default when dropped.
#[must_use = "dropping the guard immediately restores the previous default"]
pub fn replace_default_logger(logger: Arc<dyn Logger>) -> DefaultLoggerGuard {
    DefaultLoggerGuard {
        previous: Some(set_default_logger(logger)),
    }
}

pub struct DefaultLoggerGuard {
    previous: Option<Arc<dyn Logger>>,
}

impl Drop for DefaultLoggerGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_default_logger(previous);
        }
    }
}
