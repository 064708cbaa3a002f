// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed output for development and diagnosis
    Debug,
    /// Routine operational messages
    Info,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
}

impl Level {
    /// The lowercase name, as emitted by the JSON encoder.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// The uppercase name, as emitted by the text encoder.
    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            _ => Level::Error,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
A cloneable handle over an atomically adjustable minimum severity.

Handles clone cheaply and observe each other's updates, so one handle can be
shared between an encoder and whatever operational surface adjusts verbosity
at runtime. Reads are unsynchronized; writes are rare.
*/
#[derive(Debug, Clone)]
pub struct LevelHandle(Arc<AtomicU8>);

impl LevelHandle {
    pub fn new(level: Level) -> Self {
        LevelHandle(Arc::new(AtomicU8::new(level as u8)))
    }

    pub fn get(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a call at `level` passes this minimum.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.get()
    }
}

impl Default for LevelHandle {
    fn default() -> Self {
        LevelHandle::new(Level::Info)
    }
}

/*
Boilerplate notes.

# Level

Copy/Eq/Ord/Hash all derive cleanly for a fieldless enum and the ordering is
the point of the type. Default is deliberately absent: Info is the default
*minimum* (see LevelHandle), not the default severity of a call.

# LevelHandle

Clone is shallow by design (shared atomic). PartialEq would be ambiguous
between handle identity and current value, so it's left out.
*/
