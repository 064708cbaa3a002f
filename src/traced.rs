// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location-carrying error annotation.
//!
//! [`Traced`] wraps an error (or starts a fresh one) and records the source
//! location of the call site via `#[track_caller]`, plus an optional short
//! message describing the wrapping context. Chains of `Traced` values are
//! what the trace renderer turns into per-level `{loc, msg}` entries; any
//! other error type still participates through its `source()` chain, just
//! without locations.

use std::error::Error;
use std::fmt;
use std::panic::Location;

pub struct Traced {
    message: Option<String>,
    location: &'static Location<'static>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl Traced {
    /// A new leaf error with the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Traced {
        Traced {
            message: Some(message.into()),
            location: Location::caller(),
            source: None,
        }
    }

    /// Wraps `source`, recording the caller's location without adding a
    /// message. The chain's rendered form gains a location-only level.
    #[track_caller]
    pub fn mask(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Traced {
        Traced {
            message: None,
            location: Location::caller(),
            source: Some(source.into()),
        }
    }

    /// Wraps `source` with a message and the caller's location.
    #[track_caller]
    pub fn annotate(
        source: impl Into<Box<dyn Error + Send + Sync + 'static>>,
        message: impl Into<String>,
    ) -> Traced {
        Traced {
            message: Some(message.into()),
            location: Location::caller(),
            source: Some(source.into()),
        }
    }

    /// The file and line where this level was constructed.
    pub fn location(&self) -> (&'static str, u32) {
        (self.location.file(), self.location.line())
    }

    /// This level's own message, if it has one. Excludes the source chain,
    /// unlike the `Display` form.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Traced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.source) {
            (Some(message), Some(source)) => write!(f, "{message}: {source}"),
            (Some(message), None) => f.write_str(message),
            (None, Some(source)) => write!(f, "{source}"),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Debug for Traced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("message", &self.message)
            .field("location", &format_args!("{}:{}", self.location.file(), self.location.line()))
            .field("source", &self.source)
            .finish()
    }
}

impl Error for Traced {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_the_chain() {
        let inner = Traced::new("something");
        assert_eq!(inner.to_string(), "something");

        let masked = Traced::mask(inner);
        assert_eq!(masked.to_string(), "something");

        let outer = Traced::annotate(masked, "an error");
        assert_eq!(outer.to_string(), "an error: something");
    }

    #[test]
    fn location_is_the_construction_site() {
        let err = Traced::new("here");
        let (file, line) = err.location();
        assert!(file.ends_with("traced.rs"), "unexpected file {file}");
        assert!(line > 0);
    }

    #[test]
    fn source_exposes_the_wrapped_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let wrapped = Traced::annotate(io, "reading config");
        assert_eq!(wrapped.to_string(), "reading config: boom");
        assert!(wrapped.source().is_some());
        assert!(Traced::new("leaf").source().is_none());
    }

    #[test]
    fn message_excludes_the_source() {
        let outer = Traced::annotate(Traced::new("inner"), "outer");
        assert_eq!(outer.message(), Some("outer"));
        assert_eq!(Traced::mask(Traced::new("x")).message(), None);
    }
}
