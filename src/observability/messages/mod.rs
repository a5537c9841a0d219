// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Leveled diagnostic events for structured logging and CLI output.
//!
//! Every event is a small immutable value with a fixed severity [`Level`] and two
//! capability flags:
//!
//! * **Cli** - the event is meant for the command line, not only for log files
//! * **ShowException** - the event must be displayed together with a captured error
//!
//! Each concrete event type implements [`Event`] itself, including `message()`.
//! Nothing about the wording is shared between event types, so every message is
//! reviewed where it is defined.
//!
//! # Organization
//!
//! * `context` - variable resolution while building a render context
//! * `test_types` - events used only by integration tests
//!
//! # Usage Pattern
//!
//! ```rust
//! use render_context::observability::messages::test_types::IntegrationTestInfo;
//! use render_context::observability::messages::{Event, StructuredLog};
//!
//! let msg = IntegrationTestInfo::from("starting");
//! assert_eq!(msg.message(), "Integration Test: starting");
//!
//! msg.log();
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Emits a `tracing` event at a runtime [`Level`].
macro_rules! event_at {
    ($level:expr, $($fields:tt)+) => {
        match $level {
            $crate::observability::messages::Level::Debug => {
                tracing::event!(tracing::Level::DEBUG, $($fields)+)
            }
            $crate::observability::messages::Level::Info => {
                tracing::event!(tracing::Level::INFO, $($fields)+)
            }
            $crate::observability::messages::Level::Warn => {
                tracing::event!(tracing::Level::WARN, $($fields)+)
            }
            $crate::observability::messages::Level::Error => {
                tracing::event!(tracing::Level::ERROR, $($fields)+)
            }
        }
    };
}

pub mod context;
pub mod test_types;

/// Severity of an event.
///
/// Variants are declared from least to most severe, so `Level::Debug < Level::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(name)
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

/// A leveled diagnostic event.
///
/// Implementors fix `level()` and both capability predicates per type; they never
/// vary with the payload. `message()` must be a pure, total function of the payload.
pub trait Event {
    fn level(&self) -> Level;

    fn message(&self) -> String;

    /// Whether the event is meant for the command line.
    fn is_cli_destined(&self) -> bool;

    /// Whether the event must be shown alongside a captured error.
    fn requires_exception_display(&self) -> bool;
}

/// Emission of an [`Event`] through `tracing`.
///
/// The default methods log the rendered message at the event's level along with
/// its capability flags. Event types with extra structured fields override `log`
/// and `span` to attach them.
pub trait StructuredLog: Event {
    fn log(&self) {
        let message = self.message();
        event_at!(
            self.level(),
            cli = self.is_cli_destined(),
            show_exception = self.requires_exception_display(),
            "{}",
            message
        );
    }

    /// Logs the event with a captured error.
    ///
    /// The error and its source chain are attached only when the event requires
    /// exception display; other events degrade to the payload alone.
    fn log_with_error(&self, error: &dyn Error) {
        if !self.requires_exception_display() {
            self.log();
            return;
        }

        let message = self.message();
        let chain = error_chain(error);
        event_at!(
            self.level(),
            cli = self.is_cli_destined(),
            show_exception = true,
            error = %error,
            error_chain = chain.as_str(),
            "{}",
            message
        );
    }

    fn span(&self, name: &str) -> Span {
        match self.level() {
            Level::Debug => tracing::debug_span!("event", span_name = name, cli = self.is_cli_destined()),
            Level::Info => tracing::info_span!("event", span_name = name, cli = self.is_cli_destined()),
            Level::Warn => tracing::warn_span!("event", span_name = name, cli = self.is_cli_destined()),
            Level::Error => tracing::error_span!("event", span_name = name, cli = self.is_cli_destined()),
        }
    }
}

/// Renders an error followed by each of its sources, joined by `": "`.
pub fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Serializable snapshot of an event, for JSON log lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub level: Level,
    pub message: String,
    pub cli: bool,
    pub show_exception: bool,
}

impl EventRecord {
    pub fn from_event(event: &dyn Event) -> Self {
        Self {
            level: event.level(),
            message: event.message(),
            cli: event.is_cli_destined(),
            show_exception: event.requires_exception_display(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::test_types::{IntegrationTestError, IntegrationTestException, IntegrationTestWarn};
    use super::*;
    use crate::observability::capture::capture_logs;

    #[derive(Debug)]
    struct Inner;

    impl Display for Inner {
        fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl Display for Outer {
        fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
            write!(f, "could not open profile")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_maps_to_tracing_level() {
        assert_eq!(tracing::Level::from(Level::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(Level::Error), tracing::Level::ERROR);
        assert_eq!(Level::Warn.to_string(), "warn");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        assert_eq!(error_chain(&Inner), "connection refused");
        assert_eq!(
            error_chain(&Outer(Inner)),
            "could not open profile: connection refused"
        );
    }

    #[test]
    fn test_event_record_serializes_flags() {
        let record = EventRecord::from_event(&IntegrationTestException::from("boom"));
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(json["level"], "error");
        assert_eq!(json["message"], "Integration Test: boom");
        assert_eq!(json["cli"], true);
        assert_eq!(json["show_exception"], true);
    }

    #[test]
    fn test_exception_event_logs_error_chain() {
        let output = capture_logs(|| {
            IntegrationTestException::from("fixture failed").log_with_error(&Outer(Inner));
        });

        assert!(output.contains("Integration Test: fixture failed"));
        assert!(output.contains("show_exception=true"));
        assert!(output.contains("error_chain=\"could not open profile: connection refused\""));
    }

    #[test]
    fn test_plain_error_event_degrades_to_payload() {
        let output = capture_logs(|| {
            IntegrationTestError::from("fixture failed").log_with_error(&Outer(Inner));
        });

        assert!(output.contains("Integration Test: fixture failed"));
        assert!(output.contains("show_exception=false"));
        assert!(!output.contains("error_chain"));
        assert!(!output.contains("connection refused"));
    }

    #[test]
    fn test_logging_without_subscriber_is_harmless() {
        let warn = IntegrationTestWarn::from("disk low");
        warn.log();
        warn.log_with_error(&Outer(Inner));
        IntegrationTestException::from("boom").log_with_error(&Outer(Inner));
        let _span = warn.span("render");
    }
}
