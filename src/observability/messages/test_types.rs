// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Events used only by integration tests.
//!
//! These are kept apart from the production events because they exist for
//! debugging test runs. Reuse them when adding logs to tests instead of
//! defining new ones.
//!
//! Every type here is built from its payload alone, through `From<String>` or
//! `From<&str>`, so a test harness can construct any of them generically.

use crate::observability::messages::{Event, Level, StructuredLog};
use serde::Serialize;

macro_rules! payload_constructors {
    ($($event:ident),+ $(,)?) => {
        $(
            impl From<String> for $event {
                fn from(msg: String) -> Self {
                    Self { msg }
                }
            }

            impl From<&str> for $event {
                fn from(msg: &str) -> Self {
                    Self { msg: msg.to_string() }
                }
            }
        )+
    };
}

payload_constructors!(
    IntegrationTestInfo,
    IntegrationTestDebug,
    IntegrationTestWarn,
    IntegrationTestError,
    IntegrationTestException,
);

/// # Log Level
/// `info!`, Cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationTestInfo {
    pub msg: String,
}

impl Event for IntegrationTestInfo {
    fn level(&self) -> Level {
        Level::Info
    }

    fn message(&self) -> String {
        format!("Integration Test: {}", self.msg)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl StructuredLog for IntegrationTestInfo {}

/// # Log Level
/// `debug!`, Cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationTestDebug {
    pub msg: String,
}

impl Event for IntegrationTestDebug {
    fn level(&self) -> Level {
        Level::Debug
    }

    fn message(&self) -> String {
        format!("Integration Test: {}", self.msg)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl StructuredLog for IntegrationTestDebug {}

/// # Log Level
/// `warn!`, Cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationTestWarn {
    pub msg: String,
}

impl Event for IntegrationTestWarn {
    fn level(&self) -> Level {
        Level::Warn
    }

    fn message(&self) -> String {
        format!("Integration Test: {}", self.msg)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl StructuredLog for IntegrationTestWarn {}

/// # Log Level
/// `error!`, Cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationTestError {
    pub msg: String,
}

impl Event for IntegrationTestError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        format!("Integration Test: {}", self.msg)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl StructuredLog for IntegrationTestError {}

/// Error event that is displayed together with the error that caused it.
///
/// # Log Level
/// `error!`, Cli, ShowException
///
/// # Example
/// ```
/// use render_context::observability::messages::test_types::IntegrationTestException;
/// use render_context::observability::messages::StructuredLog;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// IntegrationTestException::from("fixture failed").log_with_error(&error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationTestException {
    pub msg: String,
}

impl Event for IntegrationTestException {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        format!("Integration Test: {}", self.msg)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        true
    }
}

impl StructuredLog for IntegrationTestException {}
