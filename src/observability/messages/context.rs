// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for building a render context.
//!
//! This module contains message types for logging events related to:
//! * Resolving environment-backed variables
//! * Missing required variables
//! * Snapshotting the context into a template namespace
//!
//! Resolved values may be secrets, so none of these events ever carry a value.
//! Only variable names and counts are logged.

use crate::context::ValueOrigin;
use crate::observability::messages::{Event, Level, StructuredLog};
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A variable was resolved and recorded in the context.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use render_context::context::ValueOrigin;
/// use render_context::observability::messages::context::EnvVarResolved;
/// use render_context::observability::messages::Event;
///
/// let msg = EnvVarResolved {
///     name: "DB_PASSWORD",
///     origin: ValueOrigin::Ambient,
/// };
///
/// assert_eq!(msg.message(), "Resolved env var 'DB_PASSWORD' from the environment");
/// ```
pub struct EnvVarResolved<'a> {
    pub name: &'a str,
    pub origin: ValueOrigin,
}

impl Event for EnvVarResolved<'_> {
    fn level(&self) -> Level {
        Level::Debug
    }

    fn message(&self) -> String {
        match self.origin {
            ValueOrigin::Ambient => format!("Resolved env var '{}' from the environment", self.name),
            ValueOrigin::Default => format!("Resolved env var '{}' from its default", self.name),
        }
    }

    fn is_cli_destined(&self) -> bool {
        false
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl Display for EnvVarResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl StructuredLog for EnvVarResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            var_name = self.name,
            origin = %self.origin,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "env_var_resolved",
            span_name = name,
            var_name = self.name,
            origin = %self.origin,
        )
    }
}

/// A required variable had neither an ambient value nor a default.
///
/// The message matches the text of the `ConfigurationError` returned to the caller.
///
/// # Log Level
/// `error!` - Failure requiring attention, shown on the command line
pub struct EnvVarMissing<'a> {
    pub name: &'a str,
}

impl Event for EnvVarMissing<'_> {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        format!("Env var required but not provided: '{}'", self.name)
    }

    fn is_cli_destined(&self) -> bool {
        true
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl Display for EnvVarMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl StructuredLog for EnvVarMissing<'_> {
    fn log(&self) {
        tracing::error!(
            var_name = self.name,
            cli = true,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "env_var_missing",
            span_name = name,
            var_name = self.name,
        )
    }
}

/// A context was snapshotted into a flat template namespace.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SecretContextGenerated {
    pub cli_var_count: usize,
    pub env_var_count: usize,
}

impl Event for SecretContextGenerated {
    fn level(&self) -> Level {
        Level::Debug
    }

    fn message(&self) -> String {
        format!(
            "Generated secret context: {} cli vars, {} env vars",
            self.cli_var_count, self.env_var_count
        )
    }

    fn is_cli_destined(&self) -> bool {
        false
    }

    fn requires_exception_display(&self) -> bool {
        false
    }
}

impl Display for SecretContextGenerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl StructuredLog for SecretContextGenerated {
    fn log(&self) {
        tracing::debug!(
            cli_var_count = self.cli_var_count,
            env_var_count = self.env_var_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "secret_context_generated",
            span_name = name,
            cli_var_count = self.cli_var_count,
            env_var_count = self.env_var_count,
        )
    }
}
