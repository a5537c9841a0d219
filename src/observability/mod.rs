// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and CLI diagnostics.
//!
//! This module provides the leveled event types used for diagnostic and
//! operational logging, and the routing rules a sink applies to them.
//! Event types follow a struct-based pattern to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep each message's wording next to the type that emits it
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! * `messages` - `Level`, the `Event` trait, and the concrete event types
//! * `filter` - level threshold and CLI-only routing decisions
//!
//! # Usage
//!
//! ```rust
//! use render_context::observability::filter::LogFilter;
//! use render_context::observability::messages::test_types::IntegrationTestDebug;
//! use render_context::observability::messages::{Level, StructuredLog};
//!
//! let filter = LogFilter::new(Level::Info);
//! let msg = IntegrationTestDebug::from("noisy detail");
//!
//! if filter.admits(&msg) {
//!     msg.log();
//! }
//! ```

pub mod filter;
pub mod messages;

#[cfg(test)]
pub(crate) mod capture;
