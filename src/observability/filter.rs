// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::{Event, Level};

/// Routing decision for a sink, made only from an event's level and capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    /// Events below this level are suppressed
    pub min_level: Level,
    /// When set, events that are not Cli-destined are ignored
    pub cli_only: bool,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl LogFilter {
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            cli_only: false,
        }
    }

    /// A filter for sinks that only show command line events.
    pub fn cli(min_level: Level) -> Self {
        Self {
            min_level,
            cli_only: true,
        }
    }

    pub fn admits(&self, event: &dyn Event) -> bool {
        if self.cli_only && !event.is_cli_destined() {
            return false;
        }
        event.level() >= self.min_level
    }
}
