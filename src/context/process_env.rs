// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::VariableSource;

/// The process environment as a [`VariableSource`].
///
/// Variables whose value is not valid Unicode are treated as absent, as are names
/// the platform cannot look up (empty, or containing `=` or NUL).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var(name).ok()
    }
}
