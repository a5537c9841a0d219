// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;

pub use loader::{load_cli_vars, load_cli_vars_str, CliVars};
