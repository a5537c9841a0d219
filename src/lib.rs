// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // cli vars loading
pub mod context;    // secret-aware variable resolution
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // injected variable sources
