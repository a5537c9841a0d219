// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod process_env;
mod secret;


pub use process_env::ProcessEnv;
pub use secret::{generate_secret_context, ResolutionContext, ValueOrigin};
