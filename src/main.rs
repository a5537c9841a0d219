// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::collections::BTreeMap;
use std::env;
use render_context::config::{load_cli_vars, CliVars};
use render_context::context::{ProcessEnv, ResolutionContext};
use render_context::errors::ConfigurationError;
use render_context::observability::messages::context::{EnvVarMissing, SecretContextGenerated};
use render_context::observability::messages::StructuredLog;
use tracing_subscriber::EnvFilter;

/// Split a `NAME=DEFAULT` argument. A bare `NAME` has no default.
fn parse_reference(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((name, default)) => (name, Some(default)),
        None => (arg, None),
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("render-context", String::as_str)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        let program = program_name(&args);
        eprintln!("Usage: {} <vars.yaml|-> [NAME[=DEFAULT] ...]", program);
        eprintln!("Example: {} vars.yaml DB_USER DB_PORT=5432", program);
        eprintln!("         {} - HOME", program);
        std::process::exit(1);
    }

    let cli_vars = match args[1].as_str() {
        "-" => CliVars::new(),
        path => load_cli_vars(path).with_context(|| format!("loading vars from {}", path))?,
    };

    let mut ctx = ResolutionContext::new(cli_vars, ProcessEnv);
    for arg in &args[2..] {
        let (name, default) = parse_reference(arg);
        if let Err(ConfigurationError::RequiredValueMissing { name }) = ctx.resolve(name, default) {
            EnvVarMissing { name: &name }.log();
            std::process::exit(1);
        }
    }

    SecretContextGenerated {
        cli_var_count: ctx.cli_vars().len(),
        env_var_count: ctx.env_vars().len(),
    }
    .log();

    // Values go to stdout only; the log never sees them
    let namespace: BTreeMap<String, String> = ctx.into_flat_mapping().into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&namespace)?);

    Ok(())
}
