// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::config::CliVars;
use crate::errors::ConfigurationError;
use crate::observability::messages::context::{EnvVarResolved, SecretContextGenerated};
use crate::observability::messages::StructuredLog;
use crate::traits::VariableSource;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// The ambient source had a value for the name
    Ambient,
    /// The ambient source had no value, so the caller's default was used
    Default,
}

impl Display for ValueOrigin {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ValueOrigin::Ambient => f.write_str("environment"),
            ValueOrigin::Default => f.write_str("default"),
        }
    }
}

/// Variable namespace for a single render/parse unit.
///
/// Holds the caller-supplied variables, fixed at construction, and accumulates
/// every environment-backed variable resolved while rendering. The accumulated
/// values are real secrets, kept so they can be redacted from later log output.
///
/// A context belongs to one unit of work. Hosts rendering several units at once
/// need one context per unit.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use render_context::context::ResolutionContext;
///
/// let ambient = HashMap::from([("MY_VAR".to_string(), "foo".to_string())]);
/// let mut ctx = ResolutionContext::new(HashMap::new(), ambient);
///
/// assert_eq!(ctx.resolve("MY_VAR", None).unwrap(), "foo");
/// assert_eq!(ctx.resolve("MISSING", Some("fallback")).unwrap(), "fallback");
/// assert_eq!(ctx.env_vars().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ResolutionContext<S> {
    cli_vars: CliVars,
    env_vars: HashMap<String, String>,
    source: S,
}

impl<S: VariableSource> ResolutionContext<S> {
    pub fn new(cli_vars: CliVars, source: S) -> Self {
        Self {
            cli_vars,
            env_vars: HashMap::new(),
            source,
        }
    }

    /// Resolve the variable `name`, falling back to `default`.
    ///
    /// The ambient source wins over `default` whenever it has a value. The result
    /// is recorded under `name`, replacing any earlier value for it.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::RequiredValueMissing`] when the ambient source
    /// has no value and no default was given. The current unit should be aborted;
    /// reporting it (for example through `EnvVarMissing`) is left to the caller.
    pub fn resolve(&mut self, name: &str, default: Option<&str>) -> Result<String, ConfigurationError> {
        let (value, origin) = match self.source.lookup(name) {
            Some(value) => (value, ValueOrigin::Ambient),
            None => match default {
                Some(default) => (default.to_string(), ValueOrigin::Default),
                None => return Err(ConfigurationError::required_value_missing(name)),
            },
        };

        EnvVarResolved { name, origin }.log();
        self.env_vars.insert(name.to_string(), value.clone());
        Ok(value)
    }

    pub fn cli_vars(&self) -> &CliVars {
        &self.cli_vars
    }

    /// Every variable resolved so far, with its most recent value.
    pub fn env_vars(&self) -> &HashMap<String, String> {
        &self.env_vars
    }

    /// Snapshot of the namespace handed to the template engine.
    ///
    /// Resolved env vars take precedence over cli vars with the same name.
    pub fn to_flat_mapping(&self) -> HashMap<String, String> {
        let mut flat = self.cli_vars.clone();
        flat.extend(self.env_vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        flat
    }

    pub fn into_flat_mapping(self) -> HashMap<String, String> {
        let mut flat = self.cli_vars;
        flat.extend(self.env_vars);
        flat
    }
}

/// Build a fresh context over `cli_vars` and return its flat namespace.
pub fn generate_secret_context<S: VariableSource>(cli_vars: CliVars, source: S) -> HashMap<String, String> {
    let ctx = ResolutionContext::new(cli_vars, source);

    SecretContextGenerated {
        cli_var_count: ctx.cli_vars().len(),
        env_var_count: ctx.env_vars().len(),
    }
    .log();

    ctx.into_flat_mapping()
}
