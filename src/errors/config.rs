// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building a render context.

use thiserror::Error;

/// Errors that abort the current render/parse unit.
///
/// These are never recovered locally. They propagate to whatever reports
/// parsing failures to the user, and no fallback value is substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A variable was referenced with no default and is absent from the ambient source
    #[error("Env var required but not provided: '{name}'")]
    RequiredValueMissing {
        /// The variable name that could not be resolved
        name: String,
    },
}

impl ConfigurationError {
    pub fn required_value_missing(name: impl Into<String>) -> Self {
        ConfigurationError::RequiredValueMissing { name: name.into() }
    }

    /// The variable name this error refers to.
    pub fn name(&self) -> &str {
        match self {
            ConfigurationError::RequiredValueMissing { name } => name,
        }
    }
}

/// Errors that can occur while loading caller-supplied variables
#[derive(Debug, Error)]
pub enum CliVarsError {
    #[error("Failed to read vars file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse vars as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping
    #[error("Vars must be a YAML mapping of names to values")]
    NotAMapping,

    /// A key is not a scalar, or its value is a sequence or mapping
    #[error("Unsupported value for var '{key}': only scalar values are allowed")]
    UnsupportedValue { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_value_missing_message_is_exact() {
        let err = ConfigurationError::required_value_missing("MISSING");
        assert_eq!(err.to_string(), "Env var required but not provided: 'MISSING'");
        assert_eq!(err.name(), "MISSING");
    }

    #[test]
    fn test_required_value_missing_keeps_name_verbatim() {
        let err = ConfigurationError::required_value_missing("db password");
        assert_eq!(err.to_string(), "Env var required but not provided: 'db password'");
    }

    #[test]
    fn test_unsupported_value_names_key() {
        let err = CliVarsError::UnsupportedValue { key: "nested".to_string() };
        assert!(err.to_string().contains("'nested'"));
    }
}
