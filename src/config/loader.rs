// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::CliVarsError;
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Caller-supplied variables for a render unit, by name.
///
/// These are fixed when a context is created and never change while it renders.
///
/// # Example
/// ```yaml
/// target: dev
/// threads: 4
/// full_refresh: false
/// ```
pub type CliVars = HashMap<String, String>;

/// Parse cli vars from YAML text.
///
/// The document must be a mapping of scalar keys to scalar values. Strings are
/// kept verbatim, numbers and booleans are rendered in their canonical form
/// (`1.50` becomes `1.5`, `0x10` becomes `16`), and null becomes the empty string.
/// An empty document yields no vars.
pub fn load_cli_vars_str(yaml: &str) -> Result<CliVars, CliVarsError> {
    if yaml.trim().is_empty() {
        return Ok(CliVars::new());
    }

    let document: Value = serde_yaml::from_str(yaml)?;

    let mapping = match document {
        Value::Null => return Ok(CliVars::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(CliVarsError::NotAMapping),
    };

    let mut vars = CliVars::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = scalar_to_string(&key).ok_or_else(|| CliVarsError::UnsupportedValue {
            key: format!("{:?}", key),
        })?;
        let value = scalar_to_string(&value)
            .ok_or_else(|| CliVarsError::UnsupportedValue { key: key.clone() })?;
        vars.insert(key, value);
    }

    Ok(vars)
}

/// Load cli vars from a YAML file
pub fn load_cli_vars<P: AsRef<Path>>(path: P) -> Result<CliVars, CliVarsError> {
    let content = fs::read_to_string(path)?;
    load_cli_vars_str(&content)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_scalar_vars() {
        let yaml = r#"
target: dev
threads: 4
ratio: 0.5
full_refresh: false
schema: "analytics"
empty:
"#;

        let vars = load_cli_vars_str(yaml).unwrap();
        assert_eq!(vars.len(), 6);
        assert_eq!(vars["target"], "dev");
        assert_eq!(vars["threads"], "4");
        assert_eq!(vars["ratio"], "0.5");
        assert_eq!(vars["full_refresh"], "false");
        assert_eq!(vars["schema"], "analytics");
        assert_eq!(vars["empty"], "");
    }

    #[test]
    fn test_numbers_use_canonical_form() {
        let vars = load_cli_vars_str("a: 1.50\nb: 1e3\nc: 0x10\nd: +5\ne: \"0x10\"\n").unwrap();

        assert_eq!(vars["a"], "1.5");
        assert_eq!(vars["b"], "1000.0");
        assert_eq!(vars["c"], "16");
        assert_eq!(vars["d"], "5");
        assert_eq!(vars["e"], "0x10");
    }

    #[test]
    fn test_empty_document_has_no_vars() {
        assert!(load_cli_vars_str("").unwrap().is_empty());
        assert!(load_cli_vars_str("{}").unwrap().is_empty());
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        let result = load_cli_vars_str("- a\n- b\n");
        assert!(matches!(result, Err(CliVarsError::NotAMapping)));
    }

    #[test]
    fn test_nested_value_is_rejected() {
        let result = load_cli_vars_str("outer:\n  inner: 1\n");
        match result {
            Err(CliVarsError::UnsupportedValue { key }) => assert_eq!(key, "outer"),
            other => panic!("expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let result = load_cli_vars_str("target: [unterminated");
        assert!(matches!(result, Err(CliVarsError::Yaml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "target: prod").unwrap();

        let vars = load_cli_vars(file.path()).unwrap();
        assert_eq!(vars["target"], "prod");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_cli_vars(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(CliVarsError::Io(_))));
    }
}
