//! Workflow file loading and the fixed documentation keypaths.
//!
//! Reusable workflows declare their callable surface under
//! `on.workflow_call`; we document the `inputs` and `secrets` mappings found
//! there. Loading is a thin wrapper: read the whole file as UTF-8, parse it
//! into a generic `serde_yaml::Value` tree, and hand the tree to keypath
//! resolution. Mapping order in the tree follows document order.

use crate::Result;
use anyhow::{Context, bail};
use serde_yaml::{Mapping, Value};
use std::fs;

pub const INPUTS_KEYPATH: &str = "on.workflow_call.inputs";
pub const SECRETS_KEYPATH: &str = "on.workflow_call.secrets";

/// Table fields for the inputs report; the first is the row-label field.
pub const INPUTS_FIELDS: [&str; 5] = ["input", "required", "type", "default", "description"];

/// Table fields for the secrets report.
pub const SECRETS_FIELDS: [&str; 3] = ["secret", "required", "description"];

/// Load the YAML file at `path` into a generic tree.
pub fn load_workflow(path: &str) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read workflow file {}", path))?;
    let tree = serde_yaml::from_str(&text)
        .with_context(|| format!("parse workflow file {}", path))?;
    Ok(tree)
}

/// Require a resolved keypath target to be a mapping of item name to record.
pub fn as_item_set<'a>(value: &'a Value, keypath: &str, path: &str) -> Result<&'a Mapping> {
    match value {
        Value::Mapping(items) => Ok(items),
        other => bail!(
            "keypath '{}' in {} must name a mapping, found {}",
            keypath,
            path,
            node_kind(other)
        ),
    }
}

fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    #[test]
    fn loads_a_workflow_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"on:\n  workflow_call:\n    inputs: {}\n")
            .expect("write temp file");

        let tree = load_workflow(file.path().to_str().expect("temp path")).expect("load");
        assert!(tree.get("on").is_some());
    }

    #[test]
    fn missing_file_is_a_load_error_naming_the_path() {
        let err = load_workflow("does/not/exist.yml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.yml"));
    }

    #[test]
    fn malformed_yaml_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"on: [unclosed\n").expect("write temp file");

        let err = load_workflow(file.path().to_str().expect("temp path")).unwrap_err();
        assert!(err.to_string().contains("parse workflow file"));
    }

    #[test]
    fn item_set_must_be_a_mapping() {
        let value: Value = serde_yaml::from_str("- a\n- b\n").expect("parse");
        let err = as_item_set(&value, INPUTS_KEYPATH, "wf.yml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "keypath 'on.workflow_call.inputs' in wf.yml must name a mapping, found a sequence"
        );
    }
}
