//! Markdown table rendering for named item sets.
//!
//! Each table documents one mapping of item name to record: a `###` section
//! title derived from the name field, a header row, a divider row whose
//! hyphen runs match the header widths, then one row per item in document
//! order. Cell values are not escaped, so a value containing the separator
//! would break the table; workflow inputs do not contain it in practice.

use serde_yaml::{Mapping, Value};

pub const CELL_SEP: &str = " | ";

/// Render one markdown table. `fields[0]` is the name field: it titles the
/// section (capitalized, with a literal `s` appended) and labels each row.
/// Remaining fields are looked up in each item's record, with `-`
/// substituted when absent. Rows keep the mapping's iteration order.
pub fn render_table(items: &Mapping, fields: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(format!("### {}s", capitalize(fields[0])));
    lines.push(String::new());

    lines.push(fields.join(CELL_SEP));
    let dividers: Vec<String> = fields.iter().map(|f| "-".repeat(f.len())).collect();
    lines.push(dividers.join(CELL_SEP));

    for (name, record) in items {
        let mut cells = vec![cell_text(name)];
        for field in &fields[1..] {
            match record.as_mapping().and_then(|r| r.get(*field)) {
                Some(value) => cells.push(cell_text(value)),
                None => cells.push("-".to_string()),
            }
        }
        lines.push(cells.join(CELL_SEP));
    }

    lines
}

/// Stringify one cell. Null renders as `-`, same as an absent field; nested
/// values fall back to compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| "-".to_string()),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
