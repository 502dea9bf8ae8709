//! Per-file report generation.
//!
//! For each workflow file, in argument order: load the tree, resolve the two
//! fixed keypaths, and print the inputs and secrets tables followed by a
//! blank separator line. Processing is strictly sequential and every failure
//! is fatal for the whole run; tables already written stay written.

use crate::Result;
use crate::keypath;
use crate::render;
use crate::workflow;

use anyhow::Context;
use std::io::Write;

pub fn run<W: Write>(paths: &[String], debug: bool, out: &mut W) -> Result<()> {
    for path in paths {
        let tree = workflow::load_workflow(path)?;

        let inputs_node = keypath::resolve_dotted(&tree, workflow::INPUTS_KEYPATH)
            .with_context(|| format!("document workflow {}", path))?;
        let inputs = workflow::as_item_set(inputs_node, workflow::INPUTS_KEYPATH, path)?;

        let secrets_node = keypath::resolve_dotted(&tree, workflow::SECRETS_KEYPATH)
            .with_context(|| format!("document workflow {}", path))?;
        let secrets = workflow::as_item_set(secrets_node, workflow::SECRETS_KEYPATH, path)?;

        if debug {
            eprintln!(
                "{}: {} input(s), {} secret(s)",
                path,
                inputs.len(),
                secrets.len()
            );
        }

        for line in render::render_table(inputs, &workflow::INPUTS_FIELDS) {
            writeln!(out, "{}", line)?;
        }
        for line in render::render_table(secrets, &workflow::SECRETS_FIELDS) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
