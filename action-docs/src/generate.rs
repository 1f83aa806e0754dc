//! End-to-end documentation runs: discover, parse, render, write.
//!
//! Per-file decode problems go to the [`WarningSink`] and never stop a run.
//! Discovery, read and write failures do.

use camino::{Utf8Path, Utf8PathBuf};

use crate::action::Action;
use crate::diagnostics::WarningSink;
use crate::discovery::{find_actions, find_workflows, read_source};
use crate::error::ActionDocsError;
use crate::output::write_document;
use crate::workflow::{Workflow, Workflows};

/// Writes a README next to every action definition found under `root`.
///
/// Returns the written README paths in discovery order.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when the tree cannot be listed, a
/// definition cannot be read or a README cannot be written.
pub fn document_actions(
    root: &Utf8Path,
    readme_name: &str,
    sink: &dyn WarningSink,
) -> Result<Vec<Utf8PathBuf>, ActionDocsError> {
    tracing::info!(root = %root, "scanning actions");
    let mut written = Vec::new();
    for path in find_actions(root)? {
        let source = read_source(&path)?;
        let action = Action::parse(&source, path, sink);
        written.push(write_document(
            action.reference(),
            readme_name,
            &action.markdown(),
        )?);
    }
    tracing::info!(count = written.len(), "documented actions");
    Ok(written)
}

/// Collects every workflow in `workflows_dir` into one README in
/// `output_dir`.
///
/// The README is written even when no workflows are found. Returns its path.
///
/// # Errors
///
/// Returns [`ActionDocsError::Io`] when the directory cannot be listed, a
/// definition cannot be read or the README cannot be written.
pub fn document_workflows(
    workflows_dir: &Utf8Path,
    output_dir: &Utf8Path,
    readme_name: &str,
    sink: &dyn WarningSink,
) -> Result<Utf8PathBuf, ActionDocsError> {
    tracing::info!(dir = %workflows_dir, "scanning workflows");
    let mut workflows = Workflows::new();
    for path in find_workflows(workflows_dir)? {
        let source = read_source(&path)?;
        workflows.add(&Workflow::parse(&source, path, sink));
    }
    let written = write_document(output_dir, readme_name, &workflows.to_string())?;
    tracing::info!(count = workflows.len(), path = %written, "documented workflows");
    Ok(written)
}
