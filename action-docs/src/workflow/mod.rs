//! Documentation for GitHub Workflows.
//!
//! A workflow is rendered as an H2 section so several of them can be
//! gathered into one page by [`Workflows`].

mod collection;
mod trigger;

use camino::Utf8PathBuf;
use serde::Deserialize;

pub use collection::{Workflows, sanitize_anchor};
pub use trigger::{DispatchTrigger, ReusableTrigger, Trigger};

use crate::action::bool_cell;
use crate::diagnostics::WarningSink;
use crate::error::DecodeError;
use crate::markdown::{Block, Document, Table};
use crate::metadata::{InputMap, OutputMap, SecretMap, UsageValues, text};
use trigger::DeclaredEvents;

/// Indentation of input lines inside the usage example's `with:` block.
const USAGE_SPACING: usize = 6;

/// Parsed workflow metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workflow {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Trigger kind together with the data it contributes.
    pub trigger: Trigger,
    /// Location the definition was read from.
    pub source_path: Utf8PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkflowFile {
    #[serde(deserialize_with = "text")]
    name: String,
    #[serde(deserialize_with = "text")]
    description: String,
    #[serde(rename = "on")]
    events: DeclaredEvents,
}

impl Workflow {
    /// Decodes a workflow definition.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the bytes are not UTF-8 or not a YAML
    /// mapping of the expected shape.
    pub fn try_from_slice(
        source: &[u8],
        source_path: impl Into<Utf8PathBuf>,
    ) -> Result<Self, DecodeError> {
        let contents = std::str::from_utf8(source)?;
        let file: Option<WorkflowFile> = serde_saphyr::from_str(contents)?;
        let WorkflowFile {
            name,
            description,
            events,
        } = file.unwrap_or_default();
        Ok(Self {
            name,
            description,
            trigger: Trigger::classify(events),
            source_path: source_path.into(),
        })
    }

    /// Decodes a workflow definition, reporting failures to `sink`.
    ///
    /// A file that cannot be decoded yields a dispatch-only workflow with
    /// empty fields and the given source path.
    pub fn parse(
        source: &[u8],
        source_path: impl Into<Utf8PathBuf>,
        sink: &dyn WarningSink,
    ) -> Self {
        let path: Utf8PathBuf = source_path.into();
        match Self::try_from_slice(source, path.clone()) {
            Ok(workflow) => workflow,
            Err(err) => {
                sink.warn(&path, &err.to_string());
                Self {
                    source_path: path,
                    ..Self::default()
                }
            }
        }
    }

    /// Whether other workflows can call this one.
    #[must_use]
    pub const fn is_reusable(&self) -> bool {
        matches!(self.trigger, Trigger::Reusable(_))
    }

    /// Inputs of whichever trigger was declared.
    #[must_use]
    pub const fn inputs(&self) -> &InputMap {
        match &self.trigger {
            Trigger::Reusable(call) => &call.inputs,
            Trigger::DispatchOnly(dispatch) => &dispatch.inputs,
        }
    }

    /// Outputs, present only for reusable workflows.
    #[must_use]
    pub const fn outputs(&self) -> Option<&OutputMap> {
        match &self.trigger {
            Trigger::Reusable(call) => Some(&call.outputs),
            Trigger::DispatchOnly(_) => None,
        }
    }

    /// Secrets, present only for reusable workflows.
    #[must_use]
    pub const fn secrets(&self) -> Option<&SecretMap> {
        match &self.trigger {
            Trigger::Reusable(call) => Some(&call.secrets),
            Trigger::DispatchOnly(_) => None,
        }
    }

    /// Builds the Markdown section for this workflow.
    #[must_use]
    pub fn document(&self) -> Document {
        let mut document = Document::new();
        document
            .push(Block::h2(self.name.as_str()))
            .push(Block::paragraph(format!("File: {}", self.source_path)))
            .push(Block::paragraph(self.description.as_str()));

        match &self.trigger {
            Trigger::Reusable(call) => {
                document
                    .push(Block::h3("Usage example"))
                    .push(Block::code(self.usage_example(&call.inputs)));
                if !call.inputs.is_empty() {
                    document
                        .push(Block::h3("Inputs"))
                        .push(reusable_inputs_table(&call.inputs));
                }
                if !call.outputs.is_empty() {
                    document
                        .push(Block::h3("Outputs"))
                        .push(outputs_table(&call.outputs));
                }
                if !call.secrets.is_empty() {
                    document
                        .push(Block::h3("Secrets"))
                        .push(secrets_table(&call.secrets));
                }
            }
            Trigger::DispatchOnly(dispatch) => {
                if !dispatch.inputs.is_empty() {
                    document
                        .push(Block::h3("Inputs"))
                        .push(dispatch_inputs_table(&dispatch.inputs));
                }
            }
        }
        document
    }

    /// Renders the Markdown section for this workflow.
    #[must_use]
    pub fn markdown(&self) -> String {
        self.document().to_string()
    }

    fn usage_example(&self, inputs: &InputMap) -> String {
        format!(
            concat!(
                "name: My workflow\n",
                "on:\n",
                "  push:\n",
                "    branches:\n",
                "    - main\n",
                "\n",
                "jobs:\n",
                "  my-job:\n",
                "    uses: {}@main\n",
                "{}",
            ),
            self.source_path,
            inputs.with_block(USAGE_SPACING, UsageValues::Blank),
        )
    }
}

fn reusable_inputs_table(inputs: &InputMap) -> Table {
    let mut table = Table::new(["Name", "Type", "Description", "Required"]);
    for (name, input) in inputs.sorted() {
        table.add_row([
            name,
            input.kind.as_str(),
            input.description.as_str(),
            bool_cell(input.required),
        ]);
    }
    table
}

fn dispatch_inputs_table(inputs: &InputMap) -> Table {
    let mut table = Table::new(["Name", "Type", "Description", "Default"]);
    for (name, input) in inputs.sorted() {
        table.add_row([
            name,
            input.kind.as_str(),
            input.description.as_str(),
            input.default.as_str(),
        ]);
    }
    table
}

fn outputs_table(outputs: &OutputMap) -> Table {
    let mut table = Table::new(["Name", "Description"]);
    for (name, output) in outputs.sorted() {
        table.add_row([name, output.description.as_str()]);
    }
    table
}

fn secrets_table(secrets: &SecretMap) -> Table {
    let mut table = Table::new(["Name", "Required"]);
    for (name, secret) in secrets.sorted() {
        table.add_row([name, bool_cell(secret.required)]);
    }
    table
}
