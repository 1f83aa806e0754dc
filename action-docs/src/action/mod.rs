//! Documentation for a single GitHub Action (`action.yml`).
//!
//! The rendered page has a title, the description, a usage example whose
//! `uses:` line points at the action's directory, and tables for inputs and
//! outputs when any are declared.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::diagnostics::WarningSink;
use crate::error::DecodeError;
use crate::markdown::{Block, Document, Table};
use crate::metadata::{InputMap, OutputMap, UsageValues, text};

/// Indentation of input lines inside the usage example's `with:` block.
const USAGE_SPACING: usize = 8;

/// Parsed action metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Declared inputs.
    pub inputs: InputMap,
    /// Declared outputs.
    pub outputs: OutputMap,
    /// Location the definition was read from. Never taken from the file body.
    pub source_path: Utf8PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActionFile {
    #[serde(deserialize_with = "text")]
    name: String,
    #[serde(deserialize_with = "text")]
    description: String,
    inputs: InputMap,
    outputs: OutputMap,
}

impl Action {
    /// Decodes an action definition.
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
        let file: Option<ActionFile> = serde_saphyr::from_str(contents)?;
        let ActionFile {
            name,
            description,
            inputs,
            outputs,
        } = file.unwrap_or_default();
        Ok(Self {
            name,
            description,
            inputs,
            outputs,
            source_path: source_path.into(),
        })
    }

    /// Decodes an action definition, reporting failures to `sink` instead of
    /// returning them.
    ///
    /// A file that cannot be decoded yields an action with empty fields and
    /// the given source path.
    pub fn parse(
        source: &[u8],
        source_path: impl Into<Utf8PathBuf>,
        sink: &dyn WarningSink,
    ) -> Self {
        let path: Utf8PathBuf = source_path.into();
        match Self::try_from_slice(source, path.clone()) {
            Ok(action) => action,
            Err(err) => {
                sink.warn(&path, &err.to_string());
                Self {
                    source_path: path,
                    ..Self::default()
                }
            }
        }
    }

    /// Directory referenced by the usage example: the source path without
    /// its file name, or `.` for a bare file name.
    #[must_use]
    pub fn reference(&self) -> &Utf8Path {
        match self.source_path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }

    /// Builds the Markdown document for this action.
    #[must_use]
    pub fn document(&self) -> Document {
        let mut document = Document::new();
        document
            .push(Block::h1(self.name.as_str()))
            .push(Block::paragraph(self.description.as_str()))
            .push(Block::h2("Usage example"))
            .push(Block::code(self.usage_example()));

        if !self.inputs.is_empty() {
            document
                .push(Block::h2("Inputs"))
                .push(self.inputs_table());
        }
        if !self.outputs.is_empty() {
            document
                .push(Block::h2("Outputs"))
                .push(self.outputs_table());
        }
        document
    }

    /// Renders the Markdown document for this action.
    #[must_use]
    pub fn markdown(&self) -> String {
        self.document().to_string()
    }

    fn usage_example(&self) -> String {
        format!(
            "jobs:\n  job-name:\n    runs-on: <runner>\n    steps:\n    - uses: {}@main\n{}",
            self.reference(),
            self.inputs.with_block(USAGE_SPACING, UsageValues::Defaults),
        )
    }

    fn inputs_table(&self) -> Table {
        let mut table = Table::new(["Name", "Description", "Required", "Default value"]);
        for (name, input) in &self.inputs {
            table.add_row([
                name.as_str(),
                input.description.as_str(),
                bool_cell(input.required),
                input.default.as_str(),
            ]);
        }
        table.sort_by_column(0);
        table
    }

    fn outputs_table(&self) -> Table {
        let mut table = Table::new(["Name", "Description"]);
        for (name, output) in &self.outputs {
            table.add_row([name.as_str(), output.description.as_str()]);
        }
        table.sort_by_column(0);
        table
    }
}

pub(crate) const fn bool_cell(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
