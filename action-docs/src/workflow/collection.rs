//! Aggregated page for every workflow in a directory.

use std::fmt;

use crate::markdown::{Block, Document, Hyperlink, List};

use super::Workflow;

/// Workflows in the order they were added, with a table of contents.
#[derive(Debug, Clone, Default)]
pub struct Workflows {
    items: Vec<Workflow>,
    contents: List,
}

impl Workflows {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of `workflow` and links to it from the table of
    /// contents.
    ///
    /// Workflows whose names sanitise to the same anchor get duplicate
    /// links.
    pub fn add(&mut self, workflow: &Workflow) -> &mut Self {
        let link = Hyperlink::new(
            workflow.source_path.as_str(),
            format!("#{}", sanitize_anchor(&workflow.name)),
        );
        self.contents.add(link.to_string());
        self.items.push(workflow.clone());
        self
    }

    /// Workflows in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Workflow] {
        &self.items
    }

    /// Number of workflows added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the aggregated page.
    #[must_use]
    pub fn document(&self) -> Document {
        let mut document = Document::new();
        document
            .push(Block::h1("Workflows"))
            .push(Block::paragraph("Table of contents:"))
            .push(self.contents.clone());
        for workflow in &self.items {
            document.append(workflow.document());
        }
        document
    }
}

impl fmt::Display for Workflows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document(), f)
    }
}

/// Turns a workflow name into a Markdown heading anchor.
///
/// ```
/// use action_docs::workflow::sanitize_anchor;
///
/// assert_eq!(sanitize_anchor("My Workflow (v2)"), "my-workflow-v2");
/// ```
#[must_use]
pub fn sanitize_anchor(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c == ' ' { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}
