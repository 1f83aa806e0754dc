//! Minimal Markdown document builder.
//!
//! Each block renders to a self-contained text fragment that already carries
//! its trailing blank line, so a [`Document`] is simply the concatenation of
//! its blocks in insertion order. Nothing here knows about actions or
//! workflows.

mod list;
mod table;

use std::fmt;

pub use list::{Hyperlink, List};
pub use table::Table;

/// Heading depth supported by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `#`
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
}

impl HeadingLevel {
    const fn marker(self) -> &'static str {
        match self {
            Self::H1 => "#",
            Self::H2 => "##",
            Self::H3 => "###",
        }
    }
}

/// A single structural element of a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# text`, `## text` or `### text`.
    Heading(HeadingLevel, String),
    /// Free text followed by a blank line.
    Paragraph(String),
    /// Fenced code block without a language tag.
    Code(String),
    /// Bulleted list.
    List(List),
    /// Pipe table.
    Table(Table),
}

impl Block {
    /// Builds a level-one heading.
    #[must_use]
    pub fn h1(text: impl Into<String>) -> Self {
        Self::Heading(HeadingLevel::H1, text.into())
    }

    /// Builds a level-two heading.
    #[must_use]
    pub fn h2(text: impl Into<String>) -> Self {
        Self::Heading(HeadingLevel::H2, text.into())
    }

    /// Builds a level-three heading.
    #[must_use]
    pub fn h3(text: impl Into<String>) -> Self {
        Self::Heading(HeadingLevel::H3, text.into())
    }

    /// Builds a paragraph.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    /// Builds a fenced code block.
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::Code(text.into())
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(level, text) => write!(f, "{} {text}\n\n", level.marker()),
            Self::Paragraph(text) => write!(f, "{text}\n\n"),
            Self::Code(text) => write!(f, "```\n{text}\n```\n\n"),
            Self::List(list) => fmt::Display::fmt(list, f),
            Self::Table(table) => fmt::Display::fmt(table, f),
        }
    }
}

/// Ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block and returns the document for chaining.
    pub fn push(&mut self, block: impl Into<Block>) -> &mut Self {
        self.blocks.push(block.into());
        self
    }

    /// Appends every block of `other`, preserving their order.
    pub fn append(&mut self, other: Self) -> &mut Self {
        self.blocks.extend(other.blocks);
        self
    }

    /// Blocks in insertion order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.blocks
            .iter()
            .try_for_each(|block| fmt::Display::fmt(block, f))
    }
}
