//! Bulleted lists and inline hyperlinks.

use std::fmt;

/// Bulleted list whose items render as `* item` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    items: Vec<String>,
}

impl List {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item and returns the list for chaining.
    pub fn add(&mut self, item: impl Into<String>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "* {item}")?;
        }
        f.write_str("\n")
    }
}

/// Inline `[text](url)` link. Renders without a trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hyperlink {
    /// Visible link text.
    pub text: String,
    /// Link target.
    pub url: String,
}

impl Hyperlink {
    /// Creates a link from its text and target.
    #[must_use]
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Hyperlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({})", self.text, self.url)
    }
}
