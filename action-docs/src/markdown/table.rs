//! Pipe tables with deterministic row ordering.
//!
//! Cells are written verbatim. A `|` inside a cell is not escaped and will
//! split the cell when the Markdown is rendered.

use std::fmt;

/// Header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column titles and no rows.
    #[must_use]
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    pub fn add_row<I, S>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Stable-sorts the data rows by the cell at `column`, comparing bytes.
    ///
    /// Rows too short to have that column sort as if the cell were empty.
    pub fn sort_by_column(&mut self, column: usize) -> &mut Self {
        self.rows.sort_by(|left, right| {
            let left_cell = left.get(column).map_or("", String::as_str);
            let right_cell = right.get(column).map_or("", String::as_str);
            left_cell.as_bytes().cmp(right_cell.as_bytes())
        });
        self
    }

    /// Column titles.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows in their current order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, &self.header)?;
        f.write_str("|")?;
        for _ in &self.header {
            f.write_str("---|")?;
        }
        f.write_str("\n")?;
        for row in &self.rows {
            write_row(f, row)?;
        }
        f.write_str("\n")
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String]) -> fmt::Result {
    f.write_str("|")?;
    for cell in cells {
        write!(f, "{cell}|")?;
    }
    f.write_str("\n")
}
