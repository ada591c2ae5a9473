//! Column alignment for tab-separated text.
//!
//! Every cell terminated by a tab is padded with spaces to the width of the
//! widest cell in its column plus [`PADDING`], and never narrower than
//! [`MIN_WIDTH`]. The text after the last tab of a line is written as is.
//! Widths are measured in terminal columns, so wide characters line up.

use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: usize = 20;
pub const PADDING: usize = 3;

/// Buffers tab-separated lines and aligns them once everything has been seen.
#[derive(Debug, Clone)]
pub struct TabWriter {
    min_width: usize,
    padding: usize,
    buffer: String,
}

impl Default for TabWriter {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            padding: PADDING,
            buffer: String::new(),
        }
    }
}

impl TabWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Produces the aligned text.
    pub fn render(&self) -> String {
        if self.buffer.is_empty() {
            return String::new();
        }
        let ends_with_newline = self.buffer.ends_with('\n');
        let body = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);

        let rows: Vec<Vec<&str>> = body.split('\n').map(|l| l.split('\t').collect()).collect();
        let widths = self.column_widths(&rows);

        let mut out = String::with_capacity(self.buffer.len());
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let last = row.len() - 1;
            for (col, cell) in row.iter().enumerate() {
                out.push_str(cell);
                if col < last {
                    let fill = widths[col].saturating_sub(cell.width());
                    out.extend(std::iter::repeat(' ').take(fill));
                }
            }
        }
        if ends_with_newline {
            out.push('\n');
        }
        out
    }

    fn column_widths(&self, rows: &[Vec<&str>]) -> Vec<usize> {
        let columns = rows.iter().map(|r| r.len() - 1).max().unwrap_or(0);
        let mut widths = vec![self.min_width; columns];
        for row in rows {
            for (col, cell) in row.iter().take(row.len() - 1).enumerate() {
                widths[col] = widths[col].max(cell.width() + self.padding);
            }
        }
        widths
    }
}
