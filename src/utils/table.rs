//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Column widths measured in terminal cells, so notes with emoji or
    /// CJK text stay aligned.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.text.width());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        out.push_str(header.join(" | ").trim_end());
        out.push('\n');

        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&sep.join("-+-"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| match row.get(i) {
                    Some(Cell {
                        text,
                        color: Some(c),
                    }) => format!("{}{}{}", c, pad(text, *w), RESET),
                    Some(Cell { text, color: None }) => pad(text, *w),
                    None => " ".repeat(*w),
                })
                .collect();
            out.push_str(cells.join(" | ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
