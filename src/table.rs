//! Row-oriented display table.
//!
//! The normalizer's output: ordered column names plus rows of
//! column-to-string mappings. Rendering is plain fixed-width text for
//! the terminal; styling is the presentation layer's problem.

use std::collections::HashMap;

/// An ordered table of display strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<HashMap<String, String>>,
}

impl Table {
    /// Build a table from column order and rows.
    pub fn new(columns: Vec<String>, rows: Vec<HashMap<String, String>>) -> Self {
        Self { columns, rows }
    }

    /// Column names, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, each mapping column name to display string. A row may lack
    /// a column; it renders blank there.
    pub fn rows(&self) -> &[HashMap<String, String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as fixed-width text with a header rule.
    pub fn format(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                let cells = self.rows.iter().filter_map(|row| row.get(col));
                cells
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let total_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &width)| format!("{:<width$}", col))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        out.push_str(&"─".repeat(total_width));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, &width)| {
                    let cell = row.get(col).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell)
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_aligns_columns() {
        let table = Table::new(
            vec!["mode".into(), "estimated_cost".into(), "duration".into()],
            vec![
                row(&[
                    ("mode", "flight"),
                    ("estimated_cost", "INR 3000 - 5000"),
                    ("duration", "2 hours"),
                ]),
                row(&[
                    ("mode", "bus"),
                    ("estimated_cost", "INR 800 - 1200"),
                    ("duration", "8-10 hours"),
                ]),
            ],
        );

        let rendered = table.format();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("mode"));
        assert!(lines[1].chars().all(|c| c == '─'));
        assert!(lines[2].contains("INR 3000 - 5000"));
        // Cells in one column start at the same offset
        assert_eq!(
            lines[2].find("INR 3000 - 5000"),
            lines[3].find("INR 800 - 1200")
        );
    }

    #[test]
    fn test_missing_cell_renders_blank() {
        let table = Table::new(
            vec!["mode".into(), "operator".into()],
            vec![
                row(&[("mode", "cab")]),
                row(&[("mode", "train"), ("operator", "Telangana Express")]),
            ],
        );

        let rendered = table.format();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2].trim_end(), "cab");
        assert!(lines[3].contains("Telangana Express"));
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = Table::default();
        assert_eq!(table.format(), "");
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
