//! Normalized sampler table.

/// Maximum number of data rows kept after the header.
pub const MAX_TABLE_ROWS: usize = 49;

/// Marker `sadf -d` puts in front of the header line.
const HEADER_MARKER: &str = "# ";

/// Column names plus rows, every row exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StatTable {
    /// Parses semicolon-delimited output. The first line is the header,
    /// at most [`MAX_TABLE_ROWS`] following lines become rows.
    pub fn parse_delimited(output: &str) -> Self {
        let mut lines = output.lines();
        let Some(header) = lines.next() else {
            return Self::default();
        };

        let header = header.strip_prefix(HEADER_MARKER).unwrap_or(header);
        let columns: Vec<String> = split_fields(header);
        let width = columns.len();

        let rows = lines
            .take(MAX_TABLE_ROWS)
            .map(|line| {
                let mut row = split_fields(line);
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Single-cell table used to surface a message in place of data.
    pub fn message(column: &str, text: impl Into<String>) -> Self {
        Self {
            columns: vec![column.to_string()],
            rows: vec![vec![text.into()]],
        }
    }

    /// Returns `true` when at least one data row is present.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Returns `true` when not even a header was produced.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(';').map(str::to_string).collect()
}
