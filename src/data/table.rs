use std::cmp::Ordering;

/// A single data row: the cell display strings plus a visibility flag
/// set by the search filter. Visibility and position are independent —
/// filtering never moves a row, sorting never shows or hides one.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<String>,
    visible: bool,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            visible: true,
        }
    }

    /// Cell text for a column, or "" when the row is ragged and the
    /// column index falls off the end. Never panics.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Lowercased concatenation of all cell text, the haystack the
    /// search filter matches against.
    pub fn search_text(&self) -> String {
        let mut text = String::new();
        for cell in &self.cells {
            text.push_str(&cell.to_lowercase());
            text.push(' ');
        }
        text
    }
}

/// A table as it stands after rendering: a header sequence defining
/// the column order, plus the data rows in display order.
///
/// Cell text is read live from the rows on every sort or filter
/// operation; there is no cached copy of comparison keys.
#[derive(Debug, Clone)]
pub struct TableModel {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TableModel {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows: rows.into_iter().map(Row::new).collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_visible()).count()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Cell text at (row, column), or "" for anything out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows.get(row).map(|r| r.cell(column)).unwrap_or("")
    }

    /// Physically reorder the rows with a stable sort. Visibility
    /// flags travel with their rows.
    pub fn sort_rows_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort_by(|a, b| compare(a, b));
    }
}
