pub use crate::config::*;

/// A builder for assembling a table row by row.
///
/// Readers should use the builder rather than constructing a [`Table`] directly.
///
/// ```
/// pub use mbti_study::builder::TableBuilder;
/// pub use mbti_study::Cell;
///
/// let mut builder = TableBuilder::new(&["Country", "INTJ", "INTP"]);
///
/// builder.add_row(vec![Cell::Text("A".to_string()), Cell::Number(10.0)]);
///
/// let table = builder.build();
/// assert_eq!(table.rows[0][2], Cell::Empty);
/// ```
pub struct TableBuilder {
    pub(crate) _headers: Vec<String>,
    pub(crate) _rows: Vec<Vec<Cell>>,
}

impl TableBuilder {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> TableBuilder {
        TableBuilder {
            _headers: headers.iter().map(|s| s.as_ref().to_string()).collect(),
            _rows: Vec::new(),
        }
    }

    /// Adds a row.
    ///
    /// Rows shorter than the header are padded with empty cells, and the cells
    /// beyond the header are dropped.
    pub fn add_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self._headers.len(), Cell::Empty);
        self._rows.push(cells);
    }

    /// Adds a row of text cells. This is the simplest use case for tests.
    pub fn add_row_simple(&mut self, cells: &[&str]) {
        self.add_row(cells.iter().map(|s| Cell::parse(s)).collect())
    }

    pub fn num_rows(&self) -> usize {
        self._rows.len()
    }

    pub fn build(self) -> Table {
        Table {
            headers: self._headers,
            rows: self._rows,
        }
    }
}
