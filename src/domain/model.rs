use csv::StringRecord;

/// How rows are labelled in the leading index column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexColumn {
    /// No index column in the input; rows are labelled by zero-based position.
    Positional,
    /// The input's first header cell is empty and its values are kept as labels.
    Carried,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Original row identity, written as the first output field.
    pub index: String,
    /// Data fields in header order, untouched.
    pub fields: StringRecord,
}

#[derive(Debug, Clone)]
pub struct Table {
    /// Data column names. Never includes the index column.
    pub headers: StringRecord,
    pub index: IndexColumn,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FilterResult {
    pub headers: StringRecord,
    pub retained: Vec<Row>,
    pub total_rows: usize,
    /// Rows dropped because the year cell held a missing-value token.
    pub missing_years: usize,
}
