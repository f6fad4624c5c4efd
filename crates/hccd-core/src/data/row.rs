use csv::StringRecord;

/// One data record, keyed by header column name in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Build a row from `(column, value)` pairs
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Pair a record with the header, padding missing trailing cells with
    /// empty strings and dropping cells beyond the header width
    pub(crate) fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, column)| (column.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        Self { cells }
    }

    /// Value of `column`; the first one wins if the header repeats a name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
