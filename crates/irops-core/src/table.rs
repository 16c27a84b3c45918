//! Tabular values exchanged between the query, fallback, and shaping layers.
//!
//! A [`ResultTable`] is the neutral form both data sources produce: ordered
//! named columns over rows of scalar [`Cell`]s. A [`PresentationTable`] is
//! what the shaper hands to the front end: display headers over rows of
//! ready-to-print strings. Tables are built for one render and discarded.

use serde::{Deserialize, Serialize};

/// A single scalar value in a result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the integral value of a numeric cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(v.round() as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Natural display form: empty string for `Null`, one decimal for
    /// floats, everything else verbatim.
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{v:.1}"),
            Self::Text(v) => v.clone(),
        }
    }
}

/// An ordered set of named columns over rows of scalar cells.
///
/// Invariant: every row has exactly one cell per column, in column order.
/// Tables are built either by decoding a live query response or from the
/// fixed fallback data, and both sources expose identical column sets per
/// query site, so downstream shaping never needs to know the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table from column names and pre-built rows.
    pub fn from_rows(columns: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Appends a row. The row must match the column arity.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has zero rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column name), if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

/// A display-ready table: fixed headers over rows of rendered strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl PresentationTable {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_by_name() {
        let table = ResultTable::from_rows(
            &["HUB", "FLIGHTS"],
            vec![
                vec![Cell::Text("ATL".into()), Cell::Int(342)],
                vec![Cell::Text("DTW".into()), Cell::Int(156)],
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, "HUB"), Some(&Cell::Text("DTW".into())));
        assert_eq!(table.cell(0, "FLIGHTS"), Some(&Cell::Int(342)));
        assert_eq!(table.cell(0, "MISSING"), None);
        assert_eq!(table.cell(5, "HUB"), None);
    }

    #[test]
    fn cell_render_forms() {
        assert_eq!(Cell::Null.render(), "");
        assert_eq!(Cell::Int(95).render(), "95");
        assert_eq!(Cell::Float(82.4).render(), "82.4");
        assert_eq!(Cell::Float(85.0).render(), "85.0");
        assert_eq!(Cell::Text("PH1234".into()).render(), "PH1234");
    }

    #[test]
    fn numeric_accessors() {
        assert_eq!(Cell::Int(23).as_i64(), Some(23));
        assert_eq!(Cell::Float(34.6).as_i64(), Some(35));
        assert_eq!(Cell::Text("23".into()).as_i64(), None);
        assert_eq!(Cell::Int(85).as_f64(), Some(85.0));
    }
}
