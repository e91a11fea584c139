use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::CoreError;

/// The value of one field for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
    /// Booleans, arrays and objects, carried through unchanged.
    Other(Value),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Missing, Cell::Number)
    }
}

/// In-memory respondent table: named columns, one row per respondent.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), CoreError> {
        if row.len() != self.columns.len() {
            return Err(CoreError::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// All cells of a column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Append a column, or replace the cells of an existing one in place.
    pub fn set_column(&mut self, name: &str, cells: Vec<Cell>) -> Result<(), CoreError> {
        if cells.len() != self.rows.len() {
            return Err(CoreError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                actual: cells.len(),
            });
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row[idx] = cell;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row.push(cell);
                }
            }
        }
        Ok(())
    }

    /// Compute one cell per row and store the result as `name`, appending
    /// the column or overwriting it in place.
    pub fn fill_column<F>(&mut self, name: &str, mut cell_for_row: F)
    where
        F: FnMut(usize) -> Cell,
    {
        let idx = self.column_index(name);
        if idx.is_none() {
            self.columns.push(name.to_string());
        }
        for (row_idx, row) in self.rows.iter_mut().enumerate() {
            let cell = cell_for_row(row_idx);
            match idx {
                Some(i) => row[i] = cell,
                None => row.push(cell),
            }
        }
    }

    /// Build a table from JSON objects, one per respondent.
    ///
    /// Columns appear in first-seen order. A key absent from a record is
    /// stored as `Cell::Missing` for that row; booleans, arrays and objects
    /// are kept as `Cell::Other`.
    pub fn from_records(records: &[Value]) -> Result<Self, CoreError> {
        let mut columns: Vec<String> = Vec::new();
        let mut objects = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or(CoreError::NotAnObject(i))?;
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
            objects.push(object);
        }

        let mut table = Table::new(columns);
        for object in objects {
            let row = table
                .columns
                .iter()
                .map(|column| object.get(column).map_or(Cell::Missing, cell_from_json))
                .collect();
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Parse a JSON array of respondent objects.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    /// One JSON object per row. Non-finite numbers are written as `null`.
    pub fn to_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| (column.clone(), cell_to_json(cell)))
                    .collect();
                Value::Object(object)
            })
            .collect()
    }
}

fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Missing,
        Value::String(s) => Cell::Text(s.clone()),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| Cell::Other(value.clone()), Cell::Number),
        other => Cell::Other(other.clone()),
    }
}

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Missing => Value::Null,
        Cell::Text(s) => Value::String(s.clone()),
        Cell::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Other(value) => value.clone(),
    }
}
