use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("row has {actual} cells but the table has {expected} columns")]
    RowWidth { expected: usize, actual: usize },

    #[error("column '{column}' has {actual} cells but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("record {0} is not a JSON object")]
    NotAnObject(usize),
}
