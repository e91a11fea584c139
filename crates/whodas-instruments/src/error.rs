use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The input table lacks item columns the scorer requires.
///
/// `missing` lists the absent names in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("missing required columns: {}", .missing.join(", "))]
pub struct MissingColumnsError {
    pub missing: Vec<String>,
}
