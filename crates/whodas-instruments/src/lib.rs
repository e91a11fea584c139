//! whodas-instruments
//!
//! WHODAS 2.0 simple (additive) scoring. Holds the fixed item catalogue,
//! the item recoding rules, and the scorer that turns a table of raw
//! responses into domain and overall scores on a 0–100 metric.

pub mod error;
pub mod scorer;
pub mod scoring;
pub mod summary;
pub mod whodas2;

pub use error::MissingColumnsError;
pub use scorer::{score, score_responses, score_rows, ItemResponses};
pub use scoring::{ScoreEntry, ScoreOptions, SummaryScores};
