//! whodas-core
//!
//! Pure data types shared by the WHODAS 2.0 crates: response categories,
//! table cells, and the in-memory respondent table. No I/O.

pub mod error;
pub mod response;
pub mod table;

pub use error::CoreError;
pub use response::Response;
pub use table::{Cell, Table};
