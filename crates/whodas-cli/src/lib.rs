//! whodas-cli
//!
//! Command-line front end: JSON respondent records in, scored records (or a
//! Markdown summary) out.

pub mod config;
pub mod output;
