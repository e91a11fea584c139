use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::table::Cell;

/// An answer to a single WHODAS 2.0 item on the five-level difficulty scale.
///
/// `Missing` is a first-class variant so an unanswered item cannot be
/// mistaken for "no difficulty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Response {
    None,
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Extreme or cannot do", alias = "Extreme")]
    Extreme,
    Missing,
}

/// Text or numeric value that is not one of the five categories.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unrecognized response: {0}")]
pub struct UnrecognizedResponse(pub String);

impl Response {
    /// The answered categories in increasing severity.
    pub const LEVELS: [Response; 5] = [
        Response::None,
        Response::Mild,
        Response::Moderate,
        Response::Severe,
        Response::Extreme,
    ];

    /// Zero-based position on the severity scale, `None` for a missing answer.
    pub fn ordinal(self) -> Option<usize> {
        match self {
            Response::None => Some(0),
            Response::Mild => Some(1),
            Response::Moderate => Some(2),
            Response::Severe => Some(3),
            Response::Extreme => Some(4),
            Response::Missing => None,
        }
    }

    /// Map the questionnaire's numeric coding (1 = none … 5 = extreme).
    pub fn from_code(code: i64) -> Option<Response> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|idx| Self::LEVELS.get(idx).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            Response::None => "None",
            Response::Mild => "Mild",
            Response::Moderate => "Moderate",
            Response::Severe => "Severe",
            Response::Extreme => "Extreme or cannot do",
            Response::Missing => "Missing",
        }
    }

    /// Interpret a table cell as a response.
    ///
    /// Empty cells are `Missing`. Text is parsed as a category label, numbers
    /// as the questionnaire's integer codes. Any other JSON value is rejected.
    pub fn from_cell(cell: &Cell) -> Result<Response, UnrecognizedResponse> {
        match cell {
            Cell::Missing => Ok(Response::Missing),
            Cell::Text(text) => text.parse(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    Self::from_code(*n as i64)
                        .ok_or_else(|| UnrecognizedResponse(n.to_string()))
                } else {
                    Err(UnrecognizedResponse(n.to_string()))
                }
            }
            Cell::Other(value) => Err(UnrecognizedResponse(value.to_string())),
        }
    }
}

impl FromStr for Response {
    type Err = UnrecognizedResponse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "na" | "n/a" | "missing" => Ok(Response::Missing),
            "none" => Ok(Response::None),
            "mild" => Ok(Response::Mild),
            "moderate" => Ok(Response::Moderate),
            "severe" => Ok(Response::Severe),
            "extreme" | "extreme or cannot do" => Ok(Response::Extreme),
            other => other
                .parse::<i64>()
                .ok()
                .and_then(Response::from_code)
                .ok_or_else(|| UnrecognizedResponse(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
