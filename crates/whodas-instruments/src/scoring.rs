use serde::{Deserialize, Serialize};
use ts_rs::TS;
use whodas_core::Response;

/// How a raw response level is turned into an item score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecodeClass {
    /// Identity mapping: 0, 1, 2, 3, 4.
    General,
    /// Compressed mapping: 0, 1, 1, 2, 2.
    Specific,
}

impl RecodeClass {
    const GENERAL: [u32; 5] = [0, 1, 2, 3, 4];
    const SPECIFIC: [u32; 5] = [0, 1, 1, 2, 2];

    /// Item score for a response, `None` when the response is missing.
    pub fn recode(self, response: Response) -> Option<u32> {
        let table = match self {
            RecodeClass::General => &Self::GENERAL,
            RecodeClass::Specific => &Self::SPECIFIC,
        };
        response.ordinal().map(|idx| table[idx])
    }

    pub fn max_item_score(self) -> u32 {
        match self {
            RecodeClass::General => 4,
            RecodeClass::Specific => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DomainId {
    Cognition,
    Mobility,
    SelfCare,
    GettingAlong,
    LifeActivitiesHousehold,
    LifeActivitiesWork,
    Participation,
}

/// A scored domain: its items, output column and fixed rescaling maximum.
#[derive(Debug, Clone, Copy)]
pub struct Domain {
    pub id: DomainId,
    pub column: &'static str,
    pub name: &'static str,
    pub items: &'static [&'static str],
    /// Largest attainable raw sum. Fixed, never derived from data.
    pub max_raw: u32,
}

impl Domain {
    pub fn is_work(&self) -> bool {
        self.id == DomainId::LifeActivitiesWork
    }
}

/// Scoring parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOptions {
    /// Score the remunerated-work items (`Do52`) and the 36-item total.
    #[serde(default)]
    pub include_work_items: bool,
}

/// One rescaled score for one output column. `value` is `None` when an
/// item contributing to the sum was not answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub column: String,
    pub value: Option<f64>,
}

/// The domain and overall scores of one respondent, in output column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryScores {
    pub entries: Vec<ScoreEntry>,
}

impl SummaryScores {
    pub fn push(&mut self, column: &str, value: Option<f64>) {
        self.entries.push(ScoreEntry {
            column: column.to_string(),
            value,
        });
    }

    /// Score of a column; `None` if the column was not produced or is missing.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.entry(column).and_then(|e| e.value)
    }

    pub fn entry(&self, column: &str) -> Option<&ScoreEntry> {
        self.entries.iter().find(|e| e.column == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entry(column).is_some()
    }
}

/// Map a raw sum onto 0–100 against its fixed maximum.
pub fn rescale(raw: u32, max_raw: u32) -> f64 {
    f64::from(raw) * 100.0 / f64::from(max_raw)
}
