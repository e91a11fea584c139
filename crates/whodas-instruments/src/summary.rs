use crate::scoring::SummaryScores;
use crate::whodas2::{column_name, INSTRUMENT_NAME};

/// Format one respondent's scores as structured Markdown for reports.
///
/// Scores are shown with one decimal; unscorable entries read `missing`.
pub fn render_summary(respondent: &str, scores: &SummaryScores) -> String {
    let mut output = format!("## {INSTRUMENT_NAME} ({respondent})\n\n");
    for entry in &scores.entries {
        let name = column_name(&entry.column).unwrap_or(entry.column.as_str());
        let value = match entry.value {
            Some(v) => format!("{v:.1}"),
            None => "missing".to_string(),
        };
        output.push_str(&format!("- {name} ({}): {value}\n", entry.column));
    }
    output
}
