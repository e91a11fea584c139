use whodas_core::{Cell, Table};
use whodas_instruments::summary::render_summary;
use whodas_instruments::{score, score_rows, ScoreOptions};

/// Column used to label respondents in the Markdown summary.
const ID_COLUMN: &str = "id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Input records with score fields added.
    #[default]
    Json,
    /// One summary block per respondent.
    Markdown,
}

/// Score `table` and render the result in `format`.
pub fn render(table: &Table, options: &ScoreOptions, format: OutputFormat) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => {
            let scored = score(table, options)?;
            tracing::info!(respondents = scored.len(), "scored respondents");
            Ok(serde_json::to_string_pretty(&scored.to_records())?)
        }
        OutputFormat::Markdown => {
            let scores = score_rows(table, options)?;
            tracing::info!(respondents = scores.len(), "scored respondents");
            let blocks: Vec<String> = scores
                .iter()
                .enumerate()
                .map(|(row, s)| render_summary(&respondent_label(table, row), s))
                .collect();
            Ok(blocks.join("\n"))
        }
    }
}

fn respondent_label(table: &Table, row: usize) -> String {
    match table.cell(row, ID_COLUMN) {
        Some(Cell::Text(id)) => id.clone(),
        Some(Cell::Number(id)) => id.to_string(),
        _ => format!("row {}", row + 1),
    }
}
