use std::collections::HashMap;

use whodas_core::{Cell, Response, Table};

use crate::error::MissingColumnsError;
use crate::scoring::{rescale, Domain, ScoreOptions, SummaryScores};
use crate::whodas2::{self, OVERALL_32_COLUMN, OVERALL_32_MAX, OVERALL_36_COLUMN, OVERALL_36_MAX};

/// Raw responses of one respondent, keyed by item name (`D1_1` …).
/// Items never set read as `Response::Missing`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemResponses {
    responses: HashMap<String, Response>,
}

impl ItemResponses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, item: impl Into<String>, response: Response) {
        self.responses.insert(item.into(), response);
    }

    pub fn get(&self, item: &str) -> Response {
        self.responses
            .get(item)
            .copied()
            .unwrap_or(Response::Missing)
    }

    /// The same response for every item of the instrument, work items included.
    pub fn uniform(response: Response) -> Self {
        whodas2::required_items(true)
            .into_iter()
            .map(|item| (item.to_string(), response))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Response)> for ItemResponses {
    fn from_iter<I: IntoIterator<Item = (S, Response)>>(iter: I) -> Self {
        Self {
            responses: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Raw sum of a domain's recoded items. Any missing item makes the sum missing.
fn domain_raw_sum(domain: &Domain, responses: &ItemResponses) -> Option<u32> {
    domain.items.iter().try_fold(0u32, |sum, item| {
        whodas2::recode_class(item)
            .recode(responses.get(item))
            .map(|score| sum + score)
    })
}

/// Score one respondent.
///
/// Produces every domain score, then `st_s32`, then (with work items)
/// `st_s36`, all rescaled to 0–100.
pub fn score_responses(responses: &ItemResponses, options: &ScoreOptions) -> SummaryScores {
    let mut scores = SummaryScores::default();
    let mut core_total = Some(0u32);
    let mut work_raw = None;

    for domain in whodas2::domains(options.include_work_items) {
        let raw = domain_raw_sum(domain, responses);
        scores.push(domain.column, raw.map(|r| rescale(r, domain.max_raw)));
        if domain.is_work() {
            work_raw = raw;
        } else {
            core_total = core_total.zip(raw).map(|(total, r)| total + r);
        }
    }

    scores.push(
        OVERALL_32_COLUMN,
        core_total.map(|r| rescale(r, OVERALL_32_MAX)),
    );
    if options.include_work_items {
        let full_total = core_total.zip(work_raw).map(|(total, r)| total + r);
        scores.push(
            OVERALL_36_COLUMN,
            full_total.map(|r| rescale(r, OVERALL_36_MAX)),
        );
    }
    scores
}

/// Score every respondent of `table`, one `SummaryScores` per row.
///
/// Fails before reading any row if a required item column is absent.
pub fn score_rows(
    table: &Table,
    options: &ScoreOptions,
) -> Result<Vec<SummaryScores>, MissingColumnsError> {
    let required = whodas2::required_items(options.include_work_items);

    let missing: Vec<String> = required
        .iter()
        .filter(|item| !table.has_column(item))
        .map(|item| item.to_string())
        .collect();
    if !missing.is_empty() {
        tracing::warn!(count = missing.len(), "input table lacks required item columns");
        return Err(MissingColumnsError { missing });
    }

    tracing::debug!(
        rows = table.len(),
        include_work_items = options.include_work_items,
        "scoring WHODAS 2.0 responses"
    );

    let positions: Vec<(&str, usize)> = required
        .iter()
        .filter_map(|item| table.column_index(item).map(|idx| (*item, idx)))
        .collect();

    let scored = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let responses: ItemResponses = positions
                .iter()
                .map(|(item, idx)| (*item, read_response(row_idx, item, &row[*idx])))
                .collect();
            score_responses(&responses, options)
        })
        .collect();
    Ok(scored)
}

/// Score every respondent of `table`.
///
/// Returns a copy of the table with the domain and overall score columns
/// appended, or overwritten in place when already present. The input is
/// left untouched and no partial result is produced on error.
pub fn score(table: &Table, options: &ScoreOptions) -> Result<Table, MissingColumnsError> {
    let scored = score_rows(table, options)?;

    let mut output = table.clone();
    for column in whodas2::output_columns(options.include_work_items) {
        output.fill_column(column, |row| Cell::from(scored[row].get(column)));
    }
    Ok(output)
}

fn read_response(row: usize, item: &str, cell: &Cell) -> Response {
    Response::from_cell(cell).unwrap_or_else(|err| {
        tracing::warn!(row, item, %err, "treating unrecognized response as missing");
        Response::Missing
    })
}
