use whodas_core::{Cell, Response, Table};
use whodas_instruments::whodas2::{self, OVERALL_32_MAX, OVERALL_36_MAX};
use whodas_instruments::{
    score, score_responses, score_rows, ItemResponses, MissingColumnsError, ScoreOptions,
};

const CORE: ScoreOptions = ScoreOptions {
    include_work_items: false,
};
const WITH_WORK: ScoreOptions = ScoreOptions {
    include_work_items: true,
};

/// One respondent per entry, every item answered with the given label.
fn uniform_table(levels: &[&str], include_work_items: bool) -> Table {
    let items = whodas2::required_items(include_work_items);
    let mut columns = vec!["id"];
    columns.extend(items.iter().copied());
    let mut table = Table::new(columns);
    for (i, level) in levels.iter().enumerate() {
        let mut row = vec![Cell::Text(format!("r{i}"))];
        row.extend(items.iter().map(|_| Cell::from(*level)));
        table.push_row(row).unwrap();
    }
    table
}

fn number(table: &Table, row: usize, column: &str) -> f64 {
    table
        .cell(row, column)
        .and_then(Cell::as_f64)
        .unwrap_or_else(|| panic!("{column} not numeric in row {row}"))
}

#[test]
fn no_difficulty_scores_zero_everywhere() {
    for options in [CORE, WITH_WORK] {
        let table = uniform_table(&["None"], options.include_work_items);
        let scored = score(&table, &options).unwrap();
        for column in whodas2::output_columns(options.include_work_items) {
            assert_eq!(number(&scored, 0, column), 0.0, "{column}");
        }
    }
}

#[test]
fn extreme_difficulty_scores_hundred_everywhere() {
    for options in [CORE, WITH_WORK] {
        let table = uniform_table(&["Extreme or cannot do"], options.include_work_items);
        let scored = score(&table, &options).unwrap();
        for column in whodas2::output_columns(options.include_work_items) {
            assert_eq!(number(&scored, 0, column), 100.0, "{column}");
        }
    }
}

#[test]
fn output_appends_score_columns_after_inputs() {
    let table = uniform_table(&["Mild", "Severe"], false);
    let scored = score(&table, &CORE).unwrap();
    assert_eq!(scored.len(), 2);
    let appended: Vec<&str> = scored.columns()[table.columns().len()..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(appended, whodas2::output_columns(false));
    assert_eq!(&scored.columns()[..table.columns().len()], table.columns());
    assert!(!scored.has_column("Do52"));
    assert!(!scored.has_column("st_s36"));
}

#[test]
fn work_items_do_not_change_core_scores() {
    let mut table = uniform_table(&["Mild", "Severe", "Moderate"], true);
    let mixed: Vec<Cell> = ["None", "Extreme", "Moderate"]
        .into_iter()
        .map(Cell::from)
        .collect();
    table.set_column("D2_4", mixed.clone()).unwrap();
    table.set_column("D5_9", mixed).unwrap();

    let work_max = whodas2::DOMAINS
        .iter()
        .find(|d| d.column == "Do52")
        .map(|d| d.max_raw)
        .unwrap();

    let core = score(&table, &CORE).unwrap();
    let full = score(&table, &WITH_WORK).unwrap();
    for row in 0..table.len() {
        for column in whodas2::output_columns(false) {
            assert_eq!(number(&core, row, column), number(&full, row, column));
        }

        let s32 = number(&full, row, "st_s32");
        let do52 = number(&full, row, "Do52");
        let s36 = number(&full, row, "st_s36");
        let rebuilt = (s32 * f64::from(OVERALL_32_MAX) + do52 * f64::from(work_max))
            / f64::from(OVERALL_36_MAX);
        assert!((rebuilt - s36).abs() < 1e-9, "row {row}: {rebuilt} vs {s36}");
    }
}

#[test]
fn missing_any_required_column_is_reported_exactly() {
    for options in [CORE, WITH_WORK] {
        for item in whodas2::required_items(options.include_work_items) {
            let full = uniform_table(&["Mild"], options.include_work_items);
            let keep: Vec<&str> = full
                .columns()
                .iter()
                .map(String::as_str)
                .filter(|c| *c != item)
                .collect();
            let mut table = Table::new(keep.iter().copied());
            let row = keep.iter().map(|c| full.cell(0, c).unwrap().clone()).collect();
            table.push_row(row).unwrap();

            let err = score(&table, &options).unwrap_err();
            assert_eq!(
                err,
                MissingColumnsError {
                    missing: vec![item.to_string()]
                }
            );
        }
    }
}

#[test]
fn missing_columns_listed_in_catalogue_order() {
    let table = Table::from_json(r#"[{"id": "r0", "D1_1": "None"}]"#).unwrap();
    let err = score(&table, &WITH_WORK).unwrap_err();
    assert_eq!(err.missing.len(), 35);
    assert_eq!(err.missing.first().map(String::as_str), Some("D1_2"));
    assert_eq!(err.missing.last().map(String::as_str), Some("D6_8"));
    assert!(err.to_string().starts_with("missing required columns: D1_2, D1_3, "));
}

#[test]
fn work_columns_only_required_when_requested() {
    let table = uniform_table(&["Mild"], false);
    assert!(score(&table, &CORE).is_ok());
    let err = score(&table, &WITH_WORK).unwrap_err();
    assert_eq!(err.missing, vec!["D5_8", "D5_9", "D5_10", "D5_11"]);
}

#[test]
fn missing_item_propagates_through_its_domain_and_totals() {
    let mut table = uniform_table(&["Mild", "Mild"], true);
    table
        .set_column("D3_2", vec![Cell::Missing, Cell::from("Mild")])
        .unwrap();
    let scored = score(&table, &WITH_WORK).unwrap();

    assert_eq!(scored.cell(0, "Do3"), Some(&Cell::Missing));
    assert_eq!(scored.cell(0, "st_s32"), Some(&Cell::Missing));
    assert_eq!(scored.cell(0, "st_s36"), Some(&Cell::Missing));
    assert!(number(&scored, 0, "Do1") > 0.0);
    assert!(number(&scored, 0, "Do52") > 0.0);
    assert!(number(&scored, 1, "st_s32") > 0.0);
}

#[test]
fn missing_work_item_leaves_core_total_defined() {
    let mut responses = ItemResponses::uniform(Response::Severe);
    responses.set("D5_10", Response::Missing);
    assert_eq!(responses.get("D5_10"), ItemResponses::new().get("D5_10"));
    let scores = score_responses(&responses, &WITH_WORK);
    assert_eq!(scores.get("Do52"), None);
    assert!(scores.contains("Do52"));
    assert_eq!(scores.get("st_s36"), None);
    assert!(scores.get("st_s32").is_some());
}

#[test]
fn unrecognized_categories_are_treated_as_missing() {
    let mut table = uniform_table(&["None", "None"], false);
    table
        .set_column("D1_1", vec![Cell::from("sometimes"), Cell::Number(3.0)])
        .unwrap();
    let scored = score(&table, &CORE).unwrap();
    assert_eq!(scored.cell(0, "Do1"), Some(&Cell::Missing));
    // Numeric code 3 is "Moderate": general item, recodes to 2 of 20.
    assert_eq!(number(&scored, 1, "Do1"), 10.0);
}

#[test]
fn non_text_values_load_and_score_as_missing() {
    let mut record = serde_json::Map::new();
    for item in whodas2::required_items(false) {
        record.insert(item.to_string(), serde_json::json!("Mild"));
    }
    record.insert("D1_1".to_string(), serde_json::json!(true));
    record.insert("consented".to_string(), serde_json::json!(true));
    let table = Table::from_records(&[serde_json::Value::Object(record)]).unwrap();

    let scored = score(&table, &CORE).unwrap();
    assert_eq!(scored.cell(0, "Do1"), Some(&Cell::Missing));
    assert_eq!(scored.cell(0, "st_s32"), Some(&Cell::Missing));
    assert!(number(&scored, 0, "Do2") > 0.0);
    assert_eq!(
        scored.cell(0, "consented"),
        Some(&Cell::Other(serde_json::json!(true)))
    );
}

#[test]
fn mild_general_and_moderate_specific_score_one_per_item() {
    let responses: ItemResponses = whodas2::required_items(true)
        .into_iter()
        .map(|item| {
            let level = match whodas2::recode_class(item) {
                whodas_instruments::scoring::RecodeClass::General => Response::Mild,
                whodas_instruments::scoring::RecodeClass::Specific => Response::Moderate,
            };
            (item, level)
        })
        .collect();
    let scores = score_responses(&responses, &WITH_WORK);

    assert_eq!(scores.get("Do1"), Some(30.0));
    for domain in whodas2::domains(true) {
        let expected = domain.items.len() as f64 * 100.0 / f64::from(domain.max_raw);
        assert_eq!(scores.get(domain.column), Some(expected), "{}", domain.column);
    }
    assert_eq!(scores.get("st_s32"), Some(32.0 * 100.0 / 92.0));
    assert_eq!(scores.get("st_s36"), Some(36.0 * 100.0 / 106.0));
}

#[test]
fn raising_one_item_never_lowers_scores() {
    let base = ItemResponses::uniform(Response::Mild);
    for item in whodas2::required_items(true) {
        let mut previous = score_responses(&base, &WITH_WORK);
        for level in Response::LEVELS {
            let mut responses = base.clone();
            responses.set(item, level);
            let current = score_responses(&responses, &WITH_WORK);
            if level.ordinal() >= Response::Mild.ordinal() {
                for entry in &current.entries {
                    let before = previous.get(&entry.column).unwrap();
                    let after = entry.value.unwrap();
                    assert!(after >= before, "{item} at {level}: {} fell", entry.column);
                }
                previous = current;
            }
        }
    }
}

#[test]
fn severity_sweep_is_monotonic_from_none() {
    for item in whodas2::required_items(false) {
        let mut previous: Option<f64> = None;
        for level in Response::LEVELS {
            let mut responses = ItemResponses::uniform(Response::None);
            responses.set(item, level);
            let total = score_responses(&responses, &CORE).get("st_s32").unwrap();
            if let Some(before) = previous {
                assert!(total >= before, "{item} at {level}");
            }
            previous = Some(total);
        }
    }
}

#[test]
fn rescoring_output_is_idempotent() {
    let mut table = uniform_table(&["Mild", "Severe", "Moderate"], true);
    table
        .set_column("D6_3", vec![Cell::Missing, Cell::from("None"), Cell::Number(5.0)])
        .unwrap();

    for options in [CORE, WITH_WORK] {
        let once = score(&table, &options).unwrap();
        let twice = score(&once, &options).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn input_table_is_not_modified() {
    let table = uniform_table(&["Severe"], false);
    let before = table.clone();
    let _ = score(&table, &CORE).unwrap();
    assert_eq!(table, before);
}

#[test]
fn empty_table_scores_to_empty_table_with_columns() {
    let table = uniform_table(&[], false);
    let scored = score(&table, &CORE).unwrap();
    assert!(scored.is_empty());
    assert!(scored.has_column("st_s32"));
}

#[test]
fn score_rows_matches_table_output() {
    let table = uniform_table(&["Mild", "Extreme"], true);
    let rows = score_rows(&table, &WITH_WORK).unwrap();
    let scored = score(&table, &WITH_WORK).unwrap();
    for (row, scores) in rows.iter().enumerate() {
        for entry in &scores.entries {
            assert_eq!(scored.cell(row, &entry.column), Some(&Cell::from(entry.value)));
        }
    }
}
