//! WHODAS 2.0 36-item instrument: domain layout and recode classes.
//!
//! Domain 5 is split into household activities (`Do51`, always scored) and
//! remunerated work (`Do52`, scored only on request). The 32-item total
//! excludes the work items; the 36-item total adds them back.

use crate::scoring::{Domain, DomainId, RecodeClass};

pub const INSTRUMENT_NAME: &str = "WHODAS 2.0";

pub const OVERALL_32_COLUMN: &str = "st_s32";
pub const OVERALL_36_COLUMN: &str = "st_s36";
pub const OVERALL_32_MAX: u32 = 92;
pub const OVERALL_36_MAX: u32 = 106;

/// Items scored with the compressed 0, 1, 1, 2, 2 mapping. Everything else
/// uses the general mapping.
pub const SPECIFIC_ITEMS: [&str; 19] = [
    "D1_5", "D1_6", "D2_2", "D2_3", "D3_1", "D3_3", "D3_4", "D4_1", "D4_2", "D4_3", "D4_5",
    "D5_2", "D5_3", "D5_5", "D5_8", "D6_1", "D6_3", "D6_6", "D6_8",
];

pub static DOMAINS: [Domain; 7] = [
    Domain {
        id: DomainId::Cognition,
        column: "Do1",
        name: "Cognition",
        items: &["D1_1", "D1_2", "D1_3", "D1_4", "D1_5", "D1_6"],
        max_raw: 20,
    },
    Domain {
        id: DomainId::Mobility,
        column: "Do2",
        name: "Mobility",
        items: &["D2_1", "D2_2", "D2_3", "D2_4", "D2_5"],
        max_raw: 16,
    },
    Domain {
        id: DomainId::SelfCare,
        column: "Do3",
        name: "Self-care",
        items: &["D3_1", "D3_2", "D3_3", "D3_4"],
        max_raw: 10,
    },
    Domain {
        id: DomainId::GettingAlong,
        column: "Do4",
        name: "Getting along",
        items: &["D4_1", "D4_2", "D4_3", "D4_4", "D4_5"],
        max_raw: 12,
    },
    Domain {
        id: DomainId::LifeActivitiesHousehold,
        column: "Do51",
        name: "Life activities (household)",
        items: &["D5_2", "D5_3", "D5_4", "D5_5"],
        max_raw: 10,
    },
    Domain {
        id: DomainId::LifeActivitiesWork,
        column: "Do52",
        name: "Life activities (work)",
        items: &["D5_8", "D5_9", "D5_10", "D5_11"],
        max_raw: 14,
    },
    Domain {
        id: DomainId::Participation,
        column: "Do6",
        name: "Participation",
        items: &["D6_1", "D6_2", "D6_3", "D6_4", "D6_5", "D6_6", "D6_7", "D6_8"],
        max_raw: 24,
    },
];

pub fn recode_class(item: &str) -> RecodeClass {
    if SPECIFIC_ITEMS.contains(&item) {
        RecodeClass::Specific
    } else {
        RecodeClass::General
    }
}

/// Domains scored under the given work-item setting, in output order.
pub fn domains(include_work_items: bool) -> impl Iterator<Item = &'static Domain> {
    DOMAINS
        .iter()
        .filter(move |d| include_work_items || !d.is_work())
}

/// The 32 (or 36) item columns the scorer needs, in catalogue order.
pub fn required_items(include_work_items: bool) -> Vec<&'static str> {
    domains(include_work_items)
        .flat_map(|d| d.items.iter().copied())
        .collect()
}

/// Score columns written to the output table, in order.
pub fn output_columns(include_work_items: bool) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = domains(include_work_items).map(|d| d.column).collect();
    columns.push(OVERALL_32_COLUMN);
    if include_work_items {
        columns.push(OVERALL_36_COLUMN);
    }
    columns
}

/// Display name for a score column.
pub fn column_name(column: &str) -> Option<&'static str> {
    match column {
        OVERALL_32_COLUMN => Some("Overall (32 items)"),
        OVERALL_36_COLUMN => Some("Overall (36 items)"),
        _ => DOMAINS.iter().find(|d| d.column == column).map(|d| d.name),
    }
}
