//! Bulk-lead spreadsheet parsing. Columns are matched by header name, not by
//! position, and missing cells default to empty strings; the header set
//! mirrors the sheet the sales team actually exports, irregular spellings
//! included.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// One imported row, serialized to the batch-update endpoint's field names.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadImportRow {
    pub S_No: String,
    pub created_time: String,
    pub what_type_of_your_wedding: String,
    pub choose_your_package: String,
    pub enter_your_contact_number: String,
    pub enter_your_wedding_location: String,
    pub enter_event_date_month: String,
    pub Phone_number: String,
    pub E_mail: String,
    pub full_name: String,
    pub Lead_followed_by_Client: String,
    pub Status1: String,
}

/// Sheet header -> setter for the row field it feeds.
const COLUMNS: &[(&str, fn(&mut LeadImportRow, String))] = &[
    ("S_No", |r, v| r.S_No = v),
    ("created_time", |r, v| r.created_time = v),
    ("what_type_of_your_wedding?", |r, v| {
        r.what_type_of_your_wedding = v
    }),
    ("choose_your_package?", |r, v| r.choose_your_package = v),
    ("enter_your_contact_number", |r, v| {
        r.enter_your_contact_number = v
    }),
    ("enter_your_wedding_location", |r, v| {
        r.enter_your_wedding_location = v
    }),
    ("enter_event_date_&_month", |r, v| {
        r.enter_event_date_month = v
    }),
    ("Phone_number", |r, v| r.Phone_number = v),
    ("E_mail", |r, v| r.E_mail = v),
    ("full_name", |r, v| r.full_name = v),
    ("Lead follwed by Client", |r, v| {
        r.Lead_followed_by_Client = v
    }),
    ("Status 1", |r, v| r.Status1 = v),
];

/// Reads CSV rows, matching columns by header name. Unknown columns are
/// ignored; known columns missing from the sheet stay empty.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<LeadImportRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut index: HashMap<usize, fn(&mut LeadImportRow, String)> = HashMap::new();
    for (pos, header) in headers.iter().enumerate() {
        let name = header.trim();
        if let Some((_, set)) = COLUMNS.iter().find(|(col, _)| *col == name) {
            index.insert(pos, *set);
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = LeadImportRow::default();
        for (pos, set) in &index {
            if let Some(cell) = record.get(*pos) {
                set(&mut row, cell.trim().to_string());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
