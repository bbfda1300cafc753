// SPDX-License-Identifier: Apache-2.0

use crate::LoadError;
use std::fs::File;
use std::path::Path;
use tokenize_model::{
    Component, ComponentRow, COMPONENTS_HEADER, MAIN_TYPE_HEADER, SUB_TYPE_HEADER,
};

/// Reads the delimited source file once and produces the ordered catalog.
///
/// Columns are resolved by header label, not position. A column absent from
/// the header (or a field absent from a short row) yields an empty string.
/// Rows repeating the header label in the `Main Type` field are dropped, and
/// ids enumerate emitted rows only, starting at 1.
pub fn load_components(path: &Path) -> Result<Vec<Component>, LoadError> {
    let file = File::open(path).map_err(LoadError::Io)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let main_type_col = column_index(&headers, MAIN_TYPE_HEADER);
    let sub_type_col = column_index(&headers, SUB_TYPE_HEADER);
    let components_col = column_index(&headers, COMPONENTS_HEADER);

    let mut out = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = ComponentRow {
            main_type: field(&record, main_type_col),
            sub_type: field(&record, sub_type_col),
            components: field(&record, components_col),
        };
        if row.is_stray_header() {
            continue;
        }
        let id = out.len() as u32 + 1;
        out.push(row.into_component(id));
    }

    Ok(out)
}

fn column_index(headers: &csv::StringRecord, label: &str) -> Option<usize> {
    headers.iter().position(|h| h == label)
}

fn field(record: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|i| record.get(i))
        .unwrap_or("")
        .to_string()
}
