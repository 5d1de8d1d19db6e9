//! Standings table parsing.
//!
//! The standings table is a regular grid: one header row, then one data
//! cell per column in every team row.

use bundesliga_core::Record;

use super::assemble::assemble;
use super::model::{Cell, Table};

/// Column labels of the header row: each header cell's `title`, or its text.
pub fn standings_headers(table: &Table) -> Vec<String> {
    table
        .header_row()
        .map(|row| {
            row.cells
                .iter()
                .filter(|c| c.is_header())
                .map(|c| c.title.clone().unwrap_or_else(|| c.text()))
                .collect()
        })
        .unwrap_or_default()
}

pub fn parse_standings(table: &Table) -> Vec<Record> {
    let headers = standings_headers(table);

    let records: Vec<Record> = table
        .data_rows()
        .filter_map(|row| {
            let values: Vec<String> = row.data_cells().map(Cell::text).collect();
            (!values.is_empty()).then(|| assemble(&values, &headers))
        })
        .collect();

    tracing::debug!("parsed {} standings rows under {} headers", records.len(), headers.len());
    records
}
