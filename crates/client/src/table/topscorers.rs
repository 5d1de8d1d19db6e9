//! Goalscorer table parsing.
//!
//! Rows are folded one at a time: the span tracker says which values an
//! earlier row carries into this one, each cell is extracted according to
//! its column, carried values are put back where the row left them out, and
//! the result is zipped against the fixed output columns.

use bundesliga_core::{AppConfig, Record};

use super::assemble::{assemble, is_note_row};
use super::extract::{ColumnRole, extract, strip_leading_zeros};
use super::model::{Row, Table};
use super::span::RowSpanTracker;

/// Parser for the goalscorer table, producing one record per player.
#[derive(Debug, Clone)]
pub struct TopscorerParser {
    columns: Vec<String>,
}

impl Default for TopscorerParser {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for TopscorerParser {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.topscorer_columns.clone())
    }
}

impl TopscorerParser {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn parse(&self, table: &Table) -> Vec<Record> {
        let width = table.header_row().map_or(0, Row::width);
        let mut fold = RowFold::default();
        let mut records = Vec::new();

        for (index, row) in table.data_rows().enumerate() {
            if is_note_row(row) {
                tracing::debug!(row = index, "skipping note row");
                continue;
            }

            let values = fold.row_values(row, width, index);
            if values.is_empty() {
                continue;
            }
            records.push(assemble(&values, &self.columns));
        }

        tracing::debug!("parsed {} goalscorer records from {} rows", records.len(), table.rows.len());
        records
    }
}

/// State threaded through the rows of one table.
#[derive(Debug, Default)]
struct RowFold {
    tracker: RowSpanTracker,
    /// Last placement printed or carried, for tied rows that leave it blank.
    last_placement: Option<String>,
}

impl RowFold {
    fn row_values(&mut self, row: &Row, width: usize, index: usize) -> Vec<String> {
        let missing = width.saturating_sub(row.width());
        let (carried_placement, carried_goals) = match self.tracker.carried() {
            Some(_) if missing == 0 => (None, None),
            Some(c) if missing == 1 => match c.placement {
                Some(p) => (Some(p), None),
                None => (None, c.goals),
            },
            Some(c) => (c.placement, c.goals),
            None => (None, None),
        };

        let last = row.cells.len().saturating_sub(1);
        let mut values = Vec::with_capacity(width + 1);
        let mut informative = false;

        if let Some(placement) = &carried_placement {
            self.last_placement = Some(placement.clone());
            values.push(placement.clone());
        }

        for (i, cell) in row.cells.iter().enumerate() {
            let role = if i == 0 && carried_placement.is_none() {
                ColumnRole::Placement
            } else if i == last && carried_goals.is_none() {
                ColumnRole::Goals
            } else {
                ColumnRole::Other
            };

            let extracted = extract(cell, role);
            informative |= extracted.value.is_some() || extracted.nationality.is_some();
            if extracted.ambiguous {
                tracing::warn!(row = index, column = i, "cell has more than two links, using its plain text");
            }

            let value = match (role, extracted.value) {
                (ColumnRole::Placement, None) => {
                    Some(self.last_placement.as_deref().map(strip_leading_zeros).unwrap_or_default())
                }
                (_, value) => value,
            };

            if role == ColumnRole::Placement {
                self.last_placement = value.clone().filter(|v| !v.is_empty());
            }

            self.tracker.declare(role, cell.span, value.as_deref());

            values.extend(extracted.nationality);
            values.extend(value);
        }

        values.extend(carried_goals);

        self.tracker.finish_row();

        if !informative {
            tracing::debug!(row = index, "skipping row without any cell content");
            return Vec::new();
        }
        values
    }
}
