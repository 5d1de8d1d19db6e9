//! Carry-forward state for cells that span several rows.
//!
//! Only the first row of a span carries the cell in the markup, so its
//! placement and goal values are cached here and handed to the rows it
//! covers. A tracker lives for one table parse and is never shared.

use super::extract::{ColumnRole, strip_leading_zeros};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SpanState {
    #[default]
    Idle,
    Spanning {
        /// Rows still covered by the span, the current one included.
        remaining: usize,
        placement: Option<String>,
        goals: Option<String>,
    },
}

/// Values a span hands to a row that does not repeat them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carried {
    pub placement: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RowSpanTracker {
    state: SpanState,
    declared_in_row: bool,
}

impl RowSpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SpanState {
        &self.state
    }

    /// Values carried into the row about to be processed, if a span from an
    /// earlier row still covers it.
    pub fn carried(&self) -> Option<Carried> {
        match &self.state {
            SpanState::Idle => None,
            SpanState::Spanning { placement, goals, .. } => Some(Carried {
                placement: placement.as_deref().map(strip_leading_zeros),
                goals: goals.as_deref().map(strip_leading_zeros),
            }),
        }
    }

    /// Record a cell of the current row that declares `span` rows.
    ///
    /// Placement and goal cells declared in the same row form one span. A
    /// span declared in a later row replaces whatever is being tracked.
    pub fn declare(&mut self, role: ColumnRole, span: usize, value: Option<&str>) {
        if span <= 1 {
            return;
        }
        if role == ColumnRole::Other {
            tracing::debug!(span, "ignoring row span outside the placement and goals columns");
            return;
        }

        let value = value.map(strip_leading_zeros);

        if !self.declared_in_row {
            self.state = SpanState::Spanning { remaining: span, placement: None, goals: None };
            self.declared_in_row = true;
        }

        if let SpanState::Spanning { remaining, placement, goals } = &mut self.state {
            *remaining = (*remaining).max(span);
            match role {
                ColumnRole::Placement => *placement = value,
                ColumnRole::Goals => *goals = value,
                ColumnRole::Other => {}
            }
        }
    }

    /// Close the current row, counting it against the active span.
    pub fn finish_row(&mut self) {
        self.declared_in_row = false;
        if let SpanState::Spanning { remaining, .. } = &mut self.state {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.state = SpanState::Idle;
            }
        }
    }
}
