//! Interpretation of the tables on a season page.
//!
//! ### Goalscorer table
//! - `select`: picks the table by header keywords
//! - `span`: carries placement and goals into rows covered by a row span
//! - `extract`: chooses the text of one cell (nationality, link count, hidden padding)
//! - `assemble`: zips a row's values against the fixed output columns
//!
//! ### Standings table
//! - `standings`: a plain grid read against its own header row

pub mod assemble;
pub mod extract;
pub mod model;
pub mod select;
pub mod span;
pub mod standings;
pub mod topscorers;

pub use assemble::{assemble, is_note_row};
pub use extract::{ColumnRole, Extracted, extract, strip_leading_zeros};
pub use model::{Cell, CellKind, Marker, Row, Table, parse_tables, table_selector};
pub use select::HeaderMatcher;
pub use span::{Carried, RowSpanTracker, SpanState};
pub use standings::{parse_standings, standings_headers};
pub use topscorers::TopscorerParser;
