//! Cell value extraction for goalscorer tables.
//!
//! A goalscorer cell may hold a plain value, a player link, or a flag link
//! followed by a name link. Nationality markers are reported separately from
//! the value, and the goals column carries a hidden `0` used for padding
//! that must not reach the count.

use super::model::Cell;

/// Which column of the goalscorer table a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Placement,
    Goals,
    Other,
}

/// What one cell contributes to its row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub value: Option<String>,
    pub nationality: Option<String>,
    /// The cell had more than two links and fell back to its plain text.
    pub ambiguous: bool,
}

/// Extract the value and nationality of `cell`.
///
/// The cell is only read; hidden padding in the goals column is masked from
/// the text view rather than removed.
pub fn extract(cell: &Cell, role: ColumnRole) -> Extracted {
    let mask_hidden = role == ColumnRole::Goals;

    let nationality_marker = cell
        .markers
        .iter()
        .enumerate()
        .find(|(_, m)| !(mask_hidden && m.hidden))
        .filter(|(_, m)| !m.text.is_empty() && !is_numeric(&m.text))
        .map(|(index, m)| (index, m.text.clone()));

    let plain_text = || match &nationality_marker {
        Some((index, _)) => cell.text_without_marker(*index, mask_hidden),
        None if mask_hidden => cell.visible_text(),
        None => cell.text(),
    };

    let (value, ambiguous) = match cell.anchors.as_slice() {
        [] => (plain_text(), false),
        [name] => (name.clone(), false),
        [_flag, name] => (name.clone(), false),
        _ => (plain_text(), true),
    };

    let value = Some(strip_leading_zeros(&value)).filter(|v| !v.is_empty());
    let nationality = nationality_marker.map(|(_, text)| text).filter(|n| Some(n) != value.as_ref());

    Extracted { value, nationality, ambiguous }
}

/// Strip leading zeros from numeric-looking values: `"03"` becomes `"3"`.
///
/// An all-zero value keeps one `0`, other text is returned unchanged, and
/// applying it twice gives the same result as applying it once.
pub fn strip_leading_zeros(value: &str) -> String {
    if !looks_numeric(value) {
        return value.to_string();
    }
    let stripped = value.trim_start_matches('0');
    if stripped.starts_with(|c: char| c.is_ascii_digit()) { stripped.to_string() } else { format!("0{stripped}") }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Digits with optional dots, like `"3"`, `"03"` or `"3."`.
fn looks_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit()) && text.chars().all(|c| c.is_ascii_digit() || c == '.')
}
