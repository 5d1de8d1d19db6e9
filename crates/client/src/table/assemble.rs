//! Positional record assembly.

use bundesliga_core::Record;

use super::model::Row;

/// Zip `values` against `headers` by position.
///
/// Values past the last header are dropped; headers past the last value
/// are left out of the record rather than filled.
pub fn assemble(values: &[String], headers: &[String]) -> Record {
    let mut record = Record::new();
    for (header, value) in headers.iter().zip(values) {
        record.insert(header.as_str(), value.as_str());
    }
    record
}

/// A row with a single cell is a trailing footnote, not a data row.
pub fn is_note_row(row: &Row) -> bool {
    row.cells.len() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::model::tests::row;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assemble_full_row() {
        let headers = strings(&["Pl.", "Nat.", "Spieler", "Verein", "Tore"]);
        let record = assemble(&strings(&["1", "GER", "Müller", "FCB", "30"]), &headers);
        assert_eq!(record.len(), 5);
        assert_eq!(record.get("Pl."), Some("1"));
        assert_eq!(record.get("Tore"), Some("30"));
        assert_eq!(record.labels().collect::<Vec<_>>(), headers);
    }

    #[test]
    fn test_assemble_extra_values_dropped() {
        let headers = strings(&["Pl.", "Spieler"]);
        let record = assemble(&strings(&["1", "Müller", "FCB"]), &headers);
        assert_eq!(record.len(), 2);
        assert!(record.labels().all(|l| headers.iter().any(|h| h == l)));
    }

    #[test]
    fn test_assemble_missing_values_absent() {
        let headers = strings(&["Pl.", "Spieler", "Tore"]);
        let record = assemble(&strings(&["1", "Müller"]), &headers);
        assert_eq!(record.get("Tore"), None);
        assert!(!record.contains("Tore"));
    }

    #[test]
    fn test_is_note_row() {
        assert!(is_note_row(&row(r#"<td colspan="5">Stand: Saisonende</td>"#)));
        assert!(!is_note_row(&row("<td>1</td><td>Müller</td>")));
    }
}
