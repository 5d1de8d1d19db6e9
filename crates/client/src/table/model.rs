//! Owned, read-only view of the tables on a parsed page.
//!
//! Cells are converted once from the `scraper` tree. Text inside visually
//! hidden elements is kept but flagged, so callers can mask it without
//! touching the document.

use std::sync::LazyLock;

use bundesliga_core::Error;
use scraper::{ElementRef, Html, Selector};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("invalid selector"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").expect("invalid selector"));

/// Build the selector for candidate tables with the given CSS class.
pub fn table_selector(class: &str) -> Result<Selector, Error> {
    Selector::parse(&format!("table.{}", class.trim()))
        .map_err(|e| Error::InvalidInput(format!("invalid table class {:?}: {}", class, e)))
}

/// Parse `html` and return every table matching `selector`, in document order.
pub fn parse_tables(html: &str, selector: &Selector) -> Vec<Table> {
    let document = Html::parse_document(html);
    document.select(selector).map(Table::from_element).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `th`
    Header,
    /// `td`
    Data,
}

/// A `span` nested in a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub text: String,
    /// Styled or classed so it never renders.
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    text: String,
    hidden: bool,
    /// Indices into `Cell::markers` of every marker enclosing this text.
    markers: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Number of rows this cell covers, starting with its own (`rowspan`, default 1).
    pub span: usize,
    /// Number of columns this cell covers (`colspan`, default 1).
    pub colspan: usize,
    pub title: Option<String>,
    /// Visible text of each nested link, in document order.
    pub anchors: Vec<String>,
    pub markers: Vec<Marker>,
    segments: Vec<Segment>,
}

impl Cell {
    pub fn from_element(element: ElementRef) -> Self {
        let kind = if element.value().name() == "th" { CellKind::Header } else { CellKind::Data };
        let span = span_attr(element, "rowspan");
        let colspan = span_attr(element, "colspan");
        let title = element
            .value()
            .attr("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let anchors = element.select(&ANCHOR).map(trimmed_text).collect();

        let spans: Vec<(ElementRef, Marker)> = element
            .select(&SPAN)
            .map(|span| (span, Marker { text: trimmed_text(span), hidden: hidden_within(span, element) }))
            .collect();

        let mut segments = Vec::new();
        for node in element.descendants() {
            let Some(text) = node.value().as_text() else { continue };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let enclosing: Vec<ElementRef> = node
                .ancestors()
                .take_while(|a| a.id() != element.id())
                .filter_map(ElementRef::wrap)
                .collect();
            segments.push(Segment {
                text: text.to_string(),
                hidden: enclosing.iter().any(|a| is_hidden(*a)),
                markers: enclosing
                    .iter()
                    .filter_map(|a| spans.iter().position(|(span, _)| span.id() == a.id()))
                    .collect(),
            });
        }

        let markers = spans.into_iter().map(|(_, m)| m).collect();

        Self { kind, span, colspan, title, anchors, markers, segments }
    }

    pub fn is_header(&self) -> bool {
        self.kind == CellKind::Header
    }

    /// All text of the cell, hidden parts included.
    pub fn text(&self) -> String {
        self.text_where(|_| true)
    }

    /// Text of the cell without anything inside a hidden element.
    pub fn visible_text(&self) -> String {
        self.text_where(|s| !s.hidden)
    }

    /// Text of the cell leaving out marker `index`, and hidden parts if `mask_hidden`.
    pub fn text_without_marker(&self, index: usize, mask_hidden: bool) -> String {
        self.text_where(|s| !s.markers.contains(&index) && !(mask_hidden && s.hidden))
    }

    fn text_where(&self, keep: impl Fn(&Segment) -> bool) -> String {
        self.segments.iter().filter(|s| keep(s)).map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn from_element(element: ElementRef) -> Self {
        let cells = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "td" | "th"))
            .map(Cell::from_element)
            .collect();
        Self { cells }
    }

    /// Number of columns the row covers, counting each cell's `colspan`.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.colspan).sum()
    }

    pub fn data_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.is_header())
    }
}

/// A table's own rows; the first row is the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// Collect the rows of `element`, directly or through its row groups.
    /// Rows of nested tables stay with the nested table.
    pub fn from_element(element: ElementRef) -> Self {
        let mut rows = Vec::new();
        for child in element.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => rows.push(Row::from_element(child)),
                "thead" | "tbody" | "tfoot" => rows.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|r| r.value().name() == "tr")
                        .map(Row::from_element),
                ),
                _ => {}
            }
        }
        Self { rows }
    }

    pub fn header_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().skip(1)
    }

    /// Text of every header cell anywhere in the table.
    pub fn header_texts(&self) -> Vec<String> {
        self.rows.iter().flat_map(|r| r.cells.iter()).filter(|c| c.is_header()).map(Cell::text).collect()
    }
}

fn span_attr(element: ElementRef, name: &str) -> usize {
    element
        .value()
        .attr(name)
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

fn trimmed_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

fn is_hidden(element: ElementRef) -> bool {
    let value = element.value();
    let style: String = value
        .attr("style")
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    style.contains("display:none")
        || style.contains("visibility:hidden")
        || value.classes().any(|c| c.eq_ignore_ascii_case("sortkey"))
}

/// Whether `element` or any of its ancestors below `cell` is hidden.
fn hidden_within(element: ElementRef, cell: ElementRef) -> bool {
    is_hidden(element)
        || element
            .ancestors()
            .take_while(|a| a.id() != cell.id())
            .filter_map(ElementRef::wrap)
            .any(is_hidden)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parse a single row of cells, e.g. `<td>1</td><td>2</td>`.
    pub(crate) fn row(cells_html: &str) -> Row {
        let html = format!("<table class=\"wikitable\"><tr>{cells_html}</tr></table>");
        let tables = parse_tables(&html, &table_selector("wikitable").unwrap());
        tables.into_iter().next().unwrap().rows.remove(0)
    }

    pub(crate) fn cell(cell_html: &str) -> Cell {
        row(cell_html).cells.remove(0)
    }

    #[test]
    fn test_parse_tables_by_class() {
        let html = r#"
            <table class="wikitable"><tr><th>A</th></tr></table>
            <table class="infobox"><tr><th>B</th></tr></table>
            <table class="wikitable sortable"><tr><th>C</th></tr></table>
        "#;
        let tables = parse_tables(html, &table_selector("wikitable").unwrap());
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].header_texts(), vec!["A"]);
        assert_eq!(tables[1].header_texts(), vec!["C"]);
    }

    #[test]
    fn test_table_selector_invalid_class() {
        assert!(matches!(table_selector("wiki table"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_table_rows_through_groups() {
        let html = r#"
            <table class="wikitable">
                <thead><tr><th>Pl.</th><th>Tore</th></tr></thead>
                <tbody>
                    <tr><td>1</td><td>30</td></tr>
                    <tr><td>2</td><td>20</td></tr>
                </tbody>
            </table>
        "#;
        let table = parse_tables(html, &table_selector("wikitable").unwrap()).remove(0);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.data_rows().count(), 2);
        assert_eq!(table.header_row().unwrap().cells.len(), 2);
    }

    #[test]
    fn test_nested_table_rows_not_attributed() {
        let html = r#"
            <table class="wikitable">
                <tr><th>Spieler</th><th>Tore</th></tr>
                <tr><td><table><tr><td>inner</td></tr></table></td><td>5</td></tr>
            </table>
        "#;
        let tables = parse_tables(html, &table_selector("wikitable").unwrap());
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
    }

    #[test]
    fn test_cell_span_default_and_parsed() {
        let r = row(r#"<td>1</td><td rowspan="3">2</td><td rowspan="x">3</td><td rowspan="0">4</td>"#);
        let spans: Vec<usize> = r.cells.iter().map(|c| c.span).collect();
        assert_eq!(spans, vec![1, 3, 1, 1]);
    }

    #[test]
    fn test_row_width_counts_colspan() {
        let r = row(r#"<th>Pl.</th><th colspan="2">Spieler</th><th>Verein</th><th colspan="x">Tore</th>"#);
        let colspans: Vec<usize> = r.cells.iter().map(|c| c.colspan).collect();
        assert_eq!(colspans, vec![1, 2, 1, 1]);
        assert_eq!(r.width(), 5);
    }

    #[test]
    fn test_cell_kind_and_title() {
        let r = row(r#"<th title="Punkte">Pkt.</th><td>60</td>"#);
        assert!(r.cells[0].is_header());
        assert_eq!(r.cells[0].title.as_deref(), Some("Punkte"));
        assert!(!r.cells[1].is_header());
        assert_eq!(r.cells[1].title, None);
        assert_eq!(r.data_cells().count(), 1);
    }

    #[test]
    fn test_cell_anchors_and_markers() {
        let c = cell(
            r#"<td><span class="flagicon"><a href="/wiki/Deutschland">DE-flag</a></span> <a href="/wiki/Thomas_M%C3%BCller">Thomas Müller</a></td>"#,
        );
        assert_eq!(c.anchors, vec!["DE-flag", "Thomas Müller"]);
        assert_eq!(c.markers, vec![Marker { text: "DE-flag".into(), hidden: false }]);
        assert_eq!(c.text(), "DE-flagThomas Müller");
    }

    #[test]
    fn test_hidden_text_masked_not_removed() {
        let c = cell(r#"<td><span style="visibility: hidden; color: transparent;">0</span>9</td>"#);
        assert_eq!(c.text(), "09");
        assert_eq!(c.visible_text(), "9");
        assert!(c.markers[0].hidden);
        // Reading again gives the same answer; nothing was removed.
        assert_eq!(c.text(), "09");
    }

    #[test]
    fn test_sortkey_and_display_none_hidden() {
        let c = cell(r#"<td><span class="sortkey">Mueller</span><span style="DISPLAY:NONE">x</span>Müller</td>"#);
        assert_eq!(c.visible_text(), "Müller");
        assert!(c.markers.iter().all(|m| m.hidden));
    }

    #[test]
    fn test_text_without_marker() {
        let c = cell(r#"<td><span>GER</span> Müller</td>"#);
        assert_eq!(c.text(), "GERMüller");
        assert_eq!(c.text_without_marker(0, false), "Müller");
    }
}
