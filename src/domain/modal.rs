use scraper::{ElementRef, Html, Selector};

/// The striped detail table inside the application popup.
const DETAIL_TABLE: &str =
    "table.table.table-borderless.table-sm.table-responsive-lg.table-striped.font-sm";

/// Identifiers scraped from the detail popup. Either field resolves to `None`
/// when its row is missing or the row's markup doesn't match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ModalDetails {
    pub pan: Option<String>,
    pub gstin: Option<String>,
}

/// Extracts PAN and GSTIN from the popup's inner HTML. Rows are matched by
/// label text; the value sits in a `span.mr-1.fw-600` inside the second cell.
pub fn extract_modal_details(modal_html: &str) -> ModalDetails {
    let table_selector = Selector::parse(DETAIL_TABLE).unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let value_selector = Selector::parse("span.mr-1.fw-600").unwrap();

    let document = Html::parse_fragment(modal_html);
    let mut details = ModalDetails::default();

    let table = match document.select(&table_selector).next() {
        Some(table) => table,
        None => return details,
    };

    for row in table.select(&row_selector) {
        let row_text: String = row.text().collect();

        if row_text.contains("PAN No.") {
            details.pan = second_cell_value(row, &cell_selector, &value_selector);
        }
        if row_text.contains("GSTIN No.") {
            details.gstin = second_cell_value(row, &cell_selector, &value_selector);
        }
    }

    details
}

fn second_cell_value(
    row: ElementRef,
    cell_selector: &Selector,
    value_selector: &Selector,
) -> Option<String> {
    row.select(cell_selector)
        .nth(1)
        .and_then(|cell| cell.select(value_selector).next())
        .map(|span| span.text().collect::<String>().trim().to_string())
}
