//! Table element structure.
//!
//! A table is a container element holding a header row and a body of data
//! rows, marked with the `part` data attribute. Rows are atomic: a row's
//! cells stay together when the body is reordered.

use pagedom::{Content, Element};

/// Data attribute naming a table's structural parts.
pub const DATA_PART: &str = "part";
pub const PART_HEAD: &str = "head";
pub const PART_BODY: &str = "body";

/// Create an empty table container.
pub fn table(id: impl Into<String>) -> Element {
    Element::box_().id(id)
}

/// Create the header row from header cells.
pub fn head(cells: impl IntoIterator<Item = Element>) -> Element {
    Element::row().data(DATA_PART, PART_HEAD).children(cells)
}

/// Create a plain (non-sortable) header cell.
pub fn header_cell(label: impl Into<String>) -> Element {
    Element::text(label)
}

/// Create a header cell flagged sortable.
pub fn sortable_header_cell(label: impl Into<String>) -> Element {
    Element::text(label).data(crate::sortable::DATA_SORTABLE, "")
}

/// Create the body from data rows.
pub fn body(rows: impl IntoIterator<Item = Element>) -> Element {
    Element::box_().data(DATA_PART, PART_BODY).children(rows)
}

/// Create a data row from cell texts.
pub fn row<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Element {
    Element::row().children(cells.into_iter().map(Element::text))
}

/// The table's header row, if present.
pub fn head_of(table: &Element) -> Option<&Element> {
    find_part(table, PART_HEAD)
}

pub fn head_of_mut(table: &mut Element) -> Option<&mut Element> {
    find_part_mut(table, PART_HEAD)
}

/// The table's body, if present.
pub fn body_of(table: &Element) -> Option<&Element> {
    find_part(table, PART_BODY)
}

pub fn body_of_mut(table: &mut Element) -> Option<&mut Element> {
    find_part_mut(table, PART_BODY)
}

/// Text of the cell at the given ordinal index within a row.
pub fn cell_text(row: &Element, col: usize) -> Option<&str> {
    row.content.children().get(col).map(Element::text_content)
}

fn find_part<'a>(table: &'a Element, part: &str) -> Option<&'a Element> {
    table
        .content
        .children()
        .iter()
        .find(|child| child.get_data(DATA_PART).is_some_and(|p| p == part))
}

fn find_part_mut<'a>(table: &'a mut Element, part: &str) -> Option<&'a mut Element> {
    match &mut table.content {
        Content::Children(children) => children
            .iter_mut()
            .find(|child| child.get_data(DATA_PART).is_some_and(|p| p == part)),
        _ => None,
    }
}
