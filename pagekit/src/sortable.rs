//! Sortable table controller.
//!
//! Lets a user reorder a table's body rows by clicking a sortable header (or
//! pressing Enter/Space while it holds focus), toggling between ascending and
//! descending order. Each pairwise comparison is numeric when both cells
//! derive a finite number and falls back to case-insensitive text comparison
//! otherwise; the mode is decided per pair, not once per column.
//!
//! Missing tables, headers, or cells are silent no-ops: this controller never
//! fails visibly on malformed markup.

use std::cmp::Ordering;

use pagedom::{find_element, find_element_mut, Content, Element, Event, MouseButton};

use crate::table;

/// Data attribute flagging a header cell as sortable.
pub const DATA_SORTABLE: &str = "sortable";
/// Data attribute recording a sortable header's column ordinal, set by `init`.
pub const DATA_SORT_COL: &str = "sort-col";
/// Direction indicator classes on the active header cell.
pub const CLASS_SORT_ASC: &str = "sort-asc";
pub const CLASS_SORT_DESC: &str = "sort-desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn indicator_class(self) -> &'static str {
        match self {
            SortDirection::Ascending => CLASS_SORT_ASC,
            SortDirection::Descending => CLASS_SORT_DESC,
        }
    }
}

/// Attach sort activation to every sortable header of the table: the header
/// gains a button role, joins the tab order, and records its column ordinal.
///
/// A missing table or header row is a silent no-op.
pub fn init(root: &mut Element, table_id: &str) {
    let Some(tbl) = find_element_mut(root, table_id) else {
        log::debug!("[sortable] table {table_id} not found, skipping init");
        return;
    };
    let Some(head) = table::head_of_mut(tbl) else {
        return;
    };

    if let Content::Children(cells) = &mut head.content {
        for (index, cell) in cells.iter_mut().enumerate() {
            if cell.get_data(DATA_SORTABLE).is_some() {
                cell.clickable = true;
                cell.focusable = true;
                cell.set_data(DATA_SORT_COL, index.to_string());
            }
        }
    }
}

/// Dispatch one event against the table. A left click on a sortable header,
/// or Enter/Space targeted at it, runs the sort. Returns true when a sort
/// ran, so keyboard callers can suppress the default Space scroll.
pub fn handle_event(root: &mut Element, table_id: &str, event: &Event) -> bool {
    let target = match event {
        Event::Click {
            target: Some(target),
            button: MouseButton::Left,
        } => target,
        Event::Key {
            target: Some(target),
            key,
            ..
        } if key.is_activation() => target,
        _ => return false,
    };

    let Some(col) = sortable_column_of(root, table_id, target) else {
        return false;
    };
    sort_by_column(root, table_id, col);
    true
}

/// Column ordinal of a sortable header cell, if the target is one.
fn sortable_column_of(root: &Element, table_id: &str, target: &str) -> Option<usize> {
    let tbl = find_element(root, table_id)?;
    let head = table::head_of(tbl)?;
    let cell = head.content.children().iter().find(|cell| cell.id == target)?;
    cell.get_data(DATA_SORT_COL)?.parse().ok()
}

/// Sort the table's body rows by the given column.
///
/// An ascending column toggles to descending; any other prior state yields
/// ascending. Direction indicators on every other header are cleared so that
/// exactly one column carries one afterwards. The sort is stable and only
/// reorders rows; cell contents are never touched.
pub fn sort_by_column(root: &mut Element, table_id: &str, col: usize) {
    let Some(tbl) = find_element_mut(root, table_id) else {
        return;
    };

    let was_ascending = table::head_of(tbl)
        .and_then(|head| head.content.children().get(col))
        .is_some_and(|cell| cell.has_class(CLASS_SORT_ASC));
    let direction = if was_ascending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    // Reset indicators on every header before re-marking the active one.
    if let Some(head) = table::head_of_mut(tbl) {
        if let Content::Children(cells) = &mut head.content {
            for cell in cells.iter_mut() {
                cell.remove_class(CLASS_SORT_ASC);
                cell.remove_class(CLASS_SORT_DESC);
            }
        }
    }

    if let Some(body) = table::body_of_mut(tbl) {
        let mut rows = body.take_children();
        rows.sort_by(|a, b| {
            let ord = compare_rows(a, b, col);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        body.set_children(rows);
    }

    if let Some(head) = table::head_of_mut(tbl) {
        if let Content::Children(cells) = &mut head.content {
            if let Some(cell) = cells.get_mut(col) {
                cell.add_class(direction.indicator_class());
            }
        }
    }
}

fn compare_rows(a: &Element, b: &Element, col: usize) -> Ordering {
    let a_text = table::cell_text(a, col).unwrap_or("").trim();
    let b_text = table::cell_text(b, col).unwrap_or("").trim();

    // Numeric only when both sides derive a finite number, decided per pair.
    if let (Some(a_num), Some(b_num)) = (derived_number(a_text), derived_number(b_text)) {
        return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
    }

    compare_text(a_text, b_text)
}

/// A cell's derived numeric value: the text with every character stripped
/// that is not a digit, a decimal point, or a leading minus sign, parsed as a
/// number. None unless the result is finite.
pub fn derived_number(text: &str) -> Option<f64> {
    let mut filtered = String::new();
    for c in text.chars() {
        match c {
            '0'..='9' | '.' => filtered.push(c),
            '-' if filtered.is_empty() => filtered.push(c),
            _ => {}
        }
    }

    let value: f64 = filtered.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Case-insensitive text comparison with a deterministic case tie-break.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_number_strips_currency_marks() {
        assert_eq!(derived_number("$10"), Some(10.0));
        assert_eq!(derived_number("  $2.50 "), Some(2.5));
        assert_eq!(derived_number("1,000"), Some(1000.0));
    }

    #[test]
    fn derived_number_keeps_leading_minus_only() {
        assert_eq!(derived_number("-5"), Some(-5.0));
        assert_eq!(derived_number("$-5"), Some(-5.0));
        // Interior minus is stripped, not parsed as a range.
        assert_eq!(derived_number("10-20"), Some(1020.0));
    }

    #[test]
    fn derived_number_rejects_non_numbers() {
        assert_eq!(derived_number(""), None);
        assert_eq!(derived_number("banana"), None);
        assert_eq!(derived_number("1.2.3"), None);
    }

    #[test]
    fn compare_text_is_case_insensitive() {
        assert_eq!(compare_text("Apple", "banana"), Ordering::Less);
        assert_eq!(compare_text("banana", "cherry"), Ordering::Less);
        assert_ne!(compare_text("Apple", "apple"), Ordering::Equal);
    }
}
