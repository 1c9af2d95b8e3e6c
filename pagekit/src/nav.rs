//! Mobile navigation toggle.

use pagedom::{Element, find_element, find_element_mut};

/// Data attribute on the toggle reflecting the open state.
pub const DATA_EXPANDED: &str = "expanded";
/// Class on the links container while the nav is open.
pub const CLASS_ACTIVE: &str = "active";

/// Flip the navigation open state: the toggle's `expanded` attribute and the
/// links container's `active` class move together.
///
/// Both elements must exist; otherwise nothing is touched. Returns the new
/// expanded state, or None when the elements are missing.
pub fn toggle(root: &mut Element, toggle_id: &str, links_id: &str) -> Option<bool> {
    // Require both elements before mutating either.
    find_element(root, toggle_id)?;
    find_element(root, links_id)?;

    let toggle = find_element_mut(root, toggle_id)?;
    let expanded = toggle
        .get_data(DATA_EXPANDED)
        .is_some_and(|value| value == "true");
    toggle.set_data(DATA_EXPANDED, (!expanded).to_string());

    let links = find_element_mut(root, links_id)?;
    links.toggle_class(CLASS_ACTIVE);

    Some(!expanded)
}
