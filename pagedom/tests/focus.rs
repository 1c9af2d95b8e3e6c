use pagedom::{collect_focusable, Element, FocusState};

fn create_tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::text("First").id("first").focusable(true))
        .child(Element::text("Plain").id("plain"))
        .child(Element::text("Second").id("second").focusable(true))
        .child(Element::text("Third").id("third").focusable(true))
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_collect_focusable_tree_order() {
    let root = create_tree();
    assert_eq!(collect_focusable(&root), vec!["first", "second", "third"]);
}

#[test]
fn test_disabled_not_focusable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("A").id("a").focusable(true).disabled(true))
        .child(Element::text("B").id("b").focusable(true));

    assert_eq!(collect_focusable(&root), vec!["b"]);
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_next_cycles() {
    let root = create_tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
    assert_eq!(focus.focus_next(&root), Some("second".to_string()));
    assert_eq!(focus.focus_next(&root), Some("third".to_string()));
    assert_eq!(focus.focus_next(&root), Some("first".to_string()));
}

#[test]
fn test_focus_prev_wraps() {
    let root = create_tree();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_prev(&root), Some("third".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("second".to_string()));
}

#[test]
fn test_programmatic_focus_and_blur() {
    let mut focus = FocusState::new();

    assert!(focus.focus("second"));
    assert_eq!(focus.focused(), Some("second"));

    // Focusing the same element again is a no-op
    assert!(!focus.focus("second"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}
