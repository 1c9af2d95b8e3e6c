use pagedom::{find_element, find_element_mut, Content, Element};

// ============================================================================
// Tree Lookup
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("section")
            .child(Element::text("hello").id("greeting")),
    );

    assert!(find_element(&root, "root").is_some());
    assert!(find_element(&root, "section").is_some());
    assert_eq!(
        find_element(&root, "greeting").map(|el| el.text_content()),
        Some("hello")
    );
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_updates_in_place() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::text("old").id("label"));

    let label = find_element_mut(&mut root, "label").unwrap();
    label.content = Content::Text("new".into());

    assert_eq!(
        find_element(&root, "label").map(|el| el.text_content()),
        Some("new")
    );
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_add_remove() {
    let mut el = Element::box_().id("el").class("visible");
    assert!(el.has_class("visible"));

    // Adding twice keeps a single entry
    el.add_class("visible");
    assert_eq!(el.classes.len(), 1);

    assert!(el.remove_class("visible"));
    assert!(!el.has_class("visible"));
    assert!(!el.remove_class("visible"));
}

#[test]
fn test_class_toggle() {
    let mut el = Element::box_().id("el");

    assert!(el.toggle_class("active"));
    assert!(el.has_class("active"));

    assert!(!el.toggle_class("active"));
    assert!(!el.has_class("active"));
}

// ============================================================================
// Data Attributes
// ============================================================================

#[test]
fn test_data_attributes() {
    let mut el = Element::box_().id("el").data("sortable", "");
    assert!(el.get_data("sortable").is_some());
    assert!(el.get_data("other").is_none());

    el.set_data("expanded", "true");
    assert_eq!(el.get_data("expanded").map(String::as_str), Some("true"));
}

// ============================================================================
// Children
// ============================================================================

#[test]
fn test_take_and_set_children() {
    let mut body = Element::box_()
        .id("body")
        .child(Element::text("a").id("r1"))
        .child(Element::text("b").id("r2"));

    let mut rows = body.take_children();
    assert_eq!(rows.len(), 2);
    assert_eq!(body.content.children().len(), 0);

    rows.reverse();
    body.set_children(rows);

    let ids: Vec<_> = body.content.children().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["r2", "r1"]);
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
}
