use std::time::{Duration, Instant};

use pagedom::{Element, Event, Key, Modifiers, MouseButton, find_element};
use pagekit::animate::{self, ScrollAnimator};
use pagekit::back_to_top::{self, BackToTop};
use pagekit::nav;
use pagekit::share::{
    self, MemoryClipboard, NoNativeShare, ShareError, ShareOutcome, ShareRequest, ShareTarget,
};
use pagekit::toast::Toasts;

// ============================================================================
// Navigation Toggle
// ============================================================================

fn nav_tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::text("menu").id("nav-toggle"))
        .child(Element::box_().id("nav-links"))
}

#[test]
fn test_nav_toggle_flips_state() {
    let mut root = nav_tree();

    assert_eq!(nav::toggle(&mut root, "nav-toggle", "nav-links"), Some(true));
    assert_eq!(
        find_element(&root, "nav-toggle")
            .unwrap()
            .get_data(nav::DATA_EXPANDED)
            .map(String::as_str),
        Some("true")
    );
    assert!(find_element(&root, "nav-links")
        .unwrap()
        .has_class(nav::CLASS_ACTIVE));

    assert_eq!(nav::toggle(&mut root, "nav-toggle", "nav-links"), Some(false));
    assert!(!find_element(&root, "nav-links")
        .unwrap()
        .has_class(nav::CLASS_ACTIVE));
}

#[test]
fn test_nav_toggle_requires_both_elements() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::text("menu").id("nav-toggle"));
    let before = root.clone();

    assert_eq!(nav::toggle(&mut root, "nav-toggle", "nav-links"), None);
    assert_eq!(root, before);
}

// ============================================================================
// Back To Top
// ============================================================================

fn back_top_tree() -> Element {
    Element::box_()
        .id("root")
        .child(Element::text("^").id("top-btn").clickable(true))
}

#[test]
fn test_back_to_top_visibility_threshold() {
    let mut root = back_top_tree();
    let btn = BackToTop::new("top-btn");

    btn.on_scroll(&mut root, 301);
    assert!(find_element(&root, "top-btn")
        .unwrap()
        .has_class(back_to_top::CLASS_VISIBLE));

    btn.on_scroll(&mut root, 300);
    assert!(!find_element(&root, "top-btn")
        .unwrap()
        .has_class(back_to_top::CLASS_VISIBLE));
}

#[test]
fn test_back_to_top_scroll_event_and_activation() {
    let mut root = back_top_tree();
    let btn = BackToTop::new("top-btn").threshold(100);

    assert!(!btn.handle_event(&mut root, &Event::Scroll { offset: 150 }));
    assert!(find_element(&root, "top-btn")
        .unwrap()
        .has_class(back_to_top::CLASS_VISIBLE));

    let click = Event::Click {
        target: Some("top-btn".to_string()),
        button: MouseButton::Left,
    };
    assert!(btn.handle_event(&mut root, &click));

    let space = Event::Key {
        target: Some("top-btn".to_string()),
        key: Key::Char(' '),
        modifiers: Modifiers::new(),
    };
    assert!(btn.handle_event(&mut root, &space));

    // Clicks elsewhere don't activate.
    let other = Event::Click {
        target: Some("root".to_string()),
        button: MouseButton::Left,
    };
    assert!(!btn.handle_event(&mut root, &other));
}

#[test]
fn test_back_to_top_missing_button_is_silent() {
    let mut root = Element::box_().id("root");
    let btn = BackToTop::new("top-btn");

    btn.on_scroll(&mut root, 500);
    let click = Event::Click {
        target: Some("top-btn".to_string()),
        button: MouseButton::Left,
    };
    assert!(!btn.handle_event(&mut root, &click));
}

// ============================================================================
// Scroll Animations
// ============================================================================

#[test]
fn test_animation_fires_once_per_element() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::box_().id("card").class(animate::CLASS_OBSERVED))
        .child(Element::box_().id("plain"));

    let mut animator = ScrollAnimator::new();
    animator.observe_all(&root);

    assert!(animator.is_observed("card"));
    assert!(!animator.is_observed("plain"));

    assert!(animator.mark_visible(&mut root, "card"));
    assert!(find_element(&root, "card")
        .unwrap()
        .has_class(animate::CLASS_ANIMATED));

    // Second report is ignored.
    assert!(!animator.mark_visible(&mut root, "card"));
    // Unobserved elements are ignored.
    assert!(!animator.mark_visible(&mut root, "plain"));
}

// ============================================================================
// Toasts
// ============================================================================

#[test]
fn test_toast_replaces_and_expires() {
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts.show("first", start);
    toasts.show("second", start);
    assert_eq!(toasts.active(start).unwrap().message, "second");

    // Still visible just before the default duration.
    let almost = start + Duration::from_millis(2999);
    assert!(toasts.active(almost).is_some());

    let after = start + Duration::from_millis(3000);
    assert!(toasts.active(after).is_none());
}

#[test]
fn test_toast_custom_duration_and_dismiss() {
    let mut toasts = Toasts::new();
    let start = Instant::now();

    toasts.show_for("quick", Duration::from_millis(100), start);
    assert!(toasts.active(start + Duration::from_millis(99)).is_some());
    assert!(toasts.active(start + Duration::from_millis(100)).is_none());

    toasts.show("again", start);
    toasts.dismiss();
    assert!(toasts.active(start).is_none());
}

// ============================================================================
// Share
// ============================================================================

struct AlwaysShares;

impl ShareTarget for AlwaysShares {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Ok(())
    }
}

struct AbortedShare;

impl ShareTarget for AbortedShare {
    fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
        Err(ShareError::Aborted)
    }
}

fn request() -> ShareRequest {
    ShareRequest {
        title: "AfricaData".to_string(),
        text: "Data portal".to_string(),
        url: "https://example.org/page".to_string(),
    }
}

#[test]
fn test_share_prefers_native_surface() {
    let clipboard = MemoryClipboard::new();
    let mut toasts = Toasts::new();
    let now = Instant::now();

    let outcome = share::share(&request(), &AlwaysShares, &clipboard, &mut toasts, now);
    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(clipboard.contents(), None);
    assert!(toasts.active(now).is_none());
}

#[test]
fn test_share_falls_back_to_clipboard_with_toast() {
    let clipboard = MemoryClipboard::new();
    let mut toasts = Toasts::new();
    let now = Instant::now();

    let outcome = share::share(&request(), &NoNativeShare, &clipboard, &mut toasts, now);
    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(
        clipboard.contents().as_deref(),
        Some("https://example.org/page")
    );
    assert_eq!(
        toasts.active(now).unwrap().message,
        "Link copied to clipboard!"
    );
}

#[test]
fn test_dismissed_share_stays_silent() {
    let clipboard = MemoryClipboard::new();
    let mut toasts = Toasts::new();
    let now = Instant::now();

    let outcome = share::share(&request(), &AbortedShare, &clipboard, &mut toasts, now);
    assert_eq!(outcome, ShareOutcome::Dismissed);
    assert_eq!(clipboard.contents(), None);
    assert!(toasts.active(now).is_none());
}
