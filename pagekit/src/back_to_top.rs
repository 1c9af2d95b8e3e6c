//! Back-to-top button state.
//!
//! The button becomes visible once the page is scrolled past a threshold;
//! activating it asks the embedder to scroll back to the top.

use pagedom::{Element, Event, MouseButton, find_element, find_element_mut};

/// Class on the button while it should be shown.
pub const CLASS_VISIBLE: &str = "visible";

const DEFAULT_THRESHOLD: u16 = 300;

#[derive(Debug)]
pub struct BackToTop {
    button_id: String,
    threshold: u16,
}

impl BackToTop {
    pub fn new(button_id: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Scroll offset past which the button shows.
    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reflect the scroll offset into the button's `visible` class.
    /// Missing button is a silent no-op.
    pub fn on_scroll(&self, root: &mut Element, offset: u16) {
        let Some(button) = find_element_mut(root, &self.button_id) else {
            return;
        };
        if offset > self.threshold {
            button.add_class(CLASS_VISIBLE);
        } else {
            button.remove_class(CLASS_VISIBLE);
        }
    }

    /// Handle an event. Scroll offsets update visibility; a click or
    /// Enter/Space on the button returns true, asking the embedder to scroll
    /// back to the top.
    pub fn handle_event(&self, root: &mut Element, event: &Event) -> bool {
        match event {
            Event::Scroll { offset } => {
                self.on_scroll(root, *offset);
                false
            }
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
            } if target == &self.button_id => find_element(root, &self.button_id).is_some(),
            Event::Key {
                target: Some(target),
                key,
                ..
            } if target == &self.button_id && key.is_activation() => {
                find_element(root, &self.button_id).is_some()
            }
            _ => false,
        }
    }
}
