//! Scroll-triggered entrance animations.
//!
//! Elements carrying the `animate-on-scroll` class are observed; the first
//! time one is reported visible it gains the `animate-in` class and is
//! dropped from observation, so the animation fires once per element.

use std::collections::HashSet;

use pagedom::{Content, Element, find_element_mut};

pub const CLASS_OBSERVED: &str = "animate-on-scroll";
pub const CLASS_ANIMATED: &str = "animate-in";

#[derive(Debug, Default)]
pub struct ScrollAnimator {
    observed: HashSet<String>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe every element in the tree carrying the `animate-on-scroll` class.
    pub fn observe_all(&mut self, root: &Element) {
        collect_observed(root, &mut self.observed);
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Report an element visible. Adds `animate-in` and stops observing it;
    /// returns true only the first time.
    pub fn mark_visible(&mut self, root: &mut Element, id: &str) -> bool {
        if !self.observed.remove(id) {
            return false;
        }
        match find_element_mut(root, id) {
            Some(element) => {
                element.add_class(CLASS_ANIMATED);
                true
            }
            None => false,
        }
    }
}

fn collect_observed(element: &Element, result: &mut HashSet<String>) {
    if element.has_class(CLASS_OBSERVED) {
        result.insert(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_observed(child, result);
        }
    }
}
