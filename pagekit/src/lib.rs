//! Page-enhancement utilities over a [`pagedom`] element tree.
//!
//! A collection of independent controllers attached at page setup time:
//! sortable tables, navigation toggling, scroll-triggered visibility,
//! entrance animations, toasts, theme persistence, table export, and a thin
//! native-share/clipboard wrapper. Every controller is parameterized by the
//! element ids passed at call time; there is no shared global state.

pub mod animate;
pub mod back_to_top;
pub mod charts;
pub mod export;
pub mod logging;
pub mod nav;
pub mod paths;
pub mod settings;
pub mod share;
pub mod sortable;
pub mod table;
pub mod theme;
pub mod toast;
