pub mod element;
pub mod event;
pub mod focus;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
