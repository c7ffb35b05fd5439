pub mod document;
pub mod element;
pub mod event;

pub use document::{DispatchOutcome, Document, EventContext};
pub use element::{descendants, find_element, find_element_mut, path_to, Content, Element};
pub use event::{Event, EventKind, MouseButton};
