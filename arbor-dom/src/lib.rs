pub mod class;
pub mod element;
pub mod event;
pub mod markup;
pub mod popup;

pub use class::ClassNames;
pub use element::{closest, find_element, find_path, parent_of, Content, Element};
pub use event::{Event, EventResult, MouseButton};
pub use markup::to_markup;
pub use popup::{PopupLease, PopupSlot};
