pub mod form;
pub mod navigation;
pub mod pointer;
pub mod viewport;

pub use form::wire_contact_form;
pub use navigation::{wire_nav_clicks, wire_section_observer};
pub use pointer::wire_pointer_move;
pub use viewport::{wire_resize, wire_scroll};
