//! Widget implementations for slideswitch.

mod toggle_view;

pub use toggle_view::{DragSession, ToggleChanged, ToggleView};
