//! YAML layout parser and markup attributes for slideswitch screens.

mod error;
mod layout;

pub use error::ParseError;
pub use layout::{Layout, ResourceSpec, ToggleAttributes};
