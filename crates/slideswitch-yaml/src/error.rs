//! Error types for layout parsing.

use slideswitch_core::{ColorParseError, ResourceId};
use thiserror::Error;

/// Error type for layout parsing and validation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// Attribute refers to a resource the layout does not declare
    #[error("Unknown resource '{id}' referenced by '{field}'")]
    UnknownResource {
        /// Attribute name
        field: String,
        /// Referenced resource
        id: ResourceId,
    },

    /// Resource color is not a hex color
    #[error("Invalid color for resource '{resource}': {source}")]
    Color {
        /// Resource being declared
        resource: ResourceId,
        /// Underlying parse error
        source: ColorParseError,
    },

    /// The slide bitmap does not fit on the background
    #[error("Slide width {slide}px exceeds background width {background}px")]
    TrackTooNarrow {
        /// Background width in pixels
        background: u32,
        /// Slide width in pixels
        slide: u32,
    },
}
