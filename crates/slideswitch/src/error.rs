//! Error types for building a host screen.

use slideswitch_core::AssetError;
use slideswitch_yaml::ParseError;
use thiserror::Error;

/// Errors that can occur while building a [`HostScreen`](crate::HostScreen).
#[derive(Debug, Error)]
pub enum HostError {
    /// The layout document is invalid.
    #[error("layout error: {0}")]
    Layout(#[from] ParseError),

    /// A bitmap named by the layout could not be loaded.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}
