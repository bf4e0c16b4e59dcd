//! Recorded draw operations.

use crate::asset::ResourceId;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single paint operation, as captured by [`RecordingCanvas`](crate::RecordingCanvas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Blit a bitmap at its natural size
    Image {
        /// Resource the bitmap came from
        resource: ResourceId,
        /// Destination bounds
        bounds: Rect,
    },
}

impl DrawCommand {
    /// Create an image command.
    #[must_use]
    pub const fn image(resource: ResourceId, bounds: Rect) -> Self {
        Self::Image { resource, bounds }
    }

    /// Destination bounds of the command.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Image { bounds, .. } => *bounds,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image { resource, bounds } => write!(
                f,
                "image {resource} @ ({}, {}) {}x{}",
                bounds.x, bounds.y, bounds.width, bounds.height
            ),
        }
    }
}
