//! Bitmap assets and the platform capability that loads them.
//!
//! Widgets never decode image data themselves. They ask an [`AssetSource`]
//! for a [`Bitmap`] by [`ResourceId`] and only rely on its pixel size; the
//! pixels stay with whatever backend eventually rasterizes the frame.

use crate::color::Color;
use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of an image resource, e.g. `switch_background`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a resource identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A decoded image handle.
///
/// Carries the pixel dimensions layout depends on, plus a representative
/// fill color so text and test backends have something to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bitmap {
    /// Resource this bitmap was loaded from
    pub id: ResourceId,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Representative fill color
    pub fill: Color,
}

impl Bitmap {
    /// Create a bitmap handle.
    #[must_use]
    pub fn new(id: impl Into<ResourceId>, width: u32, height: u32, fill: Color) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            fill,
        }
    }

    /// Pixel dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Errors raised while loading an image asset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    /// No resource is registered under the identifier.
    #[error("image resource not found: {0}")]
    NotFound(ResourceId),

    /// The resource exists but has no pixels.
    #[error("image resource has zero width or height: {0}")]
    Empty(ResourceId),
}

/// Capability to load an image by identifier.
///
/// Provided by the host platform; the widget treats it as opaque.
pub trait AssetSource {
    /// Load the bitmap registered under `id`.
    fn load_image(&self, id: &ResourceId) -> Result<Bitmap, AssetError>;
}

/// In-memory [`AssetSource`] keyed by resource id.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<ResourceId, Bitmap>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bitmap, replacing any previous one with the same id.
    pub fn insert(&mut self, bitmap: Bitmap) -> Option<Bitmap> {
        self.images.insert(bitmap.id.clone(), bitmap)
    }

    /// Builder form of [`AssetCatalog::insert`].
    #[must_use]
    pub fn with(mut self, bitmap: Bitmap) -> Self {
        self.insert(bitmap);
        self
    }

    /// Whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &ResourceId) -> bool {
        self.images.contains_key(id)
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetSource for AssetCatalog {
    fn load_image(&self, id: &ResourceId) -> Result<Bitmap, AssetError> {
        let bitmap = self
            .images
            .get(id)
            .ok_or_else(|| AssetError::NotFound(id.clone()))?;
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(AssetError::Empty(id.clone()));
        }
        tracing::trace!(%id, width = bitmap.width, height = bitmap.height, "loaded image");
        Ok(bitmap.clone())
    }
}
