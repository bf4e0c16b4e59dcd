//! Core types and traits for slideswitch.
//!
//! This crate provides foundational types used throughout slideswitch:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], collapsed to [`PointerInput`] for gestures
//! - The [`Widget`] and [`Canvas`] traits, plus [`RecordingCanvas`]
//! - Bitmap assets: [`Bitmap`], [`ResourceId`], [`AssetSource`]

mod asset;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use asset::{AssetCatalog, AssetError, AssetSource, Bitmap, ResourceId};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, Key, MouseButton, PointerId, PointerInput, PointerType, TouchId};
pub use geometry::{Point, Rect, Size};
pub use widget::{Canvas, EventResponse, Invalidation, LayoutResult, TypeId, Widget};
