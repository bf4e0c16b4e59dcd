//! Widget trait and related types.
//!
//! Widgets are driven by a render/event loop they do not control. The loop
//! calls the hooks in this order:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds allocated by the parent
//! 3. **Paint**: Record draw commands on a [`Canvas`]
//! 4. **Event**: Deliver input, one event at a time
//!
//! A widget never repaints itself. It records what it needs through
//! [`Invalidation`] and the loop collects it with
//! [`Widget::take_invalidation`] after every call.
//!
//! # Examples
//!
//! ```
//! use slideswitch_core::{EventResponse, Invalidation, TypeId};
//!
//! let response = EventResponse::consumed();
//! assert!(response.is_consumed());
//! assert!(response.message.is_none());
//!
//! let mut pending = Invalidation::default();
//! pending.request_paint();
//! assert!(pending.paint && !pending.layout);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<u32>());
//! ```

use crate::asset::Bitmap;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Pending work a widget asks the loop to schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Measure and layout must run again before the next paint
    pub layout: bool,
    /// The widget must be repainted
    pub paint: bool,
}

impl Invalidation {
    /// Nothing pending.
    pub const NONE: Self = Self {
        layout: false,
        paint: false,
    };

    /// Ask for a repaint.
    pub fn request_paint(&mut self) {
        self.paint = true;
    }

    /// Ask for a relayout, which implies a repaint.
    pub fn request_layout(&mut self) {
        self.layout = true;
        self.paint = true;
    }

    /// Whether anything is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.layout || self.paint
    }

    /// Return the pending requests and reset to [`Invalidation::NONE`].
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Outcome of delivering an event to a widget.
#[derive(Debug, Default)]
pub struct EventResponse {
    consumed: bool,
    /// Message published by the widget, if any
    pub message: Option<Box<dyn Any>>,
}

impl EventResponse {
    /// The widget did not handle the event; it may propagate elsewhere.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    /// The widget handled the event; it must not propagate.
    #[must_use]
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            message: None,
        }
    }

    /// Attach a message to the response.
    #[must_use]
    pub fn with_message(mut self, message: impl Any) -> Self {
        self.message = Some(Box::new(message));
        self
    }

    /// Whether the event was consumed.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Downcast the message to a concrete type.
    #[must_use]
    pub fn message_as<T: 'static>(&self) -> Option<&T> {
        self.message.as_ref()?.downcast_ref::<T>()
    }
}

/// Core widget trait that all UI elements implement.
///
/// Widgets live on the UI thread; nothing here is `Send`.
pub trait Widget {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds allocated by the parent.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Record draw commands for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event.
    fn event(&mut self, event: &Event) -> EventResponse;

    /// Collect and clear pending layout/paint requests.
    fn take_invalidation(&mut self) -> Invalidation {
        Invalidation::NONE
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// A minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a bitmap at its natural size with its top-left corner at `origin`.
    fn draw_image(&mut self, image: &Bitmap, origin: Point);
}
