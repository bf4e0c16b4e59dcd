//! Input events for widgets.
//!
//! Platforms deliver mouse, touch and unified pointer events. Widgets that
//! only care about the press/move/release cycle can collapse all three
//! families with [`Event::as_pointer`].

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse wheel scrolled
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
    // Touch events
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Touch pressure (0.0 to 1.0)
        pressure: f32,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Touch pressure
        pressure: f32,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    // Pointer events (unified mouse/touch/pen)
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

/// Touch identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter key
    Enter,
    /// Space bar
    Space,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
}

/// One step of a press/move/release gesture, independent of input device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Contact started at position
    Press(Point),
    /// Contact moved to position
    Move(Point),
    /// Contact lifted at position
    Release(Point),
    /// Gesture aborted by the platform
    Cancel,
}

impl Event {
    /// Collapse mouse, touch and pointer events into a [`PointerInput`].
    ///
    /// Only the left mouse button takes part in gestures. Returns `None` for
    /// events that are not part of a pointer gesture.
    #[must_use]
    pub fn as_pointer(&self) -> Option<PointerInput> {
        match *self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. }
            | Self::PointerDown { position, .. } => Some(PointerInput::Press(position)),
            Self::MouseMove { position }
            | Self::TouchMove { position, .. }
            | Self::PointerMove { position, .. } => Some(PointerInput::Move(position)),
            Self::MouseUp {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchEnd { position, .. }
            | Self::PointerUp { position, .. } => Some(PointerInput::Release(position)),
            Self::TouchCancel { .. } | Self::PointerCancel { .. } => Some(PointerInput::Cancel),
            _ => None,
        }
    }

    /// Convenience constructor for a single-finger touch start.
    #[must_use]
    pub const fn touch_start(x: f32, y: f32) -> Self {
        Self::TouchStart {
            id: TouchId(0),
            position: Point::new(x, y),
            pressure: 1.0,
        }
    }

    /// Convenience constructor for a single-finger touch move.
    #[must_use]
    pub const fn touch_move(x: f32, y: f32) -> Self {
        Self::TouchMove {
            id: TouchId(0),
            position: Point::new(x, y),
            pressure: 1.0,
        }
    }

    /// Convenience constructor for a single-finger touch end.
    #[must_use]
    pub const fn touch_end(x: f32, y: f32) -> Self {
        Self::TouchEnd {
            id: TouchId(0),
            position: Point::new(x, y),
        }
    }
}
