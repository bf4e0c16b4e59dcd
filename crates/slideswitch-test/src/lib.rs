//! Testing harness for slideswitch widgets.
//!
//! [`Harness`] plays the part of the platform render/event loop: it
//! measures, lays out and paints a widget whenever the widget asks for it,
//! and feeds scripted gestures in between.

#![allow(clippy::missing_panics_doc)]

mod gesture;
mod harness;

pub use gesture::{GestureParseError, GestureStep};
pub use harness::{Frame, Harness};
