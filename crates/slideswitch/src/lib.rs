//! slideswitch: a bitmap slide toggle and the screen that hosts it.
//!
//! ```
//! use slideswitch::{HostScreen, ToastLog};
//! use slideswitch_core::{Constraints, Event, Rect, Widget};
//!
//! let yaml = r##"
//! resources:
//!   switch_background: { width: 120, height: 40, color: "#9e9e9e" }
//!   slide_button: { width: 40, height: 40, color: "#ffffff" }
//! toggle:
//!   toggle_background: switch_background
//!   toggle_slide: slide_button
//! "##;
//!
//! let mut screen = HostScreen::from_yaml(yaml, ToastLog::new()).expect("valid layout");
//! let size = screen.measure(Constraints::unbounded());
//! screen.layout(Rect::from_size(size));
//!
//! screen.event(&Event::touch_start(10.0, 20.0));
//! screen.event(&Event::touch_move(110.0, 20.0));
//! screen.event(&Event::touch_end(110.0, 20.0));
//!
//! assert!(screen.toggle().is_open());
//! assert_eq!(screen.notifier().last().map(|t| t.text.as_str()), Some("toggle open"));
//! ```

mod error;
mod host;
mod notifier;

pub use error::HostError;
pub use host::{state_toast, HostScreen, CLOSE_MESSAGE, OPEN_MESSAGE};
pub use notifier::{Notifier, Toast, ToastDuration, ToastLog};
