//! Transient user notifications ("toasts").

use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a toast stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastDuration {
    /// About two seconds
    #[default]
    Short,
    /// About three and a half seconds
    Long,
}

impl ToastDuration {
    /// Display time in milliseconds.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Short => 2000,
            Self::Long => 3500,
        }
    }
}

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Message text
    pub text: String,
    /// Display duration
    pub duration: ToastDuration,
}

impl Toast {
    /// Create a short toast.
    #[must_use]
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: ToastDuration::Short,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Surface that shows toasts.
pub trait Notifier {
    /// Show a toast.
    fn show(&mut self, toast: Toast);
}

impl<F: FnMut(Toast)> Notifier for F {
    fn show(&mut self, toast: Toast) {
        self(toast);
    }
}

/// Notifier that keeps every toast in memory.
#[derive(Debug, Clone, Default)]
pub struct ToastLog {
    toasts: Vec<Toast>,
}

impl ToastLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast shown, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The most recent toast.
    #[must_use]
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Remove and return every toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

impl Notifier for ToastLog {
    fn show(&mut self, toast: Toast) {
        tracing::info!(text = %toast.text, duration_ms = toast.duration.millis(), "toast");
        self.toasts.push(toast);
    }
}
