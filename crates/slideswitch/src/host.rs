//! The host screen: one toggle whose changes surface as toasts.

use crate::error::HostError;
use crate::notifier::{Notifier, Toast};
use slideswitch_core::{
    AssetSource, Canvas, Constraints, Event, EventResponse, Invalidation, LayoutResult, Rect,
    Size, TypeId, Widget,
};
use slideswitch_widgets::ToggleView;
use slideswitch_yaml::Layout;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Toast text shown when the toggle opens.
pub const OPEN_MESSAGE: &str = "toggle open";
/// Toast text shown when the toggle closes.
pub const CLOSE_MESSAGE: &str = "toggle close";

/// Toast announcing a toggle state.
#[must_use]
pub fn state_toast(open: bool) -> Toast {
    Toast::short(if open { OPEN_MESSAGE } else { CLOSE_MESSAGE })
}

/// Screen holding a single toggle.
///
/// The toggle's listener only keeps a weak reference to the notifier, so the
/// widget never extends the screen's lifetime.
pub struct HostScreen<N: Notifier + 'static> {
    toggle: ToggleView,
    notifier: Rc<RefCell<N>>,
}

impl<N: Notifier + 'static> HostScreen<N> {
    /// Wrap an already configured toggle and attach the toast listener.
    pub fn new(mut toggle: ToggleView, notifier: N) -> Self {
        let notifier = Rc::new(RefCell::new(notifier));
        let weak = Rc::downgrade(&notifier);
        toggle.set_on_toggle_change_listener(move |open| {
            if let Some(notifier) = weak.upgrade() {
                notifier.borrow_mut().show(state_toast(open));
            }
        });
        tracing::info!(open = toggle.is_open(), "host screen created");
        Self { toggle, notifier }
    }

    /// Build the screen from a validated layout, using its resources as assets.
    pub fn from_layout(layout: &Layout, notifier: N) -> Result<Self, HostError> {
        layout.validate()?;
        let assets: Rc<dyn AssetSource> = Rc::new(layout.catalog()?);
        Self::with_assets(assets, layout, notifier)
    }

    /// Build the screen from a layout, loading bitmaps from `assets`.
    pub fn with_assets(
        assets: Rc<dyn AssetSource>,
        layout: &Layout,
        notifier: N,
    ) -> Result<Self, HostError> {
        let toggle = ToggleView::from_attributes(assets, &layout.toggle)?;
        Ok(Self::new(toggle, notifier))
    }

    /// Parse a YAML layout and build the screen from it.
    pub fn from_yaml(yaml: &str, notifier: N) -> Result<Self, HostError> {
        let layout = Layout::parse(yaml)?;
        Self::from_layout(&layout, notifier)
    }

    /// The toggle.
    pub const fn toggle(&self) -> &ToggleView {
        &self.toggle
    }

    /// Mutable access to the toggle.
    pub fn toggle_mut(&mut self) -> &mut ToggleView {
        &mut self.toggle
    }

    /// The notifier.
    ///
    /// # Panics
    ///
    /// Panics if called from inside the notifier itself.
    pub fn notifier(&self) -> Ref<'_, N> {
        self.notifier.borrow()
    }

    /// Tear down the screen, keeping the toggle.
    ///
    /// The toggle keeps its listener, which becomes a no-op once the
    /// notifier is gone.
    pub fn into_toggle(self) -> ToggleView {
        self.toggle
    }
}

impl<N: Notifier + 'static> Widget for HostScreen<N> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.toggle.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.toggle.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.toggle.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        self.toggle.event(event)
    }

    fn take_invalidation(&mut self) -> Invalidation {
        self.toggle.take_invalidation()
    }

    fn is_interactive(&self) -> bool {
        self.toggle.is_interactive()
    }

    fn test_id(&self) -> Option<&str> {
        Widget::test_id(&self.toggle)
    }

    fn bounds(&self) -> Rect {
        Widget::bounds(&self.toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::ToastLog;
    use slideswitch_core::{AssetCatalog, Bitmap, Color};

    const LAYOUT: &str = r##"
resources:
  switch_background: { width: 120, height: 40, color: "#9e9e9e" }
  slide_button: { width: 40, height: 40, color: "#ffffff" }
toggle:
  id: tv_toggle
  toggle_background: switch_background
  toggle_slide: slide_button
"##;

    #[test]
    fn test_state_toast_messages() {
        assert_eq!(state_toast(true).text, "toggle open");
        assert_eq!(state_toast(false).text, "toggle close");
    }

    #[test]
    fn test_from_yaml_attaches_listener() {
        let host = HostScreen::from_yaml(LAYOUT, ToastLog::new()).unwrap();
        assert!(host.toggle().has_listener());
        assert!(!host.toggle().is_open());
        assert_eq!(Widget::test_id(&host), Some("tv_toggle"));
    }

    #[test]
    fn test_from_yaml_invalid_layout() {
        let err = HostScreen::from_yaml("toggle:\n  toggle_slide: nope\n", ToastLog::new())
            .err()
            .unwrap();
        assert!(matches!(err, HostError::Layout(_)));
    }

    #[test]
    fn test_with_assets_missing_bitmap() {
        let layout = Layout::parse(LAYOUT).unwrap();
        let assets: Rc<dyn AssetSource> = Rc::new(AssetCatalog::new());
        let err = HostScreen::with_assets(assets, &layout, ToastLog::new())
            .err()
            .unwrap();
        assert!(matches!(err, HostError::Asset(_)));
    }

    #[test]
    fn test_gesture_shows_toast() {
        let mut host = HostScreen::from_yaml(LAYOUT, ToastLog::new()).unwrap();
        let size = host.measure(Constraints::unbounded());
        host.layout(Rect::from_size(size));

        host.event(&Event::touch_start(100.0, 20.0));
        host.event(&Event::touch_end(100.0, 20.0));
        assert_eq!(host.notifier().toasts(), &[state_toast(true)]);

        host.event(&Event::touch_start(10.0, 20.0));
        host.event(&Event::touch_end(10.0, 20.0));
        assert_eq!(host.notifier().last(), Some(&state_toast(false)));
        assert_eq!(host.notifier().toasts().len(), 2);
    }

    #[test]
    fn test_programmatic_state_shows_no_toast() {
        let mut host = HostScreen::from_yaml(LAYOUT, ToastLog::new()).unwrap();
        host.toggle_mut().set_toggle_state(true);
        assert!(host.notifier().toasts().is_empty());
    }

    #[test]
    fn test_closure_notifier_and_prebuilt_toggle() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let assets: Rc<dyn AssetSource> = Rc::new(
            AssetCatalog::new()
                .with(Bitmap::new("bg", 100, 30, Color::BLACK))
                .with(Bitmap::new("knob", 30, 30, Color::WHITE)),
        );
        let mut toggle = ToggleView::new(assets);
        toggle.set_background_asset("bg").unwrap();
        toggle.set_slide_asset("knob").unwrap();
        toggle.layout(Rect::new(0.0, 0.0, 100.0, 30.0));

        let sink = Rc::clone(&seen);
        let mut host = HostScreen::new(toggle, move |toast: Toast| {
            sink.borrow_mut().push(toast.text);
        });
        host.event(&Event::touch_start(90.0, 15.0));
        host.event(&Event::touch_end(90.0, 15.0));

        assert_eq!(*seen.borrow(), vec!["toggle open".to_string()]);
    }

    #[test]
    fn test_toggle_outlives_host() {
        let host = HostScreen::from_yaml(LAYOUT, ToastLog::new()).unwrap();
        let mut toggle = host.into_toggle();
        toggle.layout(Rect::new(0.0, 0.0, 120.0, 40.0));

        toggle.event(&Event::touch_start(100.0, 20.0));
        toggle.event(&Event::touch_end(100.0, 20.0));
        assert!(toggle.is_open());
    }
}
