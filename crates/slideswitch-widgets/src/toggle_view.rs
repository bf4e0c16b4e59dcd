//! Bitmap slide-toggle widget.
//!
//! The toggle is drawn from two bitmaps: a background track and a slide knob
//! that rests at either end of it. A press inside the widget starts a drag
//! session during which the knob follows the pointer; releasing snaps the
//! toggle open when the last pointer position lies past the middle of the
//! track.

use slideswitch_core::{
    AssetError, AssetSource, Bitmap, Canvas, Constraints, Event, EventResponse, Invalidation,
    LayoutResult, Point, PointerInput, Rect, ResourceId, Size, TypeId, Widget,
};
use slideswitch_yaml::ToggleAttributes;
use std::fmt;
use std::rc::Rc;

/// Message emitted when a gesture changes the toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChanged {
    /// The new toggle state
    pub open: bool,
}

/// Transient per-gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    /// No pointer is down
    #[default]
    Idle,
    /// A pointer is down; `x` is its last position relative to the widget
    Dragging {
        /// Local x coordinate
        x: f32,
    },
}

impl DragSession {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

type ToggleChangeListener = Box<dyn FnMut(bool)>;

/// Toggle switch drawn from a background and a slide bitmap.
pub struct ToggleView {
    /// Where bitmaps are loaded from
    assets: Rc<dyn AssetSource>,
    /// Background track
    background: Option<Bitmap>,
    /// Slide knob
    slide: Option<Bitmap>,
    /// Current state
    open: bool,
    /// Active gesture
    drag: DragSession,
    /// Background width minus slide width, set at layout
    travel_range: f32,
    /// State change callback
    listener: Option<ToggleChangeListener>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Pending redraw requests
    invalidation: Invalidation,
}

impl fmt::Debug for ToggleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleView")
            .field("background", &self.background)
            .field("slide", &self.slide)
            .field("open", &self.open)
            .field("drag", &self.drag)
            .field("travel_range", &self.travel_range)
            .field("has_listener", &self.listener.is_some())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl ToggleView {
    /// Create a closed toggle with no bitmaps.
    #[must_use]
    pub fn new(assets: Rc<dyn AssetSource>) -> Self {
        Self {
            assets,
            background: None,
            slide: None,
            open: false,
            drag: DragSession::Idle,
            travel_range: 0.0,
            listener: None,
            test_id_value: None,
            bounds: Rect::default(),
            invalidation: Invalidation::default(),
        }
    }

    /// Create a toggle from markup attributes.
    ///
    /// Attributes that name no resource leave the corresponding bitmap unset.
    pub fn from_attributes(
        assets: Rc<dyn AssetSource>,
        attributes: &ToggleAttributes,
    ) -> Result<Self, AssetError> {
        let mut toggle = Self::new(assets);
        if let Some(id) = &attributes.toggle_background {
            toggle.set_background_asset(id.clone())?;
        }
        if let Some(id) = &attributes.toggle_slide {
            toggle.set_slide_asset(id.clone())?;
        }
        toggle.set_toggle_state(attributes.toggle_state);
        toggle.test_id_value.clone_from(&attributes.id);
        Ok(toggle)
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Load and install the background bitmap.
    ///
    /// On error the previous bitmap stays in place.
    pub fn set_background_asset(&mut self, id: impl Into<ResourceId>) -> Result<(), AssetError> {
        let bitmap = self.assets.load_image(&id.into())?;
        tracing::debug!(id = %bitmap.id, width = bitmap.width, "toggle background set");
        self.background = Some(bitmap);
        self.invalidation.request_layout();
        Ok(())
    }

    /// Load and install the slide bitmap.
    ///
    /// On error the previous bitmap stays in place.
    pub fn set_slide_asset(&mut self, id: impl Into<ResourceId>) -> Result<(), AssetError> {
        let bitmap = self.assets.load_image(&id.into())?;
        tracing::debug!(id = %bitmap.id, width = bitmap.width, "toggle slide set");
        self.slide = Some(bitmap);
        self.invalidation.request_layout();
        Ok(())
    }

    /// Set the state without notifying the listener.
    pub fn set_toggle_state(&mut self, open: bool) {
        self.open = open;
        self.invalidation.request_paint();
    }

    /// Register the state change listener, replacing any previous one.
    pub fn set_on_toggle_change_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the state change listener.
    pub fn clear_on_toggle_change_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Get current state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Get the active gesture.
    #[must_use]
    pub const fn drag_session(&self) -> DragSession {
        self.drag
    }

    /// Horizontal distance the knob can travel, as of the last layout.
    #[must_use]
    pub const fn travel_range(&self) -> f32 {
        self.travel_range
    }

    /// Background bitmap, if loaded.
    #[must_use]
    pub const fn background(&self) -> Option<&Bitmap> {
        self.background.as_ref()
    }

    /// Slide bitmap, if loaded.
    #[must_use]
    pub const fn slide(&self) -> Option<&Bitmap> {
        self.slide.as_ref()
    }

    /// Knob left edge relative to the widget origin.
    ///
    /// While dragging the knob is centred on the pointer and kept inside
    /// `[0, travel_range]`; otherwise it rests at the end matching the state.
    #[must_use]
    pub fn knob_left(&self) -> f32 {
        match self.drag {
            DragSession::Dragging { x } => {
                let half = self.slide.as_ref().map_or(0.0, |s| s.size().width / 2.0);
                // max/min rather than clamp: a NaN pointer pins to the left edge
                (x - half).max(0.0).min(self.travel_range)
            }
            DragSession::Idle if self.open => self.travel_range,
            DragSession::Idle => 0.0,
        }
    }

    fn local_x(&self, position: Point) -> f32 {
        position.x - self.bounds.x
    }

    /// End the drag session and commit the state it points at.
    ///
    /// Returns the new state when it changed. The state only changes when a
    /// listener is registered to hear about it.
    fn finish_drag(&mut self) -> Option<bool> {
        let DragSession::Dragging { x } = std::mem::take(&mut self.drag) else {
            return None;
        };
        let width = self.background.as_ref()?.size().width;
        let candidate = x > width / 2.0;
        if candidate == self.open {
            tracing::trace!(x, open = self.open, "release without state change");
            return None;
        }
        let Some(listener) = self.listener.as_mut() else {
            tracing::debug!(x, candidate, "release ignored: no toggle listener");
            return None;
        };
        self.open = candidate;
        tracing::debug!(x, open = candidate, "toggle changed");
        listener(candidate);
        Some(candidate)
    }
}

impl Widget for ToggleView {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Size is the background bitmap's pixel size, whatever the constraints.
    fn measure(&self, _constraints: Constraints) -> Size {
        self.background.as_ref().map_or_else(
            || {
                tracing::warn!("toggle measured without a background bitmap");
                Size::ZERO
            },
            Bitmap::size,
        )
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.travel_range = match (&self.background, &self.slide) {
            (Some(bg), Some(slide)) => bg.width.saturating_sub(slide.width) as f32,
            _ => 0.0,
        };
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(background) = &self.background else {
            tracing::warn!("toggle painted without a background bitmap");
            return;
        };
        let origin = self.bounds.origin();
        canvas.draw_image(background, origin);

        let Some(slide) = &self.slide else {
            tracing::warn!("toggle painted without a slide bitmap");
            return;
        };
        canvas.draw_image(slide, Point::new(origin.x + self.knob_left(), origin.y));
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        let Some(input) = event.as_pointer() else {
            return EventResponse::ignored();
        };

        let changed = match input {
            PointerInput::Press(position) => {
                if !self.drag.is_dragging() && !self.bounds.contains_point(&position) {
                    return EventResponse::ignored();
                }
                let x = self.local_x(position);
                tracing::trace!(x, "drag started");
                self.drag = DragSession::Dragging { x };
                None
            }
            // Moves, releases and cancels only matter to a gesture this widget owns.
            _ if !self.drag.is_dragging() => return EventResponse::ignored(),
            PointerInput::Move(position) => {
                let local = self.local_x(position);
                if let DragSession::Dragging { x } = &mut self.drag {
                    *x = local;
                }
                None
            }
            PointerInput::Release(_) => self.finish_drag(),
            PointerInput::Cancel => {
                tracing::trace!("drag cancelled");
                self.drag = DragSession::Idle;
                None
            }
        };

        // Every event of an owned gesture repaints, changed or not.
        self.invalidation.request_paint();

        let response = EventResponse::consumed();
        match changed {
            Some(open) => response.with_message(ToggleChanged { open }),
            None => response,
        }
    }

    fn take_invalidation(&mut self) -> Invalidation {
        self.invalidation.take()
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
