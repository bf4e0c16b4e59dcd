//! Test harness driving a widget the way a platform loop would.

use crate::gesture::GestureStep;
use slideswitch_core::{
    Constraints, DrawCommand, Event, Point, Rect, RecordingCanvas, TouchId, Widget,
};
use std::any::Any;
use std::collections::VecDeque;

/// Draw commands recorded by one paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Sequence number, starting at 0 for the first paint
    pub index: usize,
    /// Recorded commands
    pub commands: Vec<DrawCommand>,
}

/// Headless render/event loop for a single root widget.
///
/// The root is measured with unbounded constraints and placed at the
/// harness origin. After each event the harness honours whatever the widget
/// requested through [`Widget::take_invalidation`].
pub struct Harness<W: Widget> {
    /// Root widget being driven
    root: W,
    /// Window position of the root's top-left corner
    origin: Point,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Every painted frame
    frames: Vec<Frame>,
    /// Messages published by the root
    messages: Vec<Box<dyn Any>>,
    /// Number of measure/layout passes
    layout_passes: usize,
    /// Consumed flag of the most recent event
    last_consumed: bool,
    /// Last local x sent, for bare `up` steps
    last_x: f32,
}

impl<W: Widget> Harness<W> {
    /// Create a harness and run the first layout and paint.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            origin: Point::ORIGIN,
            event_queue: VecDeque::new(),
            frames: Vec::new(),
            messages: Vec::new(),
            layout_passes: 0,
            last_consumed: false,
            last_x: 0.0,
        };
        harness.root.take_invalidation();
        harness.relayout();
        harness.paint();
        harness
    }

    /// Move the root to a new window position, then relayout and repaint.
    #[must_use]
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Point::new(x, y);
        self.relayout();
        self.paint();
        self
    }

    // === Access ===

    /// The root widget.
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access to the root; call [`Harness::pump`] afterwards.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    // === Event Simulation ===

    /// Deliver one event and service any invalidation it caused.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Finger down at local x.
    pub fn press(&mut self, x: f32) -> &mut Self {
        let p = self.to_window(x);
        self.last_x = x;
        self.dispatch(Event::touch_start(p.x, p.y))
    }

    /// Finger moved to local x.
    pub fn move_to(&mut self, x: f32) -> &mut Self {
        let p = self.to_window(x);
        self.last_x = x;
        self.dispatch(Event::touch_move(p.x, p.y))
    }

    /// Finger lifted at local x.
    pub fn release(&mut self, x: f32) -> &mut Self {
        let p = self.to_window(x);
        self.last_x = x;
        self.dispatch(Event::touch_end(p.x, p.y))
    }

    /// Platform cancels the touch.
    pub fn cancel(&mut self) -> &mut Self {
        self.dispatch(Event::TouchCancel { id: TouchId(0) })
    }

    /// Press and release at the same local x.
    pub fn tap(&mut self, x: f32) -> &mut Self {
        self.press(x).release(x)
    }

    /// Press at `from`, drag to `to`, release there.
    pub fn swipe(&mut self, from: f32, to: f32) -> &mut Self {
        self.press(from).move_to(to).release(to)
    }

    /// Replay a gesture script.
    pub fn run(&mut self, steps: &[GestureStep]) -> &mut Self {
        for step in steps {
            match *step {
                GestureStep::Down(x) => self.press(x),
                GestureStep::Move(x) => self.move_to(x),
                GestureStep::Up(x) => {
                    let x = x.unwrap_or(self.last_x);
                    self.release(x)
                }
                GestureStep::Cancel => self.cancel(),
            };
        }
        self
    }

    /// Service pending invalidation without delivering an event.
    pub fn pump(&mut self) -> &mut Self {
        let pending = self.root.take_invalidation();
        if !pending.is_pending() {
            return self;
        }
        if pending.layout {
            self.relayout();
        }
        if pending.paint {
            self.paint();
        }
        self
    }

    // === Queries ===

    /// Every frame painted so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of frames painted so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of measure/layout passes so far.
    pub const fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Whether the most recent event was consumed.
    pub const fn last_consumed(&self) -> bool {
        self.last_consumed
    }

    /// Messages of type `T` published by the root, oldest first.
    pub fn messages_of<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    // === Assertions ===

    /// Assert the number of painted frames.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_frame_count(&self, expected: usize) -> &Self {
        let actual = self.frame_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} painted frames but found {actual}"
        );
        self
    }

    /// Assert that the last frame drew `resource` at window position `x`.
    ///
    /// # Panics
    ///
    /// Panics if no frame was painted or the resource is not drawn at `x`.
    pub fn assert_drawn_at(&self, resource: &str, x: f32) -> &Self {
        let frame = self.last_frame().expect("no frame painted");
        let found: Vec<f32> = frame
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image {
                    resource: id,
                    bounds,
                } if id.as_str() == resource => Some(bounds.x),
                DrawCommand::Image { .. } => None,
            })
            .collect();
        assert!(
            found.contains(&x),
            "Expected '{resource}' drawn at x={x} in frame {} but found {found:?}",
            frame.index
        );
        self
    }

    // === Internal ===

    fn to_window(&self, local_x: f32) -> Point {
        Point::new(self.origin.x + local_x, self.root.bounds().center().y)
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let response = self.root.event(&event);
            self.last_consumed = response.is_consumed();
            if let Some(message) = response.message {
                self.messages.push(message);
            }
            self.pump();
        }
    }

    fn relayout(&mut self) {
        let size = self.root.measure(Constraints::unbounded());
        self.root.layout(Rect::from_origin_size(self.origin, size));
        self.layout_passes += 1;
        tracing::trace!(pass = self.layout_passes, ?size, "layout");
    }

    fn paint(&mut self) {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        let index = self.frames.len();
        self.frames.push(Frame {
            index,
            commands: canvas.take_commands(),
        });
    }
}
