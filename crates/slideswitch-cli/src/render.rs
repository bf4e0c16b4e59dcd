//! One-line text rendering of a painted toggle.

use slideswitch_core::{Bitmap, Canvas, Point};

/// Canvas that rasterizes bitmaps into a single row of characters.
///
/// The first bitmap drawn is the track and fills its columns with `-`;
/// anything drawn afterwards is the knob and fills with `#`.
#[derive(Debug)]
pub(crate) struct TextCanvas {
    /// Pixels per character cell
    scale: f32,
    /// X coordinate mapped to column 0
    left: f32,
    cells: Vec<char>,
    drawn: usize,
}

impl TextCanvas {
    pub(crate) fn new(left: f32, scale: f32) -> Self {
        Self {
            scale: scale.max(1.0),
            left,
            cells: Vec::new(),
            drawn: 0,
        }
    }

    pub(crate) fn render(&self) -> String {
        format!("[{}]", self.cells.iter().collect::<String>())
    }
}

impl Canvas for TextCanvas {
    fn draw_image(&mut self, image: &Bitmap, origin: Point) {
        let fill = if self.drawn == 0 { '-' } else { '#' };
        self.drawn += 1;

        let start = ((origin.x - self.left) / self.scale).round().max(0.0) as usize;
        let end = ((origin.x - self.left + image.width as f32) / self.scale)
            .round()
            .max(0.0) as usize;
        if self.cells.len() < end {
            self.cells.resize(end, ' ');
        }
        for cell in &mut self.cells[start.min(end)..end] {
            *cell = fill;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slideswitch_core::Color;

    #[test]
    fn test_closed_toggle() {
        let mut canvas = TextCanvas::new(0.0, 10.0);
        canvas.draw_image(&Bitmap::new("bg", 120, 40, Color::BLACK), Point::ORIGIN);
        canvas.draw_image(&Bitmap::new("knob", 40, 40, Color::WHITE), Point::ORIGIN);
        assert_eq!(canvas.render(), "[####--------]");
    }

    #[test]
    fn test_open_toggle_with_offset() {
        let mut canvas = TextCanvas::new(100.0, 10.0);
        canvas.draw_image(
            &Bitmap::new("bg", 120, 40, Color::BLACK),
            Point::new(100.0, 0.0),
        );
        canvas.draw_image(
            &Bitmap::new("knob", 40, 40, Color::WHITE),
            Point::new(180.0, 0.0),
        );
        assert_eq!(canvas.render(), "[--------####]");
    }

    #[test]
    fn test_empty() {
        assert_eq!(TextCanvas::new(0.0, 0.0).render(), "[]");
    }
}
