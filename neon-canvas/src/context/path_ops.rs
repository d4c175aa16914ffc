//! Path building operations for CanvasContext.

use super::CanvasContext;
use crate::geometry::RectParams;

impl CanvasContext {
    /// Begin a new, empty path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
    }

    /// Start a new subpath at (x, y).
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.path_builder.move_to(x, y);
    }

    /// Add a straight line from the current point to (x, y).
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.path_builder.line_to(x, y);
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        self.path_builder.close();
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&mut self, params: &RectParams) {
        let RectParams {
            x,
            y,
            width,
            height,
        } = *params;
        self.path_builder.move_to(x, y);
        self.path_builder.line_to(x + width, y);
        self.path_builder.line_to(x + width, y + height);
        self.path_builder.line_to(x, y + height);
        self.path_builder.close();
    }

    /// Whether the current path holds any drawable geometry.
    pub fn has_path(&self) -> bool {
        self.path_builder.clone().finish().is_some()
    }
}
