//! Fill, stroke and paint operations for CanvasContext.

use super::CanvasContext;
use crate::geometry::CanvasColor;
use tiny_skia::Transform;

impl CanvasContext {
    /// Flood the whole surface with the fill color.
    pub fn paint(&mut self) {
        log::debug!(target: "canvas", "paint {:?}", self.state.fill_color);
        let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32)
        else {
            return;
        };
        let paint = solid_paint(self.state.fill_color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Fill the current path using the non-zero winding rule.
    ///
    /// The path is kept, so further strokes or fills reuse it.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill {:?}", self.state.fill_color);
        // Clone the path builder so we don't consume it - stroke() may follow
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let paint = solid_paint(self.state.fill_color);
        self.pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke the current path with the current line settings.
    ///
    /// The path is kept, so successive strokes layer on the same outline.
    pub fn stroke(&mut self) {
        log::debug!(
            target: "canvas",
            "stroke {:?} width {}",
            self.state.stroke_color,
            self.state.line_width
        );
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let stroke = self.state.to_stroke();
        let paint = solid_paint(self.state.stroke_color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn solid_paint(color: CanvasColor) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color(color.into());
    paint
}
