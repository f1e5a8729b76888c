use egui::{Color32, Painter, Pos2, Rect};

/// Anything the compositor can draw onto.
///
/// All positions are canvas-local: `(0, 0)` is the top-left corner of the
/// drawing area regardless of where the surface lives on screen.
pub trait Surface {
    /// Wipe the whole surface back to its background
    fn clear(&mut self);

    /// Stroke a connected polyline through `points` (not filled)
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Fill a circle centered at `center`
    fn dot(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` with its bottom-left corner at `anchor`
    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32);
}

/// Live surface backed by an egui painter.
///
/// The painter works in screen coordinates, so every call is offset by the
/// top-left corner of the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        // egui repaints every frame from scratch, so clearing only has to
        // restore the canvas background.
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(screen, egui::Stroke::new(width, color)));
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(anchor),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(size),
            color,
        );
    }
}

