use egui::Pos2;

use super::RenderStyle;
use crate::surface::Surface;

/// Freehand polyline recorded while the pointer is held down.
///
/// The width is sampled once, when the pointer is pressed, and never changes
/// afterwards. Points are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
}

impl Stroke {
    /// Start a stroke with a single point
    pub fn begin(pos: Pos2, width: f32) -> Self {
        Self {
            points: vec![pos],
            width,
        }
    }

    /// Append a raw point; no smoothing, no deduplication
    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self.points.as_slice() {
            [] => {}
            // A zero-length polyline draws nothing; show the press as a dot.
            [single] => surface.dot(*single, self.width / 2.0, style.ink),
            points => surface.polyline(points, self.width, style.ink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_begin_has_one_point() {
        let stroke = Stroke::begin(pos2(3.0, 4.0), 2.0);
        assert_eq!(stroke.points(), &[pos2(3.0, 4.0)]);
        assert_eq!(stroke.width(), 2.0);
    }

    #[test]
    fn test_extend_keeps_duplicates() {
        let mut stroke = Stroke::begin(pos2(1.0, 1.0), 2.0);
        stroke.extend(pos2(1.0, 1.0));
        stroke.extend(pos2(2.0, 1.0));
        assert_eq!(stroke.points().len(), 3);
    }
}
