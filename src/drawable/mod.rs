use egui::{Color32, Pos2};

pub mod sticker;
pub mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::surface::Surface;

/// Styling shared by every drawable on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Color of strokes, dots and sticker glyphs
    pub ink: Color32,
    /// Font size used for sticker glyphs
    pub sticker_size: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            ink: Color32::BLACK,
            sticker_size: 32.0,
        }
    }
}

/// A unit of recorded content
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    /// Continue the gesture that created this drawable.
    ///
    /// Strokes grow by one point, stickers follow the pointer.
    pub fn drag_to(&mut self, pos: Pos2) {
        match self {
            Drawable::Stroke(stroke) => stroke.extend(pos),
            Drawable::Sticker(sticker) => sticker.reposition(pos),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface, style),
            Drawable::Sticker(sticker) => sticker.render(surface, style),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_drag_extends_stroke() {
        let mut drawable = Drawable::from(Stroke::begin(pos2(0.0, 0.0), 3.0));
        drawable.drag_to(pos2(5.0, 5.0));

        let stroke = drawable.as_stroke().unwrap();
        assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(5.0, 5.0)]);
        assert_eq!(stroke.width(), 3.0);
    }

    #[test]
    fn test_drag_moves_sticker() {
        let mut drawable = Drawable::from(Sticker::place(pos2(0.0, 0.0), "🌵"));
        drawable.drag_to(pos2(5.0, 5.0));
        drawable.drag_to(pos2(7.0, 9.0));

        let sticker = drawable.as_sticker().unwrap();
        assert_eq!(sticker.position(), pos2(7.0, 9.0));
        assert_eq!(sticker.glyph(), "🌵");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Drawable::from(Stroke::begin(Pos2::ZERO, 1.0)).kind(), "stroke");
        assert_eq!(Drawable::from(Sticker::place(Pos2::ZERO, "⭐")).kind(), "sticker");
    }
}
