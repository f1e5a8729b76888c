use egui::Pos2;

use super::RenderStyle;
use crate::surface::Surface;

/// A glyph dragged into place on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
}

impl Sticker {
    pub fn place(pos: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position: pos,
            glyph: glyph.into(),
        }
    }

    /// Follow the pointer while the placing drag continues
    pub fn reposition(&mut self, pos: Pos2) {
        self.position = pos;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        surface.text(self.position, &self.glyph, style.sticker_size, style.ink);
    }
}
