use egui::Pos2;

use crate::drawable::RenderStyle;
use crate::surface::Surface;

/// Cursor hint shown while the pointer hovers over the canvas.
///
/// Never recorded in history; recomputed on every idle pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Dot with the diameter of the active pen
    Dot { center: Pos2, width: f32 },
    /// The active sticker glyph, styled like the final sticker
    Glyph { position: Pos2, glyph: String },
}

impl Preview {
    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        match self {
            Preview::Dot { center, width } => surface.dot(*center, width / 2.0, style.ink),
            Preview::Glyph { position, glyph } => {
                surface.text(*position, glyph, style.sticker_size, style.ink);
            }
        }
    }
}
