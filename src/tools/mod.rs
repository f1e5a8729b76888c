use egui::Pos2;

use crate::drawable::{Drawable, Sticker, Stroke};
use crate::preview::Preview;

/// The tools a user can pick from the palette.
///
/// Exactly one tool is active at a time; its parameter is sampled when the
/// pointer is pressed, so changing tools never alters work already started.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Freehand pen of a fixed width
    Pen { width: f32 },
    /// Places a glyph that follows the pointer until release
    Sticker { glyph: String },
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen { .. } => "Pen",
            Self::Sticker { .. } => "Sticker",
        }
    }

    /// Text for the palette button
    pub fn label(&self) -> String {
        match self {
            Self::Pen { width } => format!("✏ {width}px"),
            Self::Sticker { glyph } => glyph.clone(),
        }
    }

    /// Start a new drawable at `pos` with this tool's current parameter
    pub fn begin(&self, pos: Pos2) -> Drawable {
        match self {
            Self::Pen { width } => Stroke::begin(pos, *width).into(),
            Self::Sticker { glyph } => Sticker::place(pos, glyph.clone()).into(),
        }
    }

    /// Cursor hint for hovering at `pos`
    pub fn preview(&self, pos: Pos2) -> Preview {
        match self {
            Self::Pen { width } => Preview::Dot {
                center: pos,
                width: *width,
            },
            Self::Sticker { glyph } => Preview::Glyph {
                position: pos,
                glyph: glyph.clone(),
            },
        }
    }
}

/// Active tool plus the palette it was chosen from
#[derive(Debug, Clone)]
pub struct ToolState {
    active: Tool,
    palette: Vec<Tool>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(vec![Tool::Pen { width: 2.0 }])
    }
}

impl ToolState {
    /// The first palette entry becomes active. An empty palette falls back
    /// to a 2px pen.
    pub fn new(mut palette: Vec<Tool>) -> Self {
        if palette.is_empty() {
            palette.push(Tool::Pen { width: 2.0 });
        }
        Self {
            active: palette[0].clone(),
            palette,
        }
    }

    pub fn active(&self) -> &Tool {
        &self.active
    }

    pub fn palette(&self) -> &[Tool] {
        &self.palette
    }

    pub fn select(&mut self, tool: Tool) {
        log::info!("Tool selected: {}", tool.label());
        self.active = tool;
    }

    /// Turn the answer of the "new sticker" prompt into a palette entry.
    ///
    /// Cancelled or blank input changes nothing. Otherwise the glyph is
    /// added to the palette (once) and becomes the active tool.
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> Option<Tool> {
        let glyph = input.map(str::trim).filter(|glyph| !glyph.is_empty())?;
        let tool = Tool::Sticker {
            glyph: glyph.to_owned(),
        };
        if !self.palette.contains(&tool) {
            self.palette.push(tool.clone());
        }
        self.select(tool.clone());
        Some(tool)
    }
}
