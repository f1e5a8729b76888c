use std::path::Path;

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::drawable::RenderStyle;
use crate::error::ConfigError;
use crate::tools::Tool;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Settings for the sketchpad. Every field has a default, so a config file
/// only needs to list what it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchpadConfig {
    /// Drawing surface size in pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Linear scale factor applied when exporting
    pub export_scale: u32,
    /// Font size of sticker glyphs on the live canvas
    pub sticker_size: f32,
    /// Ink color as RGBA
    pub ink: [u8; 4],
    /// Pen widths offered in the palette, first one is active at startup
    pub pen_widths: Vec<f32>,
    /// Sticker glyphs offered in the palette
    pub stickers: Vec<String>,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            export_scale: 4,
            sticker_size: 32.0,
            ink: [0, 0, 0, 255],
            pen_widths: vec![2.0, 6.0],
            stickers: vec!["🐲".to_owned(), "🌵".to_owned(), "⭐".to_owned()],
        }
    }
}

impl SketchpadConfig {
    /// Load the file named by `SKETCHPAD_CONFIG`, or the defaults if the
    /// variable is unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid {
                field: "canvas_width/canvas_height",
                reason: format!("{}x{} is empty", self.canvas_width, self.canvas_height),
            });
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid {
                field: "export_scale",
                reason: "must be at least 1".to_owned(),
            });
        }
        if !(self.sticker_size.is_finite() && self.sticker_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "sticker_size",
                reason: format!("{} is not a positive size", self.sticker_size),
            });
        }
        if self.pen_widths.is_empty() {
            return Err(ConfigError::Invalid {
                field: "pen_widths",
                reason: "at least one pen is required".to_owned(),
            });
        }
        if let Some(width) = self
            .pen_widths
            .iter()
            .find(|w| !(w.is_finite() && **w > 0.0))
        {
            return Err(ConfigError::Invalid {
                field: "pen_widths",
                reason: format!("{width} is not a positive width"),
            });
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width as f32, self.canvas_height as f32)
    }

    pub fn render_style(&self) -> RenderStyle {
        let [r, g, b, a] = self.ink;
        RenderStyle {
            ink: Color32::from_rgba_unmultiplied(r, g, b, a),
            sticker_size: self.sticker_size,
        }
    }

    /// Pens first, then stickers; blank glyphs are skipped
    pub fn palette(&self) -> Vec<Tool> {
        let pens = self.pen_widths.iter().map(|&width| Tool::Pen { width });
        let stickers = self
            .stickers
            .iter()
            .map(|glyph| glyph.trim())
            .filter(|glyph| !glyph.is_empty())
            .map(|glyph| Tool::Sticker {
                glyph: glyph.to_owned(),
            });
        pens.chain(stickers).collect()
    }
}
