//! Raster export of the committed drawing.
//!
//! The drawing is re-rendered offscreen at a higher resolution on an opaque
//! background, independent of whatever is currently on screen.

use base64::Engine as _;
use egui::{Color32, Vec2};
use image::ImageEncoder;

use crate::drawable::{Drawable, RenderStyle};
use crate::error::ExportError;
use crate::raster::RasterSurface;
use crate::renderer::{Frame, Renderer};

/// Default name offered for the downloaded file
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Configuration for raster export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Linear scale factor relative to the live canvas
    pub scale: u32,
    /// Background fill; the live canvas has none, exports are opaque
    pub background: Color32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 4,
            background: Color32::WHITE,
        }
    }
}

/// An encoded PNG ready to be offered as a download
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedImage {
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

/// Render `drawables` onto a fresh offscreen surface and encode it as PNG.
///
/// The surface only lives for the duration of this call.
pub fn export_png(
    drawables: &[Drawable],
    canvas_size: Vec2,
    style: &RenderStyle,
    config: &ExportConfig,
) -> Result<ExportedImage, ExportError> {
    let scale = config.scale as f32;
    let width = (canvas_size.x * scale).round().max(0.0) as u32;
    let height = (canvas_size.y * scale).round().max(0.0) as u32;

    let mut surface = RasterSurface::new(width, height, scale, config.background)?;
    Renderer::new(*style).repaint(
        &mut surface,
        Frame {
            committed: drawables,
            in_progress: None,
            preview: None,
        },
    );

    let rgba = surface.to_rgba();
    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png).write_image(
        &rgba,
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;

    log::info!(
        "Exported {} drawables to {width}x{height} PNG ({} bytes)",
        drawables.len(),
        png.len()
    );

    Ok(ExportedImage { width, height, png })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature() {
        let image = export_png(
            &[],
            Vec2::new(10.0, 10.0),
            &RenderStyle::default(),
            &ExportConfig::default(),
        )
        .unwrap();
        assert_eq!(&image.png[0..4], &[137, 80, 78, 71]);
        assert_eq!((image.width, image.height), (40, 40));
    }

    #[test]
    fn test_data_uri_prefix() {
        let image = ExportedImage {
            width: 1,
            height: 1,
            png: vec![1, 2, 3],
        };
        assert_eq!(image.to_data_uri(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let result = export_png(
            &[],
            Vec2::ZERO,
            &RenderStyle::default(),
            &ExportConfig::default(),
        );
        assert!(matches!(result, Err(ExportError::InvalidDimensions { .. })));
    }
}
