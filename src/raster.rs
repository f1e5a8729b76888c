use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use egui::{Color32, Pos2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};

use crate::error::ExportError;
use crate::surface::Surface;

/// Fonts searched in order when rasterizing a glyph. These are the same
/// faces egui uses on the live canvas, so exports match what was on screen.
fn load_fonts() -> Vec<FontRef<'static>> {
    [
        ("Ubuntu-Light", epaint_default_fonts::UBUNTU_LIGHT),
        ("NotoEmoji-Regular", epaint_default_fonts::NOTO_EMOJI_REGULAR),
        ("emoji-icon-font", epaint_default_fonts::EMOJI_ICON),
    ]
    .into_iter()
    .filter_map(|(name, bytes)| match FontRef::try_from_slice(bytes) {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Skipping font {name}: {err}");
            None
        }
    })
    .collect()
}

/// Offscreen surface that draws canvas-local coordinates into a pixmap
/// `scale` times larger than the canvas.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    background: Color32,
    fonts: Vec<FontRef<'static>>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32, background: Color32) -> Result<Self, ExportError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(ExportError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            scale,
            background,
            fonts: load_fonts(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight (non-premultiplied) RGBA bytes, row-major
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            out.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        out
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let mut paint = Paint::default();
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    /// Source-over blend of `color` at `coverage` onto one pixel
    fn blend(&mut self, x: i32, y: i32, coverage: f32, color: Color32) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let index = y as usize * self.width() as usize + x as usize;
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let src_a = coverage.clamp(0.0, 1.0) * f32::from(a) / 255.0;
        if src_a <= 0.0 {
            return;
        }

        let pixels = self.pixmap.pixels_mut();
        let dst = pixels[index];
        let inv = 1.0 - src_a;
        let out_a = (src_a * 255.0 + f32::from(dst.alpha()) * inv).round().min(255.0);
        let channel = |src: u8, dst: u8| {
            (f32::from(src) * src_a + f32::from(dst) * inv)
                .round()
                .min(out_a) as u8
        };
        let blended = PremultipliedColorU8::from_rgba(
            channel(r, dst.red()),
            channel(g, dst.green()),
            channel(b, dst.blue()),
            out_a as u8,
        );
        if let Some(blended) = blended {
            pixels[index] = blended;
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let mut builder = PathBuilder::new();
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(&path, &Self::paint(color), &stroke, transform, None);
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let transform = self.transform();
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            transform,
            None,
        );
    }

    fn text(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        let fonts = std::mem::take(&mut self.fonts);
        let Some(primary) = fonts.first() else {
            log::warn!("No fonts available, skipping text {text:?}");
            return;
        };

        let px = PxScale::from(size * self.scale);
        // Anchor is the bottom-left of the line box; descent is negative.
        let baseline = anchor.y * self.scale + primary.as_scaled(px).descent();
        let mut caret = anchor.x * self.scale;

        for c in text.chars() {
            let Some(font) = fonts.iter().find(|font| font.glyph_id(c).0 != 0) else {
                continue;
            };
            let id = font.glyph_id(c);
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    self.blend(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        coverage,
                        color,
                    );
                });
            }
            caret += font.as_scaled(px).h_advance(id);
        }

        self.fonts = fonts;
    }
}
