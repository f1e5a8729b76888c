// src/renderer.rs
use crate::drawable::{Drawable, RenderStyle};
use crate::preview::Preview;
use crate::surface::Surface;

/// Everything the compositor needs to produce one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub committed: &'a [Drawable],
    pub in_progress: Option<&'a Drawable>,
    pub preview: Option<&'a Preview>,
}

/// Full-redraw compositor.
///
/// Every repaint clears the surface and draws from scratch, so undo, redo
/// and clear always produce a correct image no matter what was drawn before.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Clear, draw committed content back-to-front, then the drawable still
    /// under the pointer, then the preview on top.
    pub fn repaint(&self, surface: &mut dyn Surface, frame: Frame<'_>) {
        surface.clear();
        for drawable in frame.committed {
            drawable.render(surface, &self.style);
        }
        if let Some(drawable) = frame.in_progress {
            drawable.render(surface, &self.style);
        }
        if let Some(preview) = frame.preview {
            preview.render(surface, &self.style);
        }
    }
}
