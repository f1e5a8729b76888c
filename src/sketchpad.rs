use egui::{Key, Modifiers, Pos2, Vec2};

use crate::config::SketchpadConfig;
use crate::drawable::{Drawable, RenderStyle};
use crate::error::ExportError;
use crate::export::{self, ExportConfig, ExportedImage};
use crate::history::History;
use crate::input::InputEvent;
use crate::preview::Preview;
use crate::renderer::Frame;
use crate::tools::{Tool, ToolState};

/// What a state transition changed, so the host knows what to redraw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// Committed history or the drawable under the pointer changed
    pub content: bool,
    /// The hover preview appeared, moved or disappeared
    pub preview: bool,
}

impl Changes {
    pub const NONE: Self = Self {
        content: false,
        preview: false,
    };
    pub const CONTENT: Self = Self {
        content: true,
        preview: false,
    };
    pub const PREVIEW: Self = Self {
        content: false,
        preview: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.content && !self.preview
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            content: self.content || other.content,
            preview: self.preview || other.preview,
        }
    }
}

/// The whole sketchpad: history, tools, the gesture in progress and the
/// hover preview.
///
/// Every input is a synchronous transition on this struct. Nothing here
/// needs a rendering surface; drawing goes through [`Sketchpad::frame`].
#[derive(Debug, Clone)]
pub struct Sketchpad {
    history: History,
    tools: ToolState,
    /// Drawable being built by the current press/drag, if any
    in_progress: Option<Drawable>,
    /// Only present while hovering with no button held
    preview: Option<Preview>,
    canvas_size: Vec2,
    style: RenderStyle,
    export: ExportConfig,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            history: History::new(),
            tools: ToolState::new(config.palette()),
            in_progress: None,
            preview: None,
            canvas_size: config.canvas_size(),
            style: config.render_style(),
            export: ExportConfig {
                scale: config.export_scale,
                ..Default::default()
            },
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn in_progress(&self) -> Option<&Drawable> {
        self.in_progress.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Everything the compositor needs for the next repaint
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            committed: self.history.committed(),
            in_progress: self.in_progress.as_ref(),
            preview: self.preview.as_ref(),
        }
    }

    /// Dispatch a single input event
    pub fn handle(&mut self, event: &InputEvent) -> Changes {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(*pos),
            InputEvent::PointerMove { pos } => self.pointer_move(*pos),
            InputEvent::PointerUp { pos } => self.pointer_up(*pos),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::KeyDown { key, modifiers } => self.shortcut(*key, *modifiers),
        }
    }

    /// Start a new drawable with the active tool. New work invalidates the
    /// redo history, and the preview goes away while the button is held.
    pub fn pointer_down(&mut self, pos: Pos2) -> Changes {
        if let Some(abandoned) = self.in_progress.take() {
            log::warn!("Pointer pressed twice, dropping unfinished {}", abandoned.kind());
        }
        let drawable = self.tools.active().begin(pos);
        log::debug!("Begin {} at ({}, {})", drawable.kind(), pos.x, pos.y);
        self.in_progress = Some(drawable);
        self.history.clear_redo();

        Changes {
            content: true,
            preview: self.preview.take().is_some(),
        }
    }

    /// Extend the drawable in progress, or move the hover preview
    pub fn pointer_move(&mut self, pos: Pos2) -> Changes {
        match &mut self.in_progress {
            Some(drawable) => {
                drawable.drag_to(pos);
                Changes::CONTENT
            }
            None => {
                self.preview = Some(self.tools.active().preview(pos));
                Changes::PREVIEW
            }
        }
    }

    /// Commit the drawable in progress
    pub fn pointer_up(&mut self, _pos: Pos2) -> Changes {
        match self.in_progress.take() {
            Some(drawable) => {
                self.history.commit(drawable);
                Changes::CONTENT
            }
            None => Changes::NONE,
        }
    }

    pub fn pointer_leave(&mut self) -> Changes {
        if self.preview.take().is_some() {
            Changes::PREVIEW
        } else {
            Changes::NONE
        }
    }

    /// Make `tool` active. Any unfinished drawable is discarded and the
    /// preview is dropped until the next move.
    pub fn select_tool(&mut self, tool: Tool) -> Changes {
        self.tools.select(tool);
        self.reset_gesture()
    }

    /// Handle the answer of the "new sticker" prompt; `None` means cancelled
    pub fn add_custom_sticker(&mut self, input: Option<&str>) -> Changes {
        match self.tools.add_custom_sticker(input) {
            Some(_) => self.reset_gesture(),
            None => Changes::NONE,
        }
    }

    pub fn undo(&mut self) -> Changes {
        if self.history.undo() {
            log::debug!("Undo, {} drawables left", self.history.len());
            Changes::CONTENT
        } else {
            Changes::NONE
        }
    }

    pub fn redo(&mut self) -> Changes {
        if self.history.redo() {
            log::debug!("Redo, {} drawables", self.history.len());
            Changes::CONTENT
        } else {
            Changes::NONE
        }
    }

    /// Remove everything. Not undoable; the redo history goes too.
    ///
    /// Always reports a content change, even on an empty canvas.
    pub fn clear(&mut self) -> Changes {
        let removed = self.history.clear();
        log::info!("Canvas cleared (had content: {removed})");
        Changes::CONTENT
    }

    /// Render the committed drawables at export resolution
    pub fn export(&self) -> Result<ExportedImage, ExportError> {
        export::export_png(
            self.history.committed(),
            self.canvas_size,
            &self.style,
            &self.export,
        )
    }

    fn reset_gesture(&mut self) -> Changes {
        let cancelled = self.in_progress.take();
        if let Some(drawable) = &cancelled {
            log::debug!("Cancelled unfinished {}", drawable.kind());
        }
        Changes {
            content: cancelled.is_some(),
            preview: self.preview.take().is_some(),
        }
    }

    /// Ctrl/Cmd+Z undoes, Ctrl/Cmd+Shift+Z and Ctrl/Cmd+Y redo
    fn shortcut(&mut self, key: Key, modifiers: Modifiers) -> Changes {
        if !modifiers.command {
            return Changes::NONE;
        }
        match key {
            Key::Z if modifiers.shift => self.redo(),
            Key::Z => self.undo(),
            Key::Y => self.redo(),
            _ => Changes::NONE,
        }
    }
}
