use egui::Color32;

use crate::SketchpadApp;
use crate::input::InputEvent;
use crate::sketchpad::Changes;
use crate::surface::PainterSurface;

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context, ui: &mut egui::Ui) {
    let size = app.sketchpad.canvas_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;

    if !rect.is_positive() {
        log::warn!("Canvas has no drawable area ({rect:?}), skipping");
        return;
    }

    // Shortcuts belong to the text field while the sticker prompt has focus.
    let typing = ctx.wants_keyboard_input();
    let mut changes = Changes::NONE;
    // Layer-aware: false while a window such as the sticker prompt covers
    // the pointer.
    let over_canvas = response.contains_pointer();
    for event in app.input.process_input(ctx, rect, over_canvas) {
        if typing && matches!(event, InputEvent::KeyDown { .. }) {
            continue;
        }
        changes = changes.merge(app.sketchpad.handle(&event));
    }
    app.apply(ctx, changes);

    let mut surface = PainterSurface::new(&painter, rect, Color32::TRANSPARENT);
    app.renderer.repaint(&mut surface, app.sketchpad.frame());
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::GRAY));

    // The preview stands in for the cursor.
    if app.sketchpad.preview().is_some() {
        ctx.set_cursor_icon(egui::CursorIcon::None);
    }
}
