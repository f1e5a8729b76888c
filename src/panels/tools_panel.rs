use crate::SketchpadApp;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        let active = app.sketchpad.tools().active().clone();
        // Collect first so the palette isn't borrowed while selecting
        let palette = app.sketchpad.tools().palette().to_vec();

        for tool in palette {
            let label = egui::RichText::new(tool.label()).size(20.0);
            if ui.selectable_label(tool == active, label).clicked() {
                let changes = app.sketchpad.select_tool(tool);
                app.apply(ctx, changes);
            }
        }

        if ui.button("Custom sticker…").clicked() {
            app.sticker_prompt = Some(String::new());
        }
    });

    ui.separator();

    ui.horizontal(|ui| {
        let history = app.sketchpad.history();
        let can_undo = history.can_undo();
        let can_redo = history.can_redo();
        let has_content = !history.is_empty();

        if ui.add_enabled(has_content, egui::Button::new("Clear")).clicked() {
            let changes = app.sketchpad.clear();
            app.apply(ctx, changes);
        }
        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            let changes = app.sketchpad.undo();
            app.apply(ctx, changes);
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            let changes = app.sketchpad.redo();
            app.apply(ctx, changes);
        }
        if ui.button("Export").clicked() {
            app.export();
        }
    });

    if let Some(status) = &app.status {
        ui.label(status);
    }
}

/// Modal asking for a new sticker glyph
pub fn sticker_prompt(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(text) = app.sticker_prompt.as_mut() else {
        return;
    };

    let mut answer: Option<Option<String>> = None;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter a sticker:");
            let response = ui.text_edit_singleline(text);
            response.request_focus();
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    answer = Some(Some(text.clone()));
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    answer = Some(None);
                }
            });
        });

    if let Some(answer) = answer {
        app.sticker_prompt = None;
        let changes = app.sketchpad.add_custom_sticker(answer.as_deref());
        app.apply(ctx, changes);
    }
}
