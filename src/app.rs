use crate::config::SketchpadConfig;
use crate::error::SketchpadError;
use crate::export::{EXPORT_FILE_NAME, ExportedImage};
use crate::input::InputHandler;
use crate::panels::{canvas_panel, sticker_prompt, tools_panel};
use crate::renderer::Renderer;
use crate::sketchpad::{Changes, Sketchpad};

pub const APP_NAME: &str = "Sketchpad";

/// eframe shell around the sketchpad: lays out the canvas and controls and
/// forwards their input. No state survives a restart.
pub struct SketchpadApp {
    pub(crate) sketchpad: Sketchpad,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    /// Text of the open "new sticker" prompt, `None` when closed
    pub(crate) sticker_prompt: Option<String>,
    /// Result of the last export, shown under the buttons
    pub(crate) status: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(&SketchpadConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SketchpadConfig) -> Self {
        // Black ink needs a light background.
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: &SketchpadConfig) -> Self {
        let sketchpad = Sketchpad::new(config);
        let renderer = Renderer::new(*sketchpad.style());
        Self {
            sketchpad,
            renderer,
            input: InputHandler::new(),
            sticker_prompt: None,
            status: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    /// Ask egui for another frame if anything visible changed
    pub(crate) fn apply(&self, ctx: &egui::Context, changes: Changes) {
        if !changes.is_empty() {
            ctx.request_repaint();
        }
    }

    /// Lay out one frame of the whole UI
    pub(crate) fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_NAME);
            canvas_panel(self, ctx, ui);
            ui.separator();
            tools_panel(self, ctx, ui);
        });

        sticker_prompt(self, ctx);
    }

    pub(crate) fn export(&mut self) {
        let result = self
            .sketchpad
            .export()
            .map_err(SketchpadError::from)
            .and_then(|image| offer_download(&image).map(|()| image));

        self.status = Some(match result {
            Ok(image) => format!("Exported {}x{} {EXPORT_FILE_NAME}", image.width, image.height),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn offer_download(image: &ExportedImage) -> Result<(), SketchpadError> {
    std::fs::write(EXPORT_FILE_NAME, &image.png)?;
    log::info!("Wrote {EXPORT_FILE_NAME}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn offer_download(image: &ExportedImage) -> Result<(), SketchpadError> {
    use eframe::wasm_bindgen::JsCast as _;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchpadError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(|err| SketchpadError::Download(format!("{err:?}")))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchpadError::Download("not an anchor element".to_owned()))?;
    anchor.set_href(&image.to_data_uri());
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    Ok(())
}
