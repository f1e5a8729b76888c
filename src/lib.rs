#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod raster;
pub mod renderer;
pub mod sketchpad;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use drawable::{Drawable, RenderStyle, Sticker, Stroke};
pub use error::{ConfigError, ExportError, SketchpadError};
pub use export::{ExportConfig, ExportedImage};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use preview::Preview;
pub use renderer::{Frame, Renderer};
pub use sketchpad::{Changes, Sketchpad};
pub use surface::Surface;
pub use tools::{Tool, ToolState};
