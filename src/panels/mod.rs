mod canvas_panel;
mod tools_panel;

pub use canvas_panel::canvas_panel;
pub use tools_panel::{sticker_prompt, tools_panel};
