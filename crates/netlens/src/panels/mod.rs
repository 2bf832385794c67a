pub mod content_panel;
pub mod cookies_panel;
pub mod headers_panel;
pub mod resource_panel;
pub mod top_panel;

pub const HORIZONTAL_GAP: f32 = 8.0;
