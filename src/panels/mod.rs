mod central_panel;
mod tools_panel;

pub use central_panel::{EguiCanvas, SurfaceTexture, central_panel};
pub use tools_panel::tools_panel;
