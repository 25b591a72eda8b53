// ui/mod.rs - UI module definitions

pub mod render_sync;
pub mod renderer;
pub mod status_bar;

// Re-export commonly used types
pub use render_sync::{RenderPlan, describe};
pub use renderer::{Screen, TuiRenderer};
