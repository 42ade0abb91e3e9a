// ui/mod.rs - UI module definitions

pub mod renderer;
pub mod surface;
pub mod theme;

// Re-export commonly used types
pub use surface::{CellGrid, Surface};
pub use theme::Theme;
