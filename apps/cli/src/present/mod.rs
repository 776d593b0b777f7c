//! Terminal presentation: icons, theme and screen rendering.

pub mod icon;
pub mod render;
pub mod theme;

pub use render::Renderer;
pub use theme::Theme;
