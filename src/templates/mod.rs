pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{bar_chart, card};
pub use layouts::desktop_layout;
