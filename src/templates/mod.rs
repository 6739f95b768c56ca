pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{feedback_result, location_panel};
pub use layouts::desktop::desktop_layout;
