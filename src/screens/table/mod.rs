// Re-export the screen struct and its types
pub use types::*;

mod actions;
mod dialog;
mod input;
mod navigation;
mod panel;
mod render;
pub mod types;
