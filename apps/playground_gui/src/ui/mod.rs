//! UI layer: app shell, input panels, and the results region.

pub mod app;
pub mod panels;

pub use app::PlaygroundApp;
