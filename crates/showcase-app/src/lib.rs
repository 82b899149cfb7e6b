//! Landing, dashboard and admin views for the showcase app.
//!
//! [`state::ViewController`] owns the active view and the root
//! [`components::App`] renders whichever view it selects. The admin view
//! owns the light/dark theme cell from `showcase_ui`.

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod state;

pub use error::{LoggingError, ViewError};
pub use state::{View, ViewController};

/// Layout CSS for the views.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
