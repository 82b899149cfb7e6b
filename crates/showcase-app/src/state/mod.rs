//! State cells owned by the showcase views.

pub mod local;
pub mod view;

pub use local::*;
pub use view::*;
