//! View components: the controller shell and the three registered views.

mod admin;
mod app;
mod dashboard;
mod landing;

pub use admin::*;
pub use app::*;
pub use dashboard::*;
pub use landing::*;
