//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod status;

pub use delete::delete_link_handler;
pub use health::ping_handler;
pub use redirect::redirect_handler;
pub use shorten::{batch_upload_handler, shorten_handler};
pub use status::status_handler;
