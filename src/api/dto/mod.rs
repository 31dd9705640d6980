//! Data Transfer Objects for API requests and responses.
//!
//! Field names on the wire are kebab-case where clients expect it
//! (`original-url`, `full-info`); Rust fields stay snake_case via `serde`
//! renames. Input checks use `validator`.

pub mod delete;
pub mod health;
pub mod shorten;
pub mod status;
