//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and enforce the link lifecycle
//! (`active -> inactive`). HTTP handlers talk only to this layer.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and deletion
//! - [`services::usage_service::UsageService`] - Visit recording and usage statistics

pub mod services;
