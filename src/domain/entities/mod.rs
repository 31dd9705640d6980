//! Core domain entities.
//!
//! - [`Link`] - a shortened URL and its usage counter
//! - [`HistoryEntry`] - one recorded redirect
//!
//! Creation inputs live next to them as `NewLink` and `NewHistoryEntry`;
//! identities and timestamps are always assigned by the store.

pub mod history;
pub mod link;

pub use history::{HistoryEntry, NewHistoryEntry};
pub use link::{Link, NewLink};
