//! Helpers shared across layers.
//!
//! - [`code_generator`] - random short code generation
//! - [`url_validator`] - acceptance check for submitted URLs

pub mod code_generator;
pub mod url_validator;
