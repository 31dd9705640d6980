//! DTO for link deletion.

use serde::Serialize;
use std::collections::BTreeMap;

const DELETED_MARKER: &str = "deleted";

/// Response of `DELETE /{code}`: `{"<code>": "deleted"}`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct DeleteResponse(BTreeMap<String, &'static str>);

impl DeleteResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self(BTreeMap::from([(code.into(), DELETED_MARKER)]))
    }
}
