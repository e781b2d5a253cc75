//! Success envelope shared by every endpoint

use serde::Serialize;

/// `{"success": true, ...body}`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self { success: true, body }
    }
}
