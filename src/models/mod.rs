// src/models/mod.rs

use serde::Serialize;
use utoipa::ToSchema;

pub mod category;
pub mod question;
pub mod quiz;

/// Bare success envelope for writes.
#[derive(Debug, Serialize, ToSchema)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
