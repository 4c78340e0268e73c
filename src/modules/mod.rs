//! Feature modules, one per entity.
//!
//! Each module follows the same structure:
//!
//! - `model.rs`: entity struct, DTOs, filter params
//! - `service.rs`: business logic against the database
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: route wiring

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub mod classrooms;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod students;
pub mod teachers;
pub mod users;

/// Error body shape shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Outcome of a bulk record action.
#[derive(Debug, Serialize, ToSchema)]
pub struct BulkActionResponse {
    pub message: String,
    pub updated: u64,
}

impl BulkActionResponse {
    pub fn new(updated: u64) -> Self {
        Self {
            message: format!("{} records updated", updated),
            updated,
        }
    }
}

/// The records selected for a bulk action.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SelectedIdsDto {
    #[validate(length(min = 1))]
    pub ids: Vec<Uuid>,
}
