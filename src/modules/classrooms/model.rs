use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Rooms with capacity above this count as "large" in the filtered
/// listing.
pub const LARGE_CAPACITY_THRESHOLD: i32 = 50;

/// A classroom. `department_id` empties out when the department is
/// deleted.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Classroom {
    pub id: Uuid,
    pub room_number: String,
    pub capacity: i32,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassroomDto {
    #[validate(length(min = 1, max = 10))]
    pub room_number: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClassroomDto {
    #[validate(length(min = 1, max = 10))]
    pub room_number: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassroomRow {
    pub record: Classroom,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ClassroomFilterParams {
    /// Matches against the room number.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedClassroomsResponse {
    pub data: Vec<ClassroomRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateClassroomDto {
        CreateClassroomDto {
            room_number: "B-204".to_string(),
            capacity: 40,
            department_id: None,
        }
    }

    #[test]
    fn test_create_classroom_dto_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_classroom_dto_zero_capacity() {
        let mut dto = valid_create();
        dto.capacity = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_classroom_dto_negative_capacity() {
        let mut dto = valid_create();
        dto.capacity = -5;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_classroom_dto_room_number_too_long() {
        let mut dto = valid_create();
        dto.room_number = "x".repeat(11);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_classroom_dto_zero_capacity_rejected() {
        let dto = UpdateClassroomDto {
            room_number: None,
            capacity: Some(0),
            department_id: None,
        };
        assert!(dto.validate().is_err());
    }
}
