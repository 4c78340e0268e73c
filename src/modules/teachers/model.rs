use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A teacher. `department_id` empties out when the department is deleted.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherRow {
    pub record: Teacher,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TeacherFilterParams {
    /// Matches against first name, last name, and email.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedTeachersResponse {
    pub data: Vec<TeacherRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateTeacherDto {
        CreateTeacherDto {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace.hopper@example.com".to_string(),
            department_id: None,
        }
    }

    #[test]
    fn test_create_teacher_dto_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_teacher_dto_invalid_email() {
        let mut dto = valid_create();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_teacher_dto_name_too_long() {
        let mut dto = valid_create();
        dto.first_name = "x".repeat(51);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_teacher_dto_partial() {
        let dto = UpdateTeacherDto {
            first_name: None,
            last_name: Some("Murray".to_string()),
            email: None,
            department_id: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_teacher_dto_invalid_email_still_checked() {
        let dto = UpdateTeacherDto {
            first_name: None,
            last_name: None,
            email: Some("@@".to_string()),
            department_id: None,
        };
        assert!(dto.validate().is_err());
    }
}
