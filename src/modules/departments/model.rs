use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// An academic department. `head_id` points at the teacher chairing it and
/// empties out when that teacher is deleted.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub head_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    pub head_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartmentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    pub head_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentRow {
    pub record: Department,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DepartmentFilterParams {
    /// Matches against the department name.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedDepartmentsResponse {
    pub data: Vec<DepartmentRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_department_dto_valid() {
        let dto = CreateDepartmentDto {
            name: "Computer Science".to_string(),
            location: Some("Block C".to_string()),
            head_id: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_department_dto_empty_name() {
        let dto = CreateDepartmentDto {
            name: String::new(),
            location: None,
            head_id: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_department_dto_name_too_long() {
        let dto = CreateDepartmentDto {
            name: "x".repeat(101),
            location: None,
            head_id: None,
        };
        assert!(dto.validate().is_err());
    }
}
