use campus_models::CourseCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A course in the catalog. The code is the `[A-Z]{3}[0-9]{3}` catalog
/// identifier; `teacher_id` empties out when the teacher is deleted.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub code: CourseCode,
    pub teacher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub code: CourseCode,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub code: Option<CourseCode>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseRow {
    pub record: Course,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseFilterParams {
    /// Matches against the course name and code.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub data: Vec<CourseRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_dto_valid() {
        let body = r#"{"name": "Data Structures", "code": "CSC201"}"#;
        let dto: CreateCourseDto = serde_json::from_str(body).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.code.as_str(), "CSC201");
    }

    #[test]
    fn test_create_course_dto_lowercase_code_rejected() {
        // Format errors are caught while deserializing the code.
        let body = r#"{"name": "Data Structures", "code": "abc123"}"#;
        let parsed: Result<CreateCourseDto, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_course_dto_short_code_rejected() {
        let body = r#"{"name": "Data Structures", "code": "AB123"}"#;
        let parsed: Result<CreateCourseDto, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_course_dto_empty_name() {
        let body = r#"{"name": "", "code": "CSC201"}"#;
        let dto: CreateCourseDto = serde_json::from_str(body).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_course_dto_empty_is_valid() {
        let dto: UpdateCourseDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.code.is_none());
    }
}
