use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::dates::not_in_future;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A student's enrollment in a course. Deleting either parent deletes the
/// enrollment; a student can hold at most one enrollment per course.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    pub student_id: Uuid,
    pub course_id: Uuid,
    #[validate(custom(function = not_in_future))]
    pub enrollment_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEnrollmentDto {
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    #[validate(custom(function = not_in_future))]
    pub enrollment_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentRow {
    pub record: Enrollment,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct EnrollmentFilterParams {
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedEnrollmentsResponse {
    pub data: Vec<EnrollmentRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn valid_create() -> CreateEnrollmentDto {
        CreateEnrollmentDto {
            student_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            enrollment_date: Utc::now().date_naive(),
        }
    }

    #[test]
    fn test_create_enrollment_dto_valid_today() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_enrollment_dto_valid_past() {
        let mut dto = valid_create();
        dto.enrollment_date = Utc::now().date_naive() - Days::new(90);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_enrollment_dto_future_date_rejected() {
        let mut dto = valid_create();
        dto.enrollment_date = Utc::now().date_naive() + Days::new(1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_enrollment_dto_requires_parents() {
        let body = r#"{"enrollment_date": "2024-01-15"}"#;
        let parsed: Result<CreateEnrollmentDto, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_enrollment_dto_future_date_rejected() {
        let dto = UpdateEnrollmentDto {
            student_id: None,
            course_id: None,
            enrollment_date: Some(Utc::now().date_naive() + Days::new(7)),
        };
        assert!(dto.validate().is_err());
    }
}
