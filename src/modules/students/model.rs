use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::dates::not_in_future;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = not_in_future))]
    pub enrollment_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = not_in_future))]
    pub enrollment_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentRow {
    pub record: Student,
    pub links: RecordLinks,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct StudentFilterParams {
    /// Matches against first name, last name, and email.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedStudentsResponse {
    pub data: Vec<StudentRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn valid_create() -> CreateStudentDto {
        CreateStudentDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada.lovelace@example.com".to_string(),
            enrollment_date: Utc::now().date_naive(),
        }
    }

    #[test]
    fn test_create_student_dto_valid_today() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_valid_past_date() {
        let mut dto = valid_create();
        dto.enrollment_date = Utc::now().date_naive() - Days::new(400);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_student_dto_future_date_rejected() {
        let mut dto = valid_create();
        dto.enrollment_date = Utc::now().date_naive() + Days::new(1);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_student_dto_invalid_email() {
        let mut dto = valid_create();
        dto.email = "invalid-email".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_student_dto_empty_name() {
        let mut dto = valid_create();
        dto.first_name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_future_date_rejected() {
        let dto = UpdateStudentDto {
            first_name: None,
            last_name: None,
            email: None,
            enrollment_date: Some(Utc::now().date_naive() + Days::new(30)),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_empty_is_valid() {
        let dto: UpdateStudentDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
    }
}
