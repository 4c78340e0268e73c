//! Identity model: accounts keyed by phone number.
//!
//! The username concept from stock identity systems is replaced by a
//! validated [`PhoneNumber`]; everything else (names, staff/superuser/
//! active flags, hashed password) is conventional. Superusers are created
//! through the CLI only, so [`CreateUserDto`] has no superuser flag.

use campus_models::PhoneNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A user account. The password hash never leaves the service layer.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub phone_number: PhoneNumber,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    pub phone_number: PhoneNumber,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    pub phone_number: Option<PhoneNumber>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    #[validate(length(max = 150))]
    pub first_name: Option<String>,
    #[validate(length(max = 150))]
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}

/// List row: the record plus the "Delete User" affordance.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserAdminRow {
    pub record: User,
    pub delete_url: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct UserFilterParams {
    /// Matches against phone number, first name, and last name.
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<UserAdminRow>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateUserDto {
        CreateUserDto {
            phone_number: "+92-300123456-7".parse().unwrap(),
            password: "password123".to_string(),
            first_name: Some("Sana".to_string()),
            last_name: Some("Khan".to_string()),
            is_staff: None,
            is_active: None,
        }
    }

    #[test]
    fn test_create_user_dto_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_short_password() {
        let mut dto = valid_create();
        dto.password = "short".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_rejects_malformed_phone() {
        // The format check lives in the PhoneNumber type itself, so a bad
        // phone never deserializes into the DTO in the first place.
        let body = r#"{"phone_number": "12345", "password": "password123"}"#;
        let parsed: Result<CreateUserDto, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_user_dto_rejects_empty_phone() {
        let body = r#"{"phone_number": "", "password": "password123"}"#;
        let parsed: Result<CreateUserDto, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_user_dto_accepts_valid_phone_json() {
        let body = r#"{"phone_number": "+92-300123456-7", "password": "password123"}"#;
        let parsed: CreateUserDto = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.phone_number.as_str(), "+92-300123456-7");
    }

    #[test]
    fn test_update_user_dto_all_optional() {
        let dto: UpdateUserDto = serde_json::from_str("{}").unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.phone_number.is_none());
    }
}
