//! Superuser creation.
//!
//! Mirrors the identity model's creation contract: the phone number must
//! be present and well-formed, and a superuser always carries both the
//! staff and superuser flags. Passing either flag explicitly as false is
//! an error rather than a silent override.

use anyhow::{Result, bail};
use bcrypt::{DEFAULT_COST, hash};
use campus_models::PhoneNumber;
use sqlx::PgPool;
use uuid::Uuid;

/// Flag overrides accepted from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuperuserFlags {
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

impl SuperuserFlags {
    /// Resolve the flags a superuser will be stored with.
    ///
    /// Unset flags default to true; explicitly false flags are refused.
    pub fn resolve(self) -> Result<(bool, bool)> {
        if self.is_staff == Some(false) {
            bail!("Superuser must have is_staff=true.");
        }
        if self.is_superuser == Some(false) {
            bail!("Superuser must have is_superuser=true.");
        }
        Ok((true, true))
    }
}

/// Create a superuser account.
///
/// Validates the phone number before touching the database, hashes the
/// password, and stores the account with both privilege flags set.
pub async fn create_superuser(
    db: &PgPool,
    phone_number: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    flags: SuperuserFlags,
) -> Result<Uuid> {
    let phone = PhoneNumber::new(phone_number)?;
    let (is_staff, is_superuser) = flags.resolve()?;
    let hashed = hash(password, DEFAULT_COST)?;

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO users (phone_number, password, first_name, last_name,
                              is_staff, is_superuser, is_active)
           VALUES ($1, $2, $3, $4, $5, $6, TRUE)
           RETURNING id"#,
    )
    .bind(&phone)
    .bind(&hashed)
    .bind(first_name)
    .bind(last_name)
    .bind(is_staff)
    .bind(is_superuser)
    .fetch_one(db)
    .await?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_to_true() {
        let flags = SuperuserFlags::default();
        assert_eq!(flags.resolve().unwrap(), (true, true));
    }

    #[test]
    fn test_flags_explicit_true_accepted() {
        let flags = SuperuserFlags {
            is_staff: Some(true),
            is_superuser: Some(true),
        };
        assert_eq!(flags.resolve().unwrap(), (true, true));
    }

    #[test]
    fn test_staff_false_refused() {
        let flags = SuperuserFlags {
            is_staff: Some(false),
            is_superuser: None,
        };
        let err = flags.resolve().unwrap_err();
        assert!(err.to_string().contains("is_staff=true"));
    }

    #[test]
    fn test_superuser_false_refused() {
        let flags = SuperuserFlags {
            is_staff: None,
            is_superuser: Some(false),
        };
        let err = flags.resolve().unwrap_err();
        assert!(err.to_string().contains("is_superuser=true"));
    }
}
