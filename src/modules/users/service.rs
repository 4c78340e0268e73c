use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User, UserFilterParams};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

const USER_COLUMNS: &str =
    "id, phone_number, first_name, last_name, is_staff, is_superuser, is_active, created_at, updated_at";

pub struct UserService;

impl UserService {
    /// Create a regular user keyed by phone number.
    ///
    /// The phone number was format-checked during deserialization; the
    /// database enforces its uniqueness. The password is stored hashed.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"INSERT INTO users (phone_number, password, first_name, last_name, is_staff, is_active)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {USER_COLUMNS}"#,
        ))
        .bind(&dto.phone_number)
        .bind(&hashed_password)
        .bind(dto.first_name.unwrap_or_default())
        .bind(dto.last_name.unwrap_or_default())
        .bind(dto.is_staff.unwrap_or(false))
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A user with phone number {} already exists", dto.phone_number),
                "Invalid reference",
            )
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        filters: &UserFilterParams,
    ) -> Result<(Vec<User>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, users) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM users
                       WHERE phone_number ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1"#,
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let users = sqlx::query_as::<_, User>(&format!(
                    r#"SELECT {USER_COLUMNS} FROM users
                       WHERE phone_number ILIKE $1 OR first_name ILIKE $1 OR last_name ILIKE $1
                       ORDER BY phone_number
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, users)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(db)
                    .await?;

                let users = sqlx::query_as::<_, User>(&format!(
                    r#"SELECT {USER_COLUMNS} FROM users
                       ORDER BY phone_number
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, users)
            }
        };

        Ok((users, total))
    }

    #[instrument(skip(db))]
    pub async fn get_user_by_id(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let existing = Self::get_user_by_id(db, id).await?;

        let phone_number = dto.phone_number.unwrap_or(existing.phone_number);
        let first_name = dto.first_name.unwrap_or(existing.first_name);
        let last_name = dto.last_name.unwrap_or(existing.last_name);
        let is_staff = dto.is_staff.unwrap_or(existing.is_staff);
        let is_superuser = dto.is_superuser.unwrap_or(existing.is_superuser);
        let is_active = dto.is_active.unwrap_or(existing.is_active);

        let result = if let Some(password) = dto.password {
            let hashed_password = hash_password(&password)?;
            sqlx::query_as::<_, User>(&format!(
                r#"UPDATE users
                   SET phone_number = $1, first_name = $2, last_name = $3,
                       is_staff = $4, is_superuser = $5, is_active = $6,
                       password = $7, updated_at = NOW()
                   WHERE id = $8
                   RETURNING {USER_COLUMNS}"#,
            ))
            .bind(&phone_number)
            .bind(&first_name)
            .bind(&last_name)
            .bind(is_staff)
            .bind(is_superuser)
            .bind(is_active)
            .bind(&hashed_password)
            .bind(id)
            .fetch_one(db)
            .await
        } else {
            sqlx::query_as::<_, User>(&format!(
                r#"UPDATE users
                   SET phone_number = $1, first_name = $2, last_name = $3,
                       is_staff = $4, is_superuser = $5, is_active = $6,
                       updated_at = NOW()
                   WHERE id = $7
                   RETURNING {USER_COLUMNS}"#,
            ))
            .bind(&phone_number)
            .bind(&first_name)
            .bind(&last_name)
            .bind(is_staff)
            .bind(is_superuser)
            .bind(is_active)
            .bind(id)
            .fetch_one(db)
            .await
        };

        let user = result.map_err(|e| {
            AppError::constraint(
                e,
                &format!("A user with phone number {} already exists", phone_number),
                "Invalid reference",
            )
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}
