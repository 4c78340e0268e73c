use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::{
    CreateTeacherDto, Teacher, TeacherFilterParams, UpdateTeacherDto,
};
use crate::utils::errors::AppError;

const TEACHER_COLUMNS: &str =
    "id, first_name, last_name, email, department_id, created_at, updated_at";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db, dto))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            r#"INSERT INTO teachers (first_name, last_name, email, department_id)
               VALUES ($1, $2, $3, $4)
               RETURNING {TEACHER_COLUMNS}"#,
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.department_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A teacher with email {} already exists", dto.email),
                "Department does not exist",
            )
        })?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn get_teachers(
        db: &PgPool,
        filters: &TeacherFilterParams,
    ) -> Result<(Vec<Teacher>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, teachers) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM teachers
                       WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1"#,
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let teachers = sqlx::query_as::<_, Teacher>(&format!(
                    r#"SELECT {TEACHER_COLUMNS} FROM teachers
                       WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1
                       ORDER BY last_name, first_name
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, teachers)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers")
                    .fetch_one(db)
                    .await?;

                let teachers = sqlx::query_as::<_, Teacher>(&format!(
                    r#"SELECT {TEACHER_COLUMNS} FROM teachers
                       ORDER BY last_name, first_name
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, teachers)
            }
        };

        Ok((teachers, total))
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_by_id(db: &PgPool, id: Uuid) -> Result<Teacher, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {TEACHER_COLUMNS} FROM teachers WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(teacher)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let existing = Self::get_teacher_by_id(db, id).await?;

        let first_name = dto.first_name.unwrap_or(existing.first_name);
        let last_name = dto.last_name.unwrap_or(existing.last_name);
        let email = dto.email.unwrap_or(existing.email);
        let department_id = dto.department_id.or(existing.department_id);

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            r#"UPDATE teachers
               SET first_name = $1, last_name = $2, email = $3, department_id = $4,
                   updated_at = NOW()
               WHERE id = $5
               RETURNING {TEACHER_COLUMNS}"#,
        ))
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(department_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A teacher with email {} already exists", email),
                "Department does not exist",
            )
        })?;

        Ok(teacher)
    }

    /// Deleting a teacher nullifies any department head or course reference
    /// pointing at them; the referencing rows survive.
    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    /// Uppercase the first and last name of each selected teacher, one row
    /// at a time.
    #[instrument(skip(db))]
    pub async fn uppercase_teachers(db: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query(
                r#"UPDATE teachers
                   SET first_name = UPPER(first_name), last_name = UPPER(last_name),
                       updated_at = NOW()
                   WHERE id = $1"#,
            )
            .bind(id)
            .execute(db)
            .await?;
            updated += result.rows_affected();
        }
        Ok(updated)
    }
}
