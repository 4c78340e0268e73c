use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::{
    CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto,
};
use crate::utils::errors::AppError;

const STUDENT_COLUMNS: &str =
    "id, first_name, last_name, email, enrollment_date, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"INSERT INTO students (first_name, last_name, email, enrollment_date)
               VALUES ($1, $2, $3, $4)
               RETURNING {STUDENT_COLUMNS}"#,
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.enrollment_date)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A student with email {} already exists", dto.email),
                "Invalid reference",
            )
        })?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(
        db: &PgPool,
        filters: &StudentFilterParams,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, students) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    r#"SELECT COUNT(*) FROM students
                       WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1"#,
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let students = sqlx::query_as::<_, Student>(&format!(
                    r#"SELECT {STUDENT_COLUMNS} FROM students
                       WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1
                       ORDER BY last_name, first_name
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, students)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
                    .fetch_one(db)
                    .await?;

                let students = sqlx::query_as::<_, Student>(&format!(
                    r#"SELECT {STUDENT_COLUMNS} FROM students
                       ORDER BY last_name, first_name
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, students)
            }
        };

        Ok((students, total))
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = Self::get_student_by_id(db, id).await?;

        let first_name = dto.first_name.unwrap_or(existing.first_name);
        let last_name = dto.last_name.unwrap_or(existing.last_name);
        let email = dto.email.unwrap_or(existing.email);
        let enrollment_date = dto.enrollment_date.unwrap_or(existing.enrollment_date);

        let student = sqlx::query_as::<_, Student>(&format!(
            r#"UPDATE students
               SET first_name = $1, last_name = $2, email = $3, enrollment_date = $4,
                   updated_at = NOW()
               WHERE id = $5
               RETURNING {STUDENT_COLUMNS}"#,
        ))
        .bind(&first_name)
        .bind(&last_name)
        .bind(&email)
        .bind(enrollment_date)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A student with email {} already exists", email),
                "Invalid reference",
            )
        })?;

        Ok(student)
    }

    /// Deleting a student cascades to their enrollments.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(())
    }

    /// Uppercase the first and last name of each selected student, one row
    /// at a time.
    #[instrument(skip(db))]
    pub async fn uppercase_students(db: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query(
                r#"UPDATE students
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
