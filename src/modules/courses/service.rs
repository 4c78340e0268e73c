use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseFilterParams, CreateCourseDto, UpdateCourseDto,
};
use crate::utils::errors::AppError;

const COURSE_COLUMNS: &str = "id, name, code, teacher_id, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"INSERT INTO courses (name, code, teacher_id)
               VALUES ($1, $2, $3)
               RETURNING {COURSE_COLUMNS}"#,
        ))
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A course with code {} already exists", dto.code),
                "Teacher does not exist",
            )
        })?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        filters: &CourseFilterParams,
    ) -> Result<(Vec<Course>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, courses) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM courses WHERE name ILIKE $1 OR code ILIKE $1",
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let courses = sqlx::query_as::<_, Course>(&format!(
                    r#"SELECT {COURSE_COLUMNS} FROM courses
                       WHERE name ILIKE $1 OR code ILIKE $1
                       ORDER BY code
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, courses)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
                    .fetch_one(db)
                    .await?;

                let courses = sqlx::query_as::<_, Course>(&format!(
                    r#"SELECT {COURSE_COLUMNS} FROM courses
                       ORDER BY code
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, courses)
            }
        };

        Ok((courses, total))
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        Ok(course)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = Self::get_course_by_id(db, id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let code = dto.code.unwrap_or(existing.code);
        let teacher_id = dto.teacher_id.or(existing.teacher_id);

        let course = sqlx::query_as::<_, Course>(&format!(
            r#"UPDATE courses
               SET name = $1, code = $2, teacher_id = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {COURSE_COLUMNS}"#,
        ))
        .bind(&name)
        .bind(&code)
        .bind(teacher_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A course with code {} already exists", code),
                "Teacher does not exist",
            )
        })?;

        Ok(course)
    }

    /// Deleting a course cascades to its enrollments.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }

    /// Uppercase the name of each selected course, one row at a time. The
    /// code is already uppercase by format and stays untouched.
    #[instrument(skip(db))]
    pub async fn uppercase_courses(db: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query(
                "UPDATE courses SET name = UPPER(name), updated_at = NOW() WHERE id = $1",
            )
            .bind(id)
            .execute(db)
            .await?;
            updated += result.rows_affected();
        }
        Ok(updated)
    }
}
