use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::enrollments::model::{
    CreateEnrollmentDto, Enrollment, EnrollmentFilterParams, UpdateEnrollmentDto,
};
use crate::utils::errors::AppError;

const ENROLLMENT_COLUMNS: &str =
    "id, student_id, course_id, enrollment_date, created_at, updated_at";

// Most recent enrollments first, ties broken by student for a stable
// listing.
const ENROLLMENT_ORDER: &str = "enrollment_date DESC, student_id";

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(db, dto))]
    pub async fn create_enrollment(
        db: &PgPool,
        dto: CreateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(&format!(
            r#"INSERT INTO enrollments (student_id, course_id, enrollment_date)
               VALUES ($1, $2, $3)
               RETURNING {ENROLLMENT_COLUMNS}"#,
        ))
        .bind(dto.student_id)
        .bind(dto.course_id)
        .bind(dto.enrollment_date)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                "Student is already enrolled in this course",
                "Student or course does not exist",
            )
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn get_enrollments(
        db: &PgPool,
        filters: &EnrollmentFilterParams,
    ) -> Result<(Vec<Enrollment>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut conditions = Vec::new();
        if filters.student_id.is_some() {
            conditions.push(format!("student_id = ${}", conditions.len() + 1));
        }
        if filters.course_id.is_some() {
            conditions.push(format!("course_id = ${}", conditions.len() + 1));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM enrollments{where_clause}");
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(student_id) = filters.student_id {
            count_sql = count_sql.bind(student_id);
        }
        if let Some(course_id) = filters.course_id {
            count_sql = count_sql.bind(course_id);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM enrollments{where_clause} \
             ORDER BY {ENROLLMENT_ORDER} LIMIT {limit} OFFSET {offset}"
        );
        let mut data_sql = sqlx::query_as::<_, Enrollment>(&data_query);
        if let Some(student_id) = filters.student_id {
            data_sql = data_sql.bind(student_id);
        }
        if let Some(course_id) = filters.course_id {
            data_sql = data_sql.bind(course_id);
        }
        let enrollments = data_sql.fetch_all(db).await?;

        Ok((enrollments, total))
    }

    #[instrument(skip(db))]
    pub async fn get_enrollment_by_id(db: &PgPool, id: Uuid) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {ENROLLMENT_COLUMNS} FROM enrollments WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Enrollment not found")))?;

        Ok(enrollment)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_enrollment(
        db: &PgPool,
        id: Uuid,
        dto: UpdateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
        let existing = Self::get_enrollment_by_id(db, id).await?;

        let student_id = dto.student_id.unwrap_or(existing.student_id);
        let course_id = dto.course_id.unwrap_or(existing.course_id);
        let enrollment_date = dto.enrollment_date.unwrap_or(existing.enrollment_date);

        let enrollment = sqlx::query_as::<_, Enrollment>(&format!(
            r#"UPDATE enrollments
               SET student_id = $1, course_id = $2, enrollment_date = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {ENROLLMENT_COLUMNS}"#,
        ))
        .bind(student_id)
        .bind(course_id)
        .bind(enrollment_date)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                "Student is already enrolled in this course",
                "Student or course does not exist",
            )
        })?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn delete_enrollment(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Enrollment not found")));
        }

        Ok(())
    }
}
