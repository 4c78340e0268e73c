use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classrooms::model::{
    Classroom, ClassroomFilterParams, CreateClassroomDto, LARGE_CAPACITY_THRESHOLD,
    UpdateClassroomDto,
};
use crate::utils::errors::AppError;

const CLASSROOM_COLUMNS: &str =
    "id, room_number, capacity, department_id, created_at, updated_at";

pub struct ClassroomService;

impl ClassroomService {
    #[instrument(skip(db, dto))]
    pub async fn create_classroom(
        db: &PgPool,
        dto: CreateClassroomDto,
    ) -> Result<Classroom, AppError> {
        let classroom = sqlx::query_as::<_, Classroom>(&format!(
            r#"INSERT INTO classrooms (room_number, capacity, department_id)
               VALUES ($1, $2, $3)
               RETURNING {CLASSROOM_COLUMNS}"#,
        ))
        .bind(&dto.room_number)
        .bind(dto.capacity)
        .bind(dto.department_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A classroom with room number {} already exists", dto.room_number),
                "Department does not exist",
            )
        })?;

        Ok(classroom)
    }

    #[instrument(skip(db))]
    pub async fn get_classrooms(
        db: &PgPool,
        filters: &ClassroomFilterParams,
    ) -> Result<(Vec<Classroom>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, classrooms) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM classrooms WHERE room_number ILIKE $1",
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let classrooms = sqlx::query_as::<_, Classroom>(&format!(
                    r#"SELECT {CLASSROOM_COLUMNS} FROM classrooms
                       WHERE room_number ILIKE $1
                       ORDER BY room_number
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, classrooms)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM classrooms")
                    .fetch_one(db)
                    .await?;

                let classrooms = sqlx::query_as::<_, Classroom>(&format!(
                    r#"SELECT {CLASSROOM_COLUMNS} FROM classrooms
                       ORDER BY room_number
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, classrooms)
            }
        };

        Ok((classrooms, total))
    }

    /// The "large classroom" view: same table, filtered to rooms seating
    /// more than [`LARGE_CAPACITY_THRESHOLD`].
    #[instrument(skip(db))]
    pub async fn get_large_classrooms(
        db: &PgPool,
        filters: &ClassroomFilterParams,
    ) -> Result<(Vec<Classroom>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM classrooms WHERE capacity > $1",
        )
        .bind(LARGE_CAPACITY_THRESHOLD)
        .fetch_one(db)
        .await?;

        let classrooms = sqlx::query_as::<_, Classroom>(&format!(
            r#"SELECT {CLASSROOM_COLUMNS} FROM classrooms
               WHERE capacity > $1
               ORDER BY room_number
               LIMIT $2 OFFSET $3"#,
        ))
        .bind(LARGE_CAPACITY_THRESHOLD)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        Ok((classrooms, total))
    }

    #[instrument(skip(db))]
    pub async fn get_classroom_by_id(db: &PgPool, id: Uuid) -> Result<Classroom, AppError> {
        let classroom = sqlx::query_as::<_, Classroom>(&format!(
            "SELECT {CLASSROOM_COLUMNS} FROM classrooms WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Classroom not found")))?;

        Ok(classroom)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_classroom(
        db: &PgPool,
        id: Uuid,
        dto: UpdateClassroomDto,
    ) -> Result<Classroom, AppError> {
        let existing = Self::get_classroom_by_id(db, id).await?;

        let room_number = dto.room_number.unwrap_or(existing.room_number);
        let capacity = dto.capacity.unwrap_or(existing.capacity);
        let department_id = dto.department_id.or(existing.department_id);

        let classroom = sqlx::query_as::<_, Classroom>(&format!(
            r#"UPDATE classrooms
               SET room_number = $1, capacity = $2, department_id = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {CLASSROOM_COLUMNS}"#,
        ))
        .bind(&room_number)
        .bind(capacity)
        .bind(department_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                &format!("A classroom with room number {} already exists", room_number),
                "Department does not exist",
            )
        })?;

        Ok(classroom)
    }

    #[instrument(skip(db))]
    pub async fn delete_classroom(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Classroom not found")));
        }

        Ok(())
    }

    /// Uppercase the room number of each selected classroom, one row at a
    /// time.
    #[instrument(skip(db))]
    pub async fn uppercase_classrooms(db: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query(
                r#"UPDATE classrooms
                   SET room_number = UPPER(room_number), updated_at = NOW()
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
