use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::departments::model::{
    CreateDepartmentDto, Department, DepartmentFilterParams, UpdateDepartmentDto,
};
use crate::utils::errors::AppError;

const DEPARTMENT_COLUMNS: &str = "id, name, location, head_id, created_at, updated_at";

pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(db, dto))]
    pub async fn create_department(
        db: &PgPool,
        dto: CreateDepartmentDto,
    ) -> Result<Department, AppError> {
        let department = sqlx::query_as::<_, Department>(&format!(
            r#"INSERT INTO departments (name, location, head_id)
               VALUES ($1, $2, $3)
               RETURNING {DEPARTMENT_COLUMNS}"#,
        ))
        .bind(&dto.name)
        .bind(&dto.location)
        .bind(dto.head_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                "Department conflicts with an existing record",
                "Head teacher does not exist",
            )
        })?;

        Ok(department)
    }

    #[instrument(skip(db))]
    pub async fn get_departments(
        db: &PgPool,
        filters: &DepartmentFilterParams,
    ) -> Result<(Vec<Department>, i64), AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let pattern = filters.q.as_ref().map(|q| format!("%{}%", q));

        let (total, departments) = match &pattern {
            Some(p) => {
                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM departments WHERE name ILIKE $1",
                )
                .bind(p)
                .fetch_one(db)
                .await?;

                let departments = sqlx::query_as::<_, Department>(&format!(
                    r#"SELECT {DEPARTMENT_COLUMNS} FROM departments
                       WHERE name ILIKE $1
                       ORDER BY name
                       LIMIT $2 OFFSET $3"#,
                ))
                .bind(p)
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, departments)
            }
            None => {
                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM departments")
                    .fetch_one(db)
                    .await?;

                let departments = sqlx::query_as::<_, Department>(&format!(
                    r#"SELECT {DEPARTMENT_COLUMNS} FROM departments
                       ORDER BY name
                       LIMIT $1 OFFSET $2"#,
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(db)
                .await?;

                (total, departments)
            }
        };

        Ok((departments, total))
    }

    #[instrument(skip(db))]
    pub async fn get_department_by_id(db: &PgPool, id: Uuid) -> Result<Department, AppError> {
        let department = sqlx::query_as::<_, Department>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Department not found")))?;

        Ok(department)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_department(
        db: &PgPool,
        id: Uuid,
        dto: UpdateDepartmentDto,
    ) -> Result<Department, AppError> {
        let existing = Self::get_department_by_id(db, id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let location = dto.location.or(existing.location);
        let head_id = dto.head_id.or(existing.head_id);

        let department = sqlx::query_as::<_, Department>(&format!(
            r#"UPDATE departments
               SET name = $1, location = $2, head_id = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {DEPARTMENT_COLUMNS}"#,
        ))
        .bind(&name)
        .bind(&location)
        .bind(head_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            AppError::constraint(
                e,
                "Department conflicts with an existing record",
                "Head teacher does not exist",
            )
        })?;

        Ok(department)
    }

    #[instrument(skip(db))]
    pub async fn delete_department(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Department not found")));
        }

        Ok(())
    }

    /// Uppercase the name and location of each selected department.
    ///
    /// Rows are persisted one at a time; a failure aborts the remainder of
    /// the batch and leaves already-written rows in place.
    #[instrument(skip(db))]
    pub async fn uppercase_departments(db: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query(
                r#"UPDATE departments
                   SET name = UPPER(name), location = UPPER(location), updated_at = NOW()
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
