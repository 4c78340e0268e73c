use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::departments::model::{
    CreateDepartmentDto, Department, DepartmentFilterParams, DepartmentRow,
    PaginatedDepartmentsResponse, UpdateDepartmentDto,
};
use crate::modules::departments::service::DepartmentService;
use crate::modules::{BulkActionResponse, ErrorResponse, SelectedIdsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentDto,
    responses(
        (status = 200, description = "Department created successfully", body = Department),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state, dto))]
pub async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateDepartmentDto>,
) -> Result<Json<Department>, AppError> {
    let department = DepartmentService::create_department(&state.db, dto).await?;
    Ok(Json(department))
}

#[utoipa::path(
    get,
    path = "/api/departments",
    params(DepartmentFilterParams),
    responses(
        (status = 200, description = "List of departments", body = PaginatedDepartmentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state))]
pub async fn get_departments(
    State(state): State<AppState>,
    Query(params): Query<DepartmentFilterParams>,
) -> Result<Json<PaginatedDepartmentsResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (departments, total) = DepartmentService::get_departments(&state.db, &params).await?;

    let data = departments
        .into_iter()
        .map(|department| DepartmentRow {
            links: RecordLinks::new("departments", department.id),
            record: department,
        })
        .collect();

    Ok(Json(PaginatedDepartmentsResponse {
        data,
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department details", body = Department),
        (status = 404, description = "Department not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state))]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Department>, AppError> {
    let department = DepartmentService::get_department_by_id(&state.db, id).await?;
    Ok(Json(department))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Department updated successfully", body = Department),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Department not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state, dto))]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateDepartmentDto>,
) -> Result<Json<Department>, AppError> {
    let department = DepartmentService::update_department(&state.db, id, dto).await?;
    Ok(Json(department))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = Uuid, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deleted successfully"),
        (status = 404, description = "Department not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state))]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    DepartmentService::delete_department(&state.db, id).await?;
    Ok(Json(json!({"message": "Department deleted successfully"})))
}

#[utoipa::path(
    post,
    path = "/api/departments/actions/uppercase",
    request_body = SelectedIdsDto,
    responses(
        (status = 200, description = "Selected departments uppercased", body = BulkActionResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Departments"
)]
#[instrument(skip(state, dto))]
pub async fn uppercase_departments(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SelectedIdsDto>,
) -> Result<Json<BulkActionResponse>, AppError> {
    let updated = DepartmentService::uppercase_departments(&state.db, &dto.ids).await?;
    Ok(Json(BulkActionResponse::new(updated)))
}
