use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::{
    CreateTeacherDto, PaginatedTeachersResponse, Teacher, TeacherFilterParams, TeacherRow,
    UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::modules::{BulkActionResponse, ErrorResponse, SelectedIdsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 200, description = "Teacher created successfully", body = Teacher),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::create_teacher(&state.db, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "List of teachers", body = PaginatedTeachersResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(params): Query<TeacherFilterParams>,
) -> Result<Json<PaginatedTeachersResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (teachers, total) = TeacherService::get_teachers(&state.db, &params).await?;

    let data = teachers
        .into_iter()
        .map(|teacher| TeacherRow {
            links: RecordLinks::new("teachers", teacher.id),
            record: teacher,
        })
        .collect();

    Ok(Json(PaginatedTeachersResponse {
        data,
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher details", body = Teacher),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.db, id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = Teacher),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher deleted successfully"),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(Json(json!({"message": "Teacher deleted successfully"})))
}

#[utoipa::path(
    post,
    path = "/api/teachers/actions/uppercase",
    request_body = SelectedIdsDto,
    responses(
        (status = 200, description = "Selected teachers uppercased", body = BulkActionResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn uppercase_teachers(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SelectedIdsDto>,
) -> Result<Json<BulkActionResponse>, AppError> {
    let updated = TeacherService::uppercase_teachers(&state.db, &dto.ids).await?;
    Ok(Json(BulkActionResponse::new(updated)))
}
