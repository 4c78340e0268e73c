use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classrooms::model::{
    Classroom, ClassroomFilterParams, ClassroomRow, CreateClassroomDto,
    PaginatedClassroomsResponse, UpdateClassroomDto,
};
use crate::modules::classrooms::service::ClassroomService;
use crate::modules::{BulkActionResponse, ErrorResponse, SelectedIdsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

fn to_rows(classrooms: Vec<Classroom>) -> Vec<ClassroomRow> {
    classrooms
        .into_iter()
        .map(|classroom| ClassroomRow {
            links: RecordLinks::new("classrooms", classroom.id),
            record: classroom,
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/api/classrooms",
    request_body = CreateClassroomDto,
    responses(
        (status = 200, description = "Classroom created successfully", body = Classroom),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state, dto))]
pub async fn create_classroom(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassroomDto>,
) -> Result<Json<Classroom>, AppError> {
    let classroom = ClassroomService::create_classroom(&state.db, dto).await?;
    Ok(Json(classroom))
}

#[utoipa::path(
    get,
    path = "/api/classrooms",
    params(ClassroomFilterParams),
    responses(
        (status = 200, description = "List of classrooms", body = PaginatedClassroomsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classrooms(
    State(state): State<AppState>,
    Query(params): Query<ClassroomFilterParams>,
) -> Result<Json<PaginatedClassroomsResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (classrooms, total) = ClassroomService::get_classrooms(&state.db, &params).await?;

    Ok(Json(PaginatedClassroomsResponse {
        data: to_rows(classrooms),
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/classrooms/large",
    params(ClassroomFilterParams),
    responses(
        (status = 200, description = "Classrooms seating more than 50", body = PaginatedClassroomsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_large_classrooms(
    State(state): State<AppState>,
    Query(params): Query<ClassroomFilterParams>,
) -> Result<Json<PaginatedClassroomsResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (classrooms, total) = ClassroomService::get_large_classrooms(&state.db, &params).await?;

    Ok(Json(PaginatedClassroomsResponse {
        data: to_rows(classrooms),
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    responses(
        (status = 200, description = "Classroom details", body = Classroom),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classroom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Classroom>, AppError> {
    let classroom = ClassroomService::get_classroom_by_id(&state.db, id).await?;
    Ok(Json(classroom))
}

#[utoipa::path(
    put,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    request_body = UpdateClassroomDto,
    responses(
        (status = 200, description = "Classroom updated successfully", body = Classroom),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state, dto))]
pub async fn update_classroom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassroomDto>,
) -> Result<Json<Classroom>, AppError> {
    let classroom = ClassroomService::update_classroom(&state.db, id, dto).await?;
    Ok(Json(classroom))
}

#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    responses(
        (status = 200, description = "Classroom deleted successfully"),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn delete_classroom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    ClassroomService::delete_classroom(&state.db, id).await?;
    Ok(Json(json!({"message": "Classroom deleted successfully"})))
}

#[utoipa::path(
    post,
    path = "/api/classrooms/actions/uppercase",
    request_body = SelectedIdsDto,
    responses(
        (status = 200, description = "Selected classrooms uppercased", body = BulkActionResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state, dto))]
pub async fn uppercase_classrooms(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SelectedIdsDto>,
) -> Result<Json<BulkActionResponse>, AppError> {
    let updated = ClassroomService::uppercase_classrooms(&state.db, &dto.ids).await?;
    Ok(Json(BulkActionResponse::new(updated)))
}
