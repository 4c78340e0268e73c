use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::ErrorResponse;
use crate::modules::enrollments::model::{
    CreateEnrollmentDto, Enrollment, EnrollmentFilterParams, EnrollmentRow,
    PaginatedEnrollmentsResponse, UpdateEnrollmentDto,
};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = CreateEnrollmentDto,
    responses(
        (status = 200, description = "Enrollment created successfully", body = Enrollment),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state, dto))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment = EnrollmentService::create_enrollment(&state.db, dto).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    get,
    path = "/api/enrollments",
    params(EnrollmentFilterParams),
    responses(
        (status = 200, description = "List of enrollments", body = PaginatedEnrollmentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_enrollments(
    State(state): State<AppState>,
    Query(params): Query<EnrollmentFilterParams>,
) -> Result<Json<PaginatedEnrollmentsResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (enrollments, total) = EnrollmentService::get_enrollments(&state.db, &params).await?;

    let data = enrollments
        .into_iter()
        .map(|enrollment| EnrollmentRow {
            links: RecordLinks::new("enrollments", enrollment.id),
            record: enrollment,
        })
        .collect();

    Ok(Json(PaginatedEnrollmentsResponse {
        data,
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment details", body = Enrollment),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment = EnrollmentService::get_enrollment_by_id(&state.db, id).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    put,
    path = "/api/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    request_body = UpdateEnrollmentDto,
    responses(
        (status = 200, description = "Enrollment updated successfully", body = Enrollment),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state, dto))]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateEnrollmentDto>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment = EnrollmentService::update_enrollment(&state.db, id, dto).await?;
    Ok(Json(enrollment))
}

#[utoipa::path(
    delete,
    path = "/api/enrollments/{id}",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment deleted successfully"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    EnrollmentService::delete_enrollment(&state.db, id).await?;
    Ok(Json(json!({"message": "Enrollment deleted successfully"})))
}
