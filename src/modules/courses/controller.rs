use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseFilterParams, CourseRow, CreateCourseDto, PaginatedCoursesResponse,
    UpdateCourseDto,
};
use crate::modules::courses::service::CourseService;
use crate::modules::{BulkActionResponse, ErrorResponse, SelectedIdsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created successfully", body = Course),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::create_course(&state.db, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseFilterParams),
    responses(
        (status = 200, description = "List of courses", body = PaginatedCoursesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseFilterParams>,
) -> Result<Json<PaginatedCoursesResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (courses, total) = CourseService::get_courses(&state.db, &params).await?;

    let data = courses
        .into_iter()
        .map(|course| CourseRow {
            links: RecordLinks::new("courses", course.id),
            record: course,
        })
        .collect();

    Ok(Json(PaginatedCoursesResponse {
        data,
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated successfully", body = Course),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::update_course(&state.db, id, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted successfully"),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(Json(json!({"message": "Course deleted successfully"})))
}

#[utoipa::path(
    post,
    path = "/api/courses/actions/uppercase",
    request_body = SelectedIdsDto,
    responses(
        (status = 200, description = "Selected courses uppercased", body = BulkActionResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn uppercase_courses(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SelectedIdsDto>,
) -> Result<Json<BulkActionResponse>, AppError> {
    let updated = CourseService::uppercase_courses(&state.db, &dto.ids).await?;
    Ok(Json(BulkActionResponse::new(updated)))
}
