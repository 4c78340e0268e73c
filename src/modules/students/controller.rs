use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::students::model::{
    CreateStudentDto, PaginatedStudentsResponse, Student, StudentFilterParams, StudentRow,
    UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::modules::{BulkActionResponse, ErrorResponse, SelectedIdsDto};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::links::RecordLinks;
use crate::utils::pagination::PaginationMeta;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student created successfully", body = Student),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students",
    params(StudentFilterParams),
    responses(
        (status = 200, description = "List of students", body = PaginatedStudentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> Result<Json<PaginatedStudentsResponse>, AppError> {
    let limit = params.pagination.limit();
    let offset = params.pagination.offset();

    let (students, total) = StudentService::get_students(&state.db, &params).await?;

    let data = students
        .into_iter()
        .map(|student| StudentRow {
            links: RecordLinks::new("students", student.id),
            record: student,
        })
        .collect();

    Ok(Json(PaginatedStudentsResponse {
        data,
        meta: PaginationMeta::new(total, limit, offset),
    }))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted successfully"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(Json(json!({"message": "Student deleted successfully"})))
}

#[utoipa::path(
    post,
    path = "/api/students/actions/uppercase",
    request_body = SelectedIdsDto,
    responses(
        (status = 200, description = "Selected students uppercased", body = BulkActionResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn uppercase_students(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SelectedIdsDto>,
) -> Result<Json<BulkActionResponse>, AppError> {
    let updated = StudentService::uppercase_students(&state.db, &dto.ids).await?;
    Ok(Json(BulkActionResponse::new(updated)))
}
