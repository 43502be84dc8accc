use crate::api::error::ApiError;
use crate::api::AppState;
use crate::domain::model::{Student, StudentWithCollege};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

type ApiResult<T> = std::result::Result<T, ApiError>;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn save_student(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.students.save_student(student).await?))
}

pub async fn get_student_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    Ok(found_or_404(state.students.get_student_by_name(&name).await?))
}

pub async fn get_all_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.students.get_all_students().await?))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.students.delete_student(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_student_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    Ok(found_or_404(
        state.students.update_student_by_name(&name).await?,
    ))
}

pub async fn students_by_college_id(
    State(state): State<AppState>,
    Path(college_id): Path<String>,
) -> ApiResult<Response> {
    let enriched: Vec<StudentWithCollege> = state
        .enrichment
        .enrich_students_for_college(&college_id)
        .await?;

    if enriched.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(enriched).into_response())
}

pub async fn students_by_college_id_only(
    State(state): State<AppState>,
    Path(college_id): Path<String>,
) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(
        state
            .enrichment
            .students_by_college_id_only(&college_id)
            .await?,
    ))
}

fn found_or_404(student: Option<Student>) -> Response {
    match student {
        Some(student) => Json(student).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
