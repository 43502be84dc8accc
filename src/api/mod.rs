//! HTTP surface of the student service.

pub mod error;
pub mod handlers;

use crate::core::enrichment::EnrichmentService;
use crate::core::students::StudentService;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub enrichment: EnrichmentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/student/", post(handlers::save_student))
        .route("/student/name/{name}", get(handlers::get_student_by_name))
        .route("/student/api/all", get(handlers::get_all_students))
        .route("/student/{id}", delete(handlers::delete_student))
        .route(
            "/student/update/{name}",
            put(handlers::update_student_by_name),
        )
        .route(
            "/student/std/{college_id}",
            get(handlers::students_by_college_id),
        )
        .route(
            "/student/college/{college_id}",
            get(handlers::students_by_college_id),
        )
        .route(
            "/student/byCollegeOnly/{college_id}",
            get(handlers::students_by_college_id_only),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
