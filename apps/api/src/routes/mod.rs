pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assignments::handlers as assignments;
use crate::curriculum::handlers as curriculum;
use crate::reference::handlers as reference;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        // Assignments
        .route(
            "/api/v1/assignments",
            post(assignments::handle_create_assignment).get(assignments::handle_list_assignments),
        )
        .route(
            "/api/v1/assignments/:id",
            get(assignments::handle_get_assignment),
        )
        .route(
            "/api/v1/assignments/:id/analysis",
            get(assignments::handle_get_analysis),
        )
        // Curriculum
        .route(
            "/api/v1/curriculum/standards",
            get(curriculum::handle_list_standards),
        )
        // Reference tables
        .route(
            "/api/v1/reference/subjects",
            get(reference::handle_list_subjects),
        )
        .route("/api/v1/reference/exams", get(reference::handle_list_exams))
        .route(
            "/api/v1/reference/universities",
            get(reference::handle_list_universities),
        )
        .route(
            "/api/v1/reference/scholarships",
            get(reference::handle_list_scholarships),
        )
        .with_state(state)
}
