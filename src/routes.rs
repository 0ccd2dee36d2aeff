use crate::{
    routes::{
        index::get_index_route,
        removal::{
            internal_post_removal_cancel, internal_post_removal_confirm,
            internal_post_removal_request,
        },
        students::internal_post_student,
    },
    state::EnrolState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod removal;
pub mod students;

pub fn router(state: EnrolState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/internal/students", post(internal_post_student))
        .route(
            "/internal/removal/request",
            post(internal_post_removal_request),
        )
        .route(
            "/internal/removal/confirm",
            post(internal_post_removal_confirm),
        )
        .route(
            "/internal/removal/cancel",
            post(internal_post_removal_cancel),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
