// ============================================================================
// Task Board API - Router
// File: crates/taskboard-api/src/router.rs
// ============================================================================

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use taskboard_shared::config::CorsSettings;

use crate::handlers::{admin, auth, board, categories, groups, health, profile, projects, statuses, tasks};
use crate::state::AppState;

pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        // Administration
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", put(admin::update_user).delete(admin::delete_user))
        // Groups & projects
        .route("/groups", post(groups::create_group).get(groups::list_groups))
        .route(
            "/groups/{id}",
            get(groups::get_group).put(groups::rename_group).delete(groups::delete_group),
        )
        .route("/projects", post(projects::create_project).get(projects::list_projects))
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::rename_project)
                .delete(projects::delete_project),
        )
        // Categories & statuses
        .route("/categories", post(categories::create_category).get(categories::list_categories))
        .route("/categories/{id}", delete(categories::delete_category))
        .route("/statuses", get(statuses::list_statuses))
        // Tasks: GET takes a project id, PUT/DELETE a task id
        .route("/tasks", post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::list_tasks).put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/board/{project_id}", get(board::get_board))
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    if settings.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
