use axum::{routing::get, Router};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};

use crate::{
    handlers::{
        not_found::not_found,
        todos::{create_todo, get_todo, get_todos_by_email, list_todos},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Unknown paths and unsupported methods on known paths both answer with the
/// JSON `Not Found` body. A trailing slash is trimmed before routing, so
/// `/todos/` and `/todos` reach the same handler.
pub fn create_app(state: AppState) -> Router {
    let todo_routes = Router::new()
        .route("/", get(list_todos).post(create_todo).fallback(not_found))
        .route("/user/{email}", get(get_todos_by_email).fallback(not_found))
        .route("/user/{email}/id/{id}", get(get_todo).fallback(not_found));

    let routes = Router::new()
        .nest("/todos", todo_routes)
        .fallback(not_found)
        .with_state(state);

    // Path normalization has to run before the router matches, so it wraps
    // the whole router instead of being added with `Router::layer`.
    Router::new()
        .fallback_service(NormalizePath::trim_trailing_slash(routes))
        .layer(TraceLayer::new_for_http())
}
