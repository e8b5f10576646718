//! Todo CRUD handlers.
//!
//! These handlers use the repository trait object from `AppState`. Each one
//! returns `Result<_, ApiError>`, so the first failure produces the only
//! response for the request.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use todos_core::todo::{CreateTodoRequest, Todo};

use crate::{handlers::ApiError, state::AppState};

/// Create a new todo (POST /todos).
///
/// The id is generated here; any `Id` sent by the client is ignored. A body
/// sent without a JSON content type is validated as an empty object.
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Default::default()),
        Err(rejection) => return Err(ApiError::InvalidBody(rejection)),
    };

    let todo = CreateTodoRequest::from_json(&body)?.into_todo();

    state
        .todo_repo
        .create_todo(&todo)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(todo_id = %todo.id, email = %todo.email, "Created todo");

    Ok((
        StatusCode::CREATED,
        Json(format!("Todo item created with id '{}'", todo.id)),
    ))
}

/// Get a single todo (GET /todos/user/{email}/id/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path((email, id)): Path<(String, String)>,
) -> Result<Json<Todo>, ApiError> {
    state
        .todo_repo
        .get_todo(&email, &id)
        .await
        .map_err(ApiError::storage("Unable to get todo item"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Could not find todo item"))
}

/// Get every todo owned by one user (GET /todos/user/{email}).
pub async fn get_todos_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .todo_repo
        .get_todos_by_email(&email)
        .await
        .map_err(ApiError::storage("Unable to get todo items"))?;

    tracing::debug!(%email, count = todos.len(), "Listed todos for user");

    Ok(Json(todos))
}

/// List every todo for every user (GET /todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state
        .todo_repo
        .list_todos()
        .await
        .map_err(ApiError::storage("Unable to get todo items"))?;

    Ok(Json(todos))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use todos_core::storage::{Page, RepositoryError, Result, TodoRepository};
    use todos_core::todo::{Todo, TodoKey};
    use tower::ServiceExt;

    use crate::{app::create_app, state::AppState};

    /// Fails every operation and counts how often it was called.
    #[derive(Default)]
    struct FailingRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TodoRepository for FailingRepository {
        async fn create_todo(&self, _todo: &Todo) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::WriteFailed("Table not found".to_string()))
        }

        async fn get_todo(&self, _email: &str, _id: &str) -> Result<Option<Todo>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::ReadFailed("Table not found".to_string()))
        }

        async fn query_todos_page(
            &self,
            _email: &str,
            _start: Option<TodoKey>,
        ) -> Result<Page<Todo>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::ReadFailed("Table not found".to_string()))
        }

        async fn scan_todos_page(&self, _start: Option<TodoKey>) -> Result<Page<Todo>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RepositoryError::ReadFailed("Table not found".to_string()))
        }
    }

    fn failing_app() -> (Router, Arc<FailingRepository>) {
        let repo = Arc::new(FailingRepository::default());
        let app = create_app(AppState::new(repo.clone()));
        (app, repo)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_todo(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/todos")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_store_failure_is_500_string() {
        let (app, repo) = failing_app();

        let (status, body) = send(
            app,
            post_todo(json!({"Email": "a@b.com", "Title": "x", "IsCompleted": false})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!("Error:Unable to insert todo item"));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_store() {
        let bodies = [
            (
                json!({"Email": 123, "Title": "x", "IsCompleted": false}),
                r#""Email" must be a string"#,
            ),
            (
                json!({"Email": "", "Title": "x", "IsCompleted": false}),
                r#""Email" must not be empty"#,
            ),
            (
                json!({"Email": "a@b.com", "IsCompleted": false}),
                r#""Title" must be a string"#,
            ),
            (
                json!({"Email": "a@b.com", "Title": "x", "IsCompleted": 0}),
                r#""IsCompleted" must be a boolean"#,
            ),
        ];

        for (body, message) in bodies {
            let (app, repo) = failing_app();

            let (status, response) = send(app, post_todo(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({ "error": message }));
            assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, repo) = failing_app();
        let request = Request::builder()
            .method("POST")
            .uri("/todos")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"Email\": "))
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Request body must be valid JSON"}));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_json_body_is_bad_request() {
        let (app, repo) = failing_app();
        let request = Request::builder()
            .method("POST")
            .uri("/todos")
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Request body must be valid JSON"}));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_validates_empty_object() {
        let (app, repo) = failing_app();
        let request = Request::builder()
            .method("POST")
            .uri("/todos")
            .body(Body::from(
                json!({"Email": "a@b.com", "Title": "x", "IsCompleted": false}).to_string(),
            ))
            .unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "\"Email\" must be a string"}));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_todo_store_failure_is_500_not_404() {
        let (app, _) = failing_app();

        let (status, body) = send(app, get("/todos/user/a@b.com/id/123")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Unable to get todo item"}));
    }

    #[tokio::test]
    async fn test_get_todos_by_email_store_failure_is_500() {
        let (app, repo) = failing_app();

        let (status, body) = send(app, get("/todos/user/a@b.com")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Unable to get todo items"}));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_todos_store_failure_is_500() {
        let (app, _) = failing_app();

        let (status, body) = send(app, get("/todos")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Unable to get todo items"}));
    }
}
