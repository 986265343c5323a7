//! HttpBackend against a local fake REST server
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use goal_tracker::{
    GoalBackend, GoalDraft, HttpBackend, MilestonePatch, Priority, TrackerError,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Requests seen by the fake server, as (path, body)
type Seen = Arc<Mutex<Vec<(String, Value)>>>;

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "ada@example.com" && body["password"] == "password123" {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "user": {"id": 7, "name": "Ada", "email": "ada@example.com"}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "ada@example.com" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Email already exists"})),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(json!({"message": "User created successfully!"})),
        )
    }
}

async fn goals(Path(user_id): Path<i64>) -> (StatusCode, String) {
    match user_id {
        7 => (
            StatusCode::OK,
            json!([
                {"id": 1, "title": "Run 5K", "description": "Get fit", "category": "Health",
                 "priority": "high", "targetDate": "2030-04-01",
                 "milestones": [
                    {"id": 10, "title": "Buy shoes", "status": true},
                    {"id": 11, "title": "Run 1K", "status": false}
                 ]},
                {"id": 2, "title": "Save", "description": "", "category": "Finance",
                 "priority": "low", "targetDate": "2030-12-31", "milestones": []}
            ])
            .to_string(),
        ),
        8 => (
            StatusCode::OK,
            json!([{"id": 1, "title": "x", "priority": "urgent"}]).to_string(),
        ),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
    }
}

async fn create_goal(State(seen): State<Seen>, Json(body): Json<Value>) -> StatusCode {
    seen.lock().unwrap().push(("/goal/create_goal/".to_string(), body));
    StatusCode::CREATED
}

async fn update_milestone(
    State(seen): State<Seen>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    seen.lock()
        .unwrap()
        .push((format!("/goal/update_milestone/{}/", id), body));
    StatusCode::OK
}

async fn delete_goal(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if id == 1 {
        (StatusCode::OK, Json(json!({"message": "Goal deleted"})))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Goal not found!"})))
    }
}

/// Start the fake server on an ephemeral port
async fn spawn_server() -> (HttpBackend, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/user/login/", post(login))
        .route("/user/register/", post(register))
        .route("/goal/goal/{user_id}/", get(goals))
        .route("/goal/create_goal/", post(create_goal))
        .route("/goal/update_milestone/{id}/", put(update_milestone))
        .route("/goal/delete_goal/{id}/", delete(delete_goal))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let backend = HttpBackend::new(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap();
    (backend, seen)
}

#[tokio::test]
async fn test_login_returns_user() {
    let (backend, _) = spawn_server().await;

    let user = backend.login("ada@example.com", "password123").await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn test_login_unauthorized_is_invalid_credentials() {
    let (backend, _) = spawn_server().await;

    let result = backend.login("ada@example.com", "nope").await;
    assert!(matches!(result, Err(TrackerError::InvalidCredentials)));
}

#[tokio::test]
async fn test_register_new_account() {
    let (backend, _) = spawn_server().await;

    backend
        .register("Grace", "grace@example.com", "longenough")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_error_body_is_surfaced() {
    let (backend, _) = spawn_server().await;

    let err = backend
        .register("Ada", "ada@example.com", "password123")
        .await
        .unwrap_err();
    match err {
        TrackerError::Backend { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_goals_decodes_snapshot() {
    let (backend, _) = spawn_server().await;

    let set = backend.fetch_goals(7).await.unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.milestone_count(), 2);
    let goal = set.find_goal(1).unwrap();
    assert_eq!(goal.priority, Priority::High);
    assert_eq!(goal.target_date, NaiveDate::from_ymd_opt(2030, 4, 1));
    assert_eq!(goal.completed_milestones(), 1);
}

#[tokio::test]
async fn test_fetch_goals_rejects_malformed_response() {
    let (backend, _) = spawn_server().await;

    assert!(matches!(backend.fetch_goals(8).await, Err(TrackerError::Schema(_))));
}

#[tokio::test]
async fn test_fetch_goals_server_error() {
    let (backend, _) = spawn_server().await;

    let err = backend.fetch_goals(9).await.unwrap_err();
    assert!(matches!(err, TrackerError::Backend { status: 500, .. }));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_create_goal_payload_shape() {
    let (backend, seen) = spawn_server().await;
    let draft = GoalDraft {
        title: "Run 5K".to_string(),
        description: "Get fit".to_string(),
        category: "Health".to_string(),
        priority: Priority::High,
        target_date: NaiveDate::from_ymd_opt(2030, 4, 1),
    };

    backend.create_goal(7, &draft).await.unwrap();

    let seen = seen.lock().unwrap();
    let (path, body) = &seen[0];
    assert_eq!(path, "/goal/create_goal/");
    assert_eq!(
        body,
        &json!({
            "id": 7,
            "title": "Run 5K",
            "description": "Get fit",
            "category": "Health",
            "priority": "high",
            "targetDate": "2030-04-01"
        })
    );
}

#[tokio::test]
async fn test_milestone_patch_sends_only_set_fields() {
    let (backend, seen) = spawn_server().await;
    let patch = MilestonePatch {
        title: None,
        status: Some(true),
    };

    backend.update_milestone(11, &patch).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].0, "/goal/update_milestone/11/");
    assert_eq!(seen[0].1, json!({"status": true}));
}

#[tokio::test]
async fn test_delete_missing_goal_is_backend_404() {
    let (backend, _) = spawn_server().await;

    backend.delete_goal(1).await.unwrap();
    let err = backend.delete_goal(2).await.unwrap_err();
    match err {
        TrackerError::Backend { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Goal not found!");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
    let err = backend.fetch_goals(7).await.unwrap_err();
    assert!(matches!(err, TrackerError::Network(_)));
}
