use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use habit_tracker_web::*;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    storage: Arc<SqliteStorage>,
    _static_dir: tempfile::TempDir,
}

impl TestApp {
    fn new() -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("style.css"), "body { color: red; }").unwrap();

        let state = AppState::new(SqliteStorage::open_in_memory().expect("Failed to open storage"));
        let storage = state.storage.clone();
        let router = build_router(state, static_dir.path());

        Self { router, storage, _static_dir: static_dir }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("request failed")
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn add(&self, name: &str) -> Response {
        let body = format!("name={}", name);
        self.send(
            Request::post("/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    async fn delete_all(&self) -> Response {
        self.send(Request::post("/delete_all").body(Body::empty()).unwrap()).await
    }
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirects_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_index_renders_empty_list() {
    let app = TestApp::new();
    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("No habits yet"));
}

#[tokio::test]
async fn test_add_then_list() {
    let app = TestApp::new();
    let response = app.add("Read").await;
    assert_redirects_home(&response);

    let habits = app.storage.list_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Read");
    assert_eq!(habits[0].streak, 0);

    let html = body_string(app.get("/").await).await;
    assert!(html.contains("Read"));
    assert!(html.contains("Streak: 0"));
    assert!(html.contains("width: 0%"));
}

#[tokio::test]
async fn test_add_empty_name_is_ignored() {
    let app = TestApp::new();
    app.add("Run").await;

    let response = app.add("").await;
    assert_redirects_home(&response);
    assert_eq!(app.storage.list_habits().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_missing_field_is_ignored() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::post("/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("other=value"))
                .unwrap(),
        )
        .await;

    assert_redirects_home(&response);
    assert!(app.storage.list_habits().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_without_body_redirects() {
    let app = TestApp::new();
    let response = app.send(Request::post("/add").body(Body::empty()).unwrap()).await;

    assert_redirects_home(&response);
    assert!(app.storage.list_habits().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_with_unexpected_content_type_redirects() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::post("/add")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"Read"}"#))
                .unwrap(),
        )
        .await;

    assert_redirects_home(&response);
    assert!(app.storage.list_habits().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_multipart_form() {
    let app = TestApp::new();
    let boundary = "habit-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nRead\r\n--{b}--\r\n",
        b = boundary
    );
    let response = app
        .send(
            Request::post("/add")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await;

    assert_redirects_home(&response);
    let habits = app.storage.list_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Read");
    assert_eq!(habits[0].streak, 0);
}

#[tokio::test]
async fn test_add_malformed_multipart_redirects() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::post("/add")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=x")
                .body(Body::from("not multipart at all"))
                .unwrap(),
        )
        .await;

    assert_redirects_home(&response);
    assert!(app.storage.list_habits().unwrap().is_empty());
}

#[tokio::test]
async fn test_add_invalid_utf8_redirects() {
    let app = TestApp::new();
    let response = app.add("%FF").await;
    assert_redirects_home(&response);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_marks_are_all_counted() {
    let app = Arc::new(TestApp::new());
    app.add("Read").await;

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let app = Arc::clone(&app);
            tokio::spawn(async move {
                for _ in 0..10 {
                    assert_redirects_home(&app.get("/mark_done/1").await);
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(app.storage.get_habit(HabitId(1)).unwrap().streak, 80);
}

#[tokio::test]
async fn test_mark_done_increments_streak() {
    let app = TestApp::new();
    app.add("Meditate").await;

    for _ in 0..3 {
        let response = app.get("/mark_done/1").await;
        assert_redirects_home(&response);
    }

    let habit = app.storage.get_habit(HabitId(1)).unwrap();
    assert_eq!(habit.streak, 3);
    assert_eq!(habit.name, "Meditate");

    let html = body_string(app.get("/").await).await;
    assert!(html.contains("width: 30%"));
}

#[tokio::test]
async fn test_mark_done_unknown_habit() {
    let app = TestApp::new();
    app.add("Read").await;
    let before = app.storage.list_habits().unwrap();

    let response = app.get("/mark_done/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Habit not found" }));

    assert_eq!(app.storage.list_habits().unwrap(), before);
}

#[tokio::test]
async fn test_mark_done_non_numeric_id() {
    let app = TestApp::new();
    let response = app.get("/mark_done/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_resets_numbering() {
    let app = TestApp::new();
    app.add("Read").await;
    app.add("Run").await;
    app.add("Write").await;

    let response = app.delete_all().await;
    assert_redirects_home(&response);
    assert!(app.storage.list_habits().unwrap().is_empty());

    app.add("Stretch").await;
    let habits = app.storage.list_habits().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, HabitId(1));
    assert_redirects_home(&app.get("/mark_done/1").await);
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let app = TestApp::new();
    app.add("Read").await;
    app.add("Run").await;

    let first = body_string(app.get("/").await).await;
    let second = body_string(app.get("/").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_static_assets() {
    let app = TestApp::new();

    let response = app.get("/static/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body { color: red; }");

    let response = app.get("/static/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new();
    let response = app.get("/").await;
    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(request_id.len(), 36);
    assert_eq!(request_id.matches('-').count(), 4);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = TestApp::new();
    let response = app.get("/delete_all").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
