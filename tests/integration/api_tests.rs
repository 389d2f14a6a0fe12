//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, AppConfig, AppState};

fn app() -> Router {
    api::create_router(AppState::new(AppConfig::default()))
}

/// Send a request and return status plus parsed JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn book(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
    json!({
        "name": name,
        "year": 2020,
        "author": "A",
        "summary": "s",
        "publisher": "P",
        "pageCount": page_count,
        "readPage": read_page,
        "reading": reading
    })
}

/// Create a book and return its id
async fn create(app: &Router, payload: Value) -> String {
    let (status, body) = send(app, Method::POST, "/books", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["bookId"].as_str().expect("No book ID").to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(book("Go", 100, 100, false))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Book added successfully");
    let id = body["data"]["bookId"].as_str().expect("No book ID");
    assert_eq!(id.len(), 16);

    let (status, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let record = &body["data"]["book"];
    assert_eq!(record["id"], id);
    assert_eq!(record["name"], "Go");
    assert_eq!(record["year"], 2020);
    assert_eq!(record["author"], "A");
    assert_eq!(record["summary"], "s");
    assert_eq!(record["publisher"], "P");
    assert_eq!(record["pageCount"], 100);
    assert_eq!(record["readPage"], 100);
    assert_eq!(record["finished"], true);
    assert_eq!(record["reading"], false);
    assert_eq!(record["insertedAt"], record["updatedAt"]);
    assert!(record["insertedAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_without_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "pageCount": 10, "readPage": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Failed to add book. Please provide the book name");
}

#[tokio::test]
async fn test_create_read_page_above_page_count() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(book("Bad", 50, 60, false))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Failed to add book. readPage must not be greater than pageCount"
    );

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_a_fail_response() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "Go", "pageCount": -5 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_list_projects_id_name_publisher() {
    let app = app();
    let id = create(&app, book("Go", 10, 1, false)).await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["data"]["books"],
        json!([{ "id": id, "name": "Go", "publisher": "P" }])
    );
}

#[tokio::test]
async fn test_list_reading_filter() {
    let app = app();
    let reading = create(&app, book("Reading", 10, 1, true)).await;
    create(&app, book("Shelved", 10, 1, false)).await;

    let (_, body) = send(&app, Method::GET, "/books?reading=1", None).await;
    assert_eq!(
        body["data"]["books"],
        json!([{ "id": reading, "name": "Reading", "publisher": "P" }])
    );

    let (_, body) = send(&app, Method::GET, "/books?reading=0", None).await;
    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Shelved");
}

#[tokio::test]
async fn test_list_repeated_filter_key_uses_first_value() {
    let app = app();
    let reading = create(&app, book("Reading", 10, 1, true)).await;
    create(&app, book("Shelved", 10, 1, false)).await;

    let (status, body) = send(&app, Method::GET, "/books?reading=1&reading=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["data"]["books"],
        json!([{ "id": reading, "name": "Reading", "publisher": "P" }])
    );

    let (status, body) = send(&app, Method::GET, "/books?name=shelved&name=reading&page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Shelved");
}

#[tokio::test]
async fn test_list_finished_filter() {
    let app = app();
    create(&app, book("Done", 10, 10, false)).await;
    create(&app, book("Halfway", 10, 5, false)).await;

    let (_, body) = send(&app, Method::GET, "/books?finished=1", None).await;
    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Done");
}

#[tokio::test]
async fn test_list_name_filter_wins_over_reading() {
    let app = app();
    create(&app, book("Dicoding Academy", 10, 1, false)).await;
    create(&app, book("Other", 10, 1, true)).await;

    let (_, body) = send(&app, Method::GET, "/books?name=dicoding&reading=1", None).await;
    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Dicoding Academy");
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_update_book() {
    let app = app();
    let id = create(&app, book("Old", 100, 10, true)).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(book("New", 300, 300, false)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Book updated successfully");

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    let record = &body["data"]["book"];
    assert_eq!(record["name"], "New");
    assert_eq!(record["pageCount"], 300);
    assert_eq!(record["finished"], true);
    assert_eq!(record["reading"], false);
}

#[tokio::test]
async fn test_update_failures() {
    let app = app();
    let id = create(&app, book("Keep", 100, 10, false)).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(json!({ "pageCount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Failed to update book. Please provide the book name");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(book("Keep", 10, 11, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Failed to update book. readPage must not be greater than pageCount"
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        "/books/unknown",
        Some(book("Keep", 10, 1, false)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Failed to update book. Id not found");

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(body["data"]["book"]["pageCount"], 100);
}

#[tokio::test]
async fn test_create_list_delete_scenario() {
    let app = app();
    let id = create(&app, book("Go", 100, 100, false)).await;

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(body["data"]["book"]["finished"], true);

    let (status, _) = send(&app, Method::POST, "/books", Some(book("Bad", 50, 60, false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(body["books"], 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Book deleted successfully");

    let (status, _) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Failed to delete book. Id not found");
}
