//! Course routes exercised in-process through `Router::dispatch`.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use course_registry::{Course, CourseId, Courses, Registry, Router, api, default_catalogue};

fn app() -> Router {
    api::routes(Courses::new(Registry::with_courses(default_catalogue()).unwrap()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
    let mut builder = http::Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Bytes::from(value.to_string())
        }
        None => Bytes::new(),
    };
    let res = app.dispatch(builder.body(Full::new(body)).unwrap()).await;
    let status = res.status().as_u16();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(value: &Value) -> Vec<CourseId> {
    value.as_array().unwrap().iter().map(|c| c["id"].as_i64().unwrap()).collect()
}

#[tokio::test]
async fn list_returns_every_course_in_order() {
    let (status, body) = send(&app(), "GET", "/", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::to_value(default_catalogue()).unwrap());
}

#[tokio::test]
async fn get_by_id() {
    let (status, body) = send(&app(), "GET", "/3", None).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "id": 3, "title": "Javascript", "description": "Javascript course from zero to hero" })
    );
}

#[tokio::test]
async fn get_missing_id_is_404_with_detail() {
    let (status, body) = send(&app(), "GET", "/99", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "No course found with course id 99" }));
}

#[tokio::test]
async fn negative_ids_are_looked_up_not_rejected() {
    let app = app();

    let (status, body) = send(&app, "GET", "/-1", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "No course found with course id -1" }));

    let (status, body) = send(&app, "DELETE", "/delete?course_id=-1", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "No course found with course id -1" }));

    let change = json!({ "title": "x", "description": "y" });
    let (status, _) = send(&app, "PUT", "/update/-7", Some(change)).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn get_non_integer_id_is_422() {
    let (status, body) = send(&app(), "GET", "/abc", None).await;
    assert_eq!(status, 422);
    assert!(body["detail"].as_str().unwrap().contains("course_id"));
}

#[tokio::test]
async fn search_by_title_fragment() {
    let app = app();

    let (status, body) = send(&app, "GET", "/courses/?title=Python", None).await;
    assert_eq!(status, 200);
    assert_eq!(ids(&body), [1i64, 2]);

    let (_, body) = send(&app, "GET", "/courses?title=React", None).await;
    assert_eq!(ids(&body), [4i64]);

    let (_, body) = send(&app, "GET", "/courses/?title=python", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, "GET", "/courses/?title=", None).await;
    assert_eq!(ids(&body), [1i64, 2, 3, 4]);
}

#[tokio::test]
async fn search_without_title_is_422() {
    let (status, _) = send(&app(), "GET", "/courses/", None).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn create_assigns_next_id_and_ignores_supplied_one() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/create",
        Some(json!({ "id": 100, "title": "Go", "description": "Go course" })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": 5, "title": "Go", "description": "Go course" }));

    let (status, body) = send(&app, "GET", "/5", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Go");
}

#[tokio::test]
async fn create_with_missing_field_is_422() {
    let (status, body) = send(&app(), "POST", "/create", Some(json!({ "title": "Go" }))).await;
    assert_eq!(status, 422);
    assert!(body["detail"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn update_overwrites_title_and_description_only() {
    let app = app();
    let change = json!({ "id": 9, "title": "React 19", "description": "Hooks and server components" });

    let (status, body) = send(&app, "PUT", "/update/4", Some(change.clone())).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "id": 4, "title": "React 19", "description": "Hooks and server components" })
    );

    let (_, again) = send(&app, "PUT", "/update/4", Some(change)).await;
    assert_eq!(again, body);

    let (status, _) = send(&app, "GET", "/9", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn update_missing_id_is_404() {
    let change = json!({ "title": "x", "description": "y" });
    let (status, body) = send(&app(), "PUT", "/update/42", Some(change)).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "No course found with course id 42" }));
}

#[tokio::test]
async fn delete_returns_course_and_removes_it() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/delete?course_id=2", None).await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Python Advanced");

    let (status, body) = send(&app, "GET", "/2", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "No course found with course id 2" }));

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(ids(&body), [1i64, 3, 4]);
}

#[tokio::test]
async fn delete_missing_id_leaves_registry_unchanged() {
    let app = app();

    let (status, _) = send(&app, "DELETE", "/delete?course_id=99", None).await;
    assert_eq!(status, 404);

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(ids(&body), [1i64, 2, 3, 4]);
}

#[tokio::test]
async fn delete_without_course_id_is_422() {
    let (status, _) = send(&app(), "DELETE", "/delete", None).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let app = app();
    send(&app, "DELETE", "/delete?course_id=4", None).await;

    let course = json!({ "title": "Elm", "description": "Pure functional UI" });
    let (_, body) = send(&app, "POST", "/create", Some(course)).await;
    assert_eq!(body["id"], 5);
}

#[tokio::test]
async fn empty_registry_starts_at_one() {
    let app = api::routes(Courses::default());
    let course = json!({ "title": "Rust", "description": "Systems programming" });

    let (_, body) = send(&app, "POST", "/create", Some(course)).await;

    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn create_after_largest_possible_id_is_500_not_a_wrap() {
    let seed = [Course::new(CourseId::MAX, "Last", "No room after this one")];
    let app = api::routes(Courses::new(Registry::with_courses(seed).unwrap()));
    let course = json!({ "title": "Overflow", "description": "" });

    let (status, body) = send(&app, "POST", "/create", Some(course)).await;
    assert_eq!(status, 500);
    assert!(body["detail"].as_str().unwrap().contains("exhausted"));

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(ids(&body), [CourseId::MAX]);
}

#[tokio::test]
async fn unrouted_requests() {
    let app = app();

    let (status, body) = send(&app, "PATCH", "/", None).await;
    assert_eq!(status, 405);
    assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

    let (status, body) = send(&app, "GET", "/nope/deeper", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "Not Found" }));
}

#[tokio::test]
async fn health_endpoints() {
    let app = app();

    let (status, body) = send(&app, "GET", "/healthz", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, "GET", "/readyz", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ready", "courses": 4 }));
}
