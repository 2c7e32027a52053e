use axum::Router;
use axum::body::to_bytes;
use serde_json::{Value, json};
use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::http::routes::todos;
use todo_api::http::routing;
use todo_api::infrastructure::memory_repo::InMemoryTodoRepository;

fn app() -> Router {
    let service = TodoServiceImpl::new(InMemoryTodoRepository::new());
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn acceptance_create_list_get_update_delete() {
    let app = app();

    // create
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "  Test ", "description": " First " }))).await;
    assert_eq!(res.status(), 201);
    let body = json_body(res).await;
    assert_eq!(body["success"], json!(true));
    let todo = &body["data"];
    assert_eq!(todo["id"], json!(1));
    assert_eq!(todo["title"], json!("Test"));
    assert_eq!(todo["description"], json!("First"));
    assert_eq!(todo["completed"], json!(false));
    assert!(todo["createdAt"].is_string());
    assert!(todo.get("updatedAt").is_none());

    // list
    let res = request(&app, "GET", "/todos", None).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // get
    let res = request(&app, "GET", "/todos/1", None).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["data"]["title"], json!("Test"));

    // update
    let res = request(&app, "PUT", "/todos/1", Some(json!({ "completed": true }))).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["data"]["completed"], json!(true));
    assert_eq!(body["data"]["title"], json!("Test"));
    assert!(body["data"]["updatedAt"].is_string());

    // delete returns the removed item
    let res = request(&app, "DELETE", "/todos/1", None).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["completed"], json!(true));

    // get 404
    let res = request(&app, "GET", "/todos/1", None).await;
    assert_eq!(res.status(), 404);
    let body = json_body(res).await;
    assert_eq!(body, json!({ "success": false, "error": "Todo not found" }));
}

#[tokio::test]
async fn create_without_title_is_rejected() {
    let app = app();

    for payload in [json!({}), json!({ "title": "   " }), json!({ "title": "", "description": "x" })] {
        let res = request(&app, "POST", "/todos", Some(payload)).await;
        assert_eq!(res.status(), 400);
        let body = json_body(res).await;
        assert_eq!(body, json!({ "success": false, "error": "Title is required" }));
    }

    // nothing was stored
    let res = request(&app, "GET", "/todos", None).await;
    let body = json_body(res).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn ids_stay_monotonic_across_deletes() {
    let app = app();

    for title in ["a", "b"] {
        let res = request(&app, "POST", "/todos", Some(json!({ "title": title }))).await;
        assert_eq!(res.status(), 201);
    }
    let res = request(&app, "DELETE", "/todos/2", None).await;
    assert_eq!(res.status(), 200);

    let res = request(&app, "POST", "/todos", Some(json!({ "title": "c" }))).await;
    let body = json_body(res).await;
    assert_eq!(body["data"]["id"], json!(3));

    let res = request(&app, "GET", "/todos", None).await;
    let body = json_body(res).await;
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn update_validates_title_and_clears_description() {
    let app = app();
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "keep", "description": "note" }))).await;
    assert_eq!(res.status(), 201);

    // empty title aborts the whole update
    let res = request(&app, "PUT", "/todos/1", Some(json!({ "title": " ", "completed": true }))).await;
    assert_eq!(res.status(), 400);
    let body = json_body(res).await;
    assert_eq!(body, json!({ "success": false, "error": "Title cannot be empty" }));

    let res = request(&app, "GET", "/todos/1", None).await;
    let body = json_body(res).await;
    assert_eq!(body["data"]["completed"], json!(false));
    assert!(body["data"].get("updatedAt").is_none());

    // explicitly empty description clears the stored value
    let res = request(&app, "PUT", "/todos/1", Some(json!({ "description": "" }))).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["data"]["description"], json!(""));
    assert_eq!(body["data"]["title"], json!("keep"));
}

#[tokio::test]
async fn update_rejects_non_boolean_completed() {
    let app = app();
    let res = request(&app, "POST", "/todos", Some(json!({ "title": "strict" }))).await;
    assert_eq!(res.status(), 201);

    let res = request(&app, "PUT", "/todos/1", Some(json!({ "completed": "yes" }))).await;
    assert_eq!(res.status(), 400);
    let body = json_body(res).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn missing_and_non_numeric_ids_are_not_found() {
    let app = app();

    for path in ["/todos/999999", "/todos/abc"] {
        let res = request(&app, "GET", path, None).await;
        assert_eq!(res.status(), 404);
        let body = json_body(res).await;
        assert_eq!(body, json!({ "success": false, "error": "Todo not found" }));
    }

    let res = request(&app, "PUT", "/todos/999999", Some(json!({ "title": "x" }))).await;
    assert_eq!(res.status(), 404);
    let res = request(&app, "DELETE", "/todos/999999", None).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn root_endpoint_describes_the_service() {
    let app = app();
    let res = request(&app, "GET", "/", None).await;
    assert_eq!(res.status(), 200);
    let body = json_body(res).await;
    assert_eq!(body["message"], json!("Todo App API"));
    assert_eq!(body["version"], json!("1.0.0"));
    assert_eq!(body["endpoints"]["POST /todos"], json!("Create a new todo"));
}

#[tokio::test]
async fn unknown_routes_get_the_envelope_404() {
    let app = app();
    let res = request(&app, "GET", "/nope", None).await;
    assert_eq!(res.status(), 404);
    let body = json_body(res).await;
    assert_eq!(body, json!({ "success": false, "error": "Endpoint not found" }));
}

async fn request(app: &Router, method: &str, path: &str, body: Option<Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder()
        .method(Method::from_bytes(method.as_bytes()).unwrap())
        .uri(path);
    let req = match body {
        Some(json) => req
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn json_body(res: hyper::Response<axum::body::Body>) -> Value {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
