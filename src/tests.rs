use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::infra::http::client::{HttpListSource, ParamKeys};
use crate::usecase::ports::source::FetchError;
use crate::usecase::services::fetch_controller::FetchController;
use crate::usecase::services::query_service::QueryService;

#[derive(Debug, Clone)]
struct SeenRequest {
    params: HashMap<String, String>,
    authorization: Option<String>,
}

#[derive(Clone)]
struct ServerState {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    status: StatusCode,
    body: String,
}

async fn handle_list(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .seen
        .lock()
        .expect("seen lock should not be poisoned")
        .push(SeenRequest {
            params,
            authorization,
        });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

async fn spawn_list_server(
    status: StatusCode,
    body: Value,
) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    spawn_raw_list_server(status, body.to_string()).await
}

async fn spawn_raw_list_server(
    status: StatusCode,
    body: String,
) -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind test listener");
    let addr = listener.local_addr().expect("listener should have address");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        seen: seen.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/jobs", get(handle_list))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/jobs"), seen)
}

fn service_for(url: &str, token: Option<&str>) -> QueryService {
    let source = HttpListSource::new(url).with_token(token.map(str::to_string));
    QueryService::new(Arc::new(source))
}

async fn run_refresh(controller: &mut FetchController, service: &QueryService) {
    let ticket = controller.refresh();
    let outcome = service.fetch_page(&ticket.request).await;
    assert!(controller.complete(&ticket, outcome), "latest ticket should apply");
}

#[tokio::test]
async fn default_response_shape_populates_result_state() {
    let (url, _seen) = spawn_list_server(
        StatusCode::OK,
        json!({"data": {"list": [{"id": 1}, {"id": 2}], "total": 2, "totalPages": 1}}),
    )
    .await;
    let service = service_for(&url, None);
    let mut controller = FetchController::new(10);

    run_refresh(&mut controller, &service).await;

    let result = controller.result();
    assert_eq!(result.rows, vec![json!({"id": 1}), json!({"id": 2})]);
    assert_eq!(result.total_items, 2);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.error, None);
    assert!(!result.loading);
}

#[tokio::test]
async fn missing_total_pages_defaults_to_zero() {
    let (url, _seen) = spawn_list_server(
        StatusCode::OK,
        json!({"data": {"list": [{"id": 1}], "total": 1}}),
    )
    .await;
    let service = service_for(&url, None);
    let mut controller = FetchController::new(10);

    run_refresh(&mut controller, &service).await;

    assert_eq!(controller.result().total_pages, 0);
    assert_eq!(controller.result().rows.len(), 1);
}

#[tokio::test]
async fn request_carries_query_parameters_and_bearer_token() {
    let (url, seen) = spawn_list_server(
        StatusCode::OK,
        json!({"data": {"list": [], "total": 0, "totalPages": 0}}),
    )
    .await;
    let service = service_for(&url, Some("secret-token"));
    let mut controller = FetchController::new(25);
    controller.set_search("senior dev");
    controller.toggle_sort("createdAt");
    controller.toggle_sort("createdAt");

    run_refresh(&mut controller, &service).await;

    let seen = seen.lock().expect("seen lock should not be poisoned");
    let request = seen.last().expect("server should have been called");
    assert_eq!(request.params.get("page").map(String::as_str), Some("1"));
    assert_eq!(request.params.get("limit").map(String::as_str), Some("25"));
    assert_eq!(
        request.params.get("search").map(String::as_str),
        Some("senior dev")
    );
    assert_eq!(
        request.params.get("sort").map(String::as_str),
        Some("createdAt,desc")
    );
    assert_eq!(request.authorization.as_deref(), Some("Bearer secret-token"));
}

#[tokio::test]
async fn unsorted_empty_search_request_sends_only_page_and_limit() {
    let (url, seen) = spawn_list_server(StatusCode::OK, json!({})).await;
    let service = service_for(&url, None);
    let mut controller = FetchController::new(10);

    run_refresh(&mut controller, &service).await;

    let seen = seen.lock().expect("seen lock should not be poisoned");
    let request = seen.last().expect("server should have been called");
    let mut keys: Vec<&str> = request.params.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["limit", "page"]);
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn custom_parameter_keys_are_used() {
    let (url, seen) = spawn_list_server(StatusCode::OK, json!({})).await;
    let source = HttpListSource::new(url).with_param_keys(ParamKeys {
        page: "p".to_string(),
        limit: "per_page".to_string(),
        search: "q".to_string(),
        sort: "order".to_string(),
    });
    let service = QueryService::new(Arc::new(source));
    let mut controller = FetchController::new(10);
    controller.set_search("x");

    run_refresh(&mut controller, &service).await;

    let seen = seen.lock().expect("seen lock should not be poisoned");
    let request = seen.last().expect("server should have been called");
    assert_eq!(request.params.get("p").map(String::as_str), Some("1"));
    assert_eq!(request.params.get("per_page").map(String::as_str), Some("10"));
    assert_eq!(request.params.get("q").map(String::as_str), Some("x"));
}

#[tokio::test]
async fn server_error_clears_previous_rows() {
    let (ok_url, _) = spawn_list_server(
        StatusCode::OK,
        json!({"data": {"list": [{"id": 1}], "total": 1, "totalPages": 1}}),
    )
    .await;
    let (failing_url, _) = spawn_list_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "boom"}),
    )
    .await;
    let mut controller = FetchController::new(10);
    run_refresh(&mut controller, &service_for(&ok_url, None)).await;
    assert_eq!(controller.result().rows.len(), 1);

    run_refresh(&mut controller, &service_for(&failing_url, None)).await;

    let result = controller.result();
    assert!(result.rows.is_empty());
    assert_eq!(result.total_items, 0);
    assert_eq!(result.total_pages, 0);
    assert_eq!(
        result.error.as_deref(),
        Some("Request failed with status code 500")
    );
}

#[tokio::test]
async fn malformed_body_is_reported_as_decode_error() {
    let (url, _seen) = spawn_raw_list_server(StatusCode::OK, "not json".to_string()).await;
    let service = service_for(&url, None);
    let ticket = FetchController::new(10).refresh();

    let err = service
        .fetch_page(&ticket.request)
        .await
        .expect_err("body should not parse");

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_sets_error_message() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind probe listener");
    let addr = listener.local_addr().expect("listener should have address");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let service = service_for(&format!("http://{addr}/jobs"), None);
    let mut controller = FetchController::new(10);

    run_refresh(&mut controller, &service).await;

    let result = controller.result();
    assert!(result.rows.is_empty());
    let message = result.error.as_deref().expect("error should be set");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn paging_through_results_requests_each_page() {
    let (url, seen) = spawn_list_server(
        StatusCode::OK,
        json!({"data": {"list": [{"id": 1}], "total": 30, "totalPages": 3}}),
    )
    .await;
    let service = service_for(&url, None);
    let mut controller = FetchController::new(10);
    run_refresh(&mut controller, &service).await;

    let ticket = controller.set_page(3).expect("page 3 should be accepted");
    let outcome = service.fetch_page(&ticket.request).await;
    controller.complete(&ticket, outcome);
    assert!(controller.set_page(4).is_none());
    assert!(controller.set_page(3).is_none());

    let seen = seen.lock().expect("seen lock should not be poisoned");
    let pages: Vec<&str> = seen
        .iter()
        .filter_map(|request| request.params.get("page").map(String::as_str))
        .collect();
    assert_eq!(pages, vec!["1", "3"]);
    assert_eq!(controller.current_page(), 3);
}
