//! End-to-end scenarios against an in-process backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use axum::response::{IntoResponse, Response};
use plx_client::actions::{
    ActionError, FormData, create_project_action, load_project_page, query_model_action,
};
use plx_client::poller::{PollSession, PollSettings};
use plx_client::{ApiClient, ApiError};
use plx_core::entities::VARIANT_A;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: Option<String>,
    body: Bytes,
}

#[derive(Default)]
struct Backend {
    requests: Mutex<Vec<Recorded>>,
    statuses: Mutex<VecDeque<Value>>,
}

impl Backend {
    fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect()
    }
}

fn project_id(uri: &Uri) -> String {
    uri.query()
        .and_then(|q| q.strip_prefix("project_id="))
        .unwrap_or_default()
        .to_string()
}

async fn handle(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    backend.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body: body.clone(),
    });

    if project_id(&uri) == "gone" {
        return (StatusCode::NOT_FOUND, "no such project").into_response();
    }

    let payload = match (method, uri.path()) {
        (Method::GET, "/allprojects") => json!({"projects": ["p1"]}),
        (Method::POST, "/createproject") => {
            let input: Value = serde_json::from_slice(&body).unwrap();
            if input["project_name"] == "taken" {
                json!({"status": "failure", "message": "Project name already exists"})
            } else {
                json!({"status": "success", "project_id": "p1", "message": "queued"})
            }
        }
        (Method::GET, "/projectstatus") => {
            let next = backend.statuses.lock().unwrap().pop_front();
            next.unwrap_or_else(|| json!({"status": "ready", "last_updated": "", "message": ""}))
        }
        (Method::GET, "/projectinfo") => json!({
            "project_name": "Rates",
            "creator_name": "ana",
            "description": "",
            "tags": ["economy"],
            "variants": {"variant_a": ["Rates should fall."], "variant_b": []}
        }),
        (Method::GET, "/allmodels") => json!({"models": [{"model_id": "single_judge"}]}),
        (Method::GET, "/scrapeddata") => json!({"variants": {"variant_a": []}}),
        (Method::GET, "/history") => json!({"history": []}),
        (Method::POST, "/query") => {
            let input: Value = serde_json::from_slice(&body).unwrap();
            if input["query"] == "explode" {
                json!({"score": 0, "alignment": "", "error": "model offline"})
            } else {
                json!({"score": 70, "alignment": "leans_variant_b", "biases": {"variant_a": 0.3, "variant_b": 0.7}})
            }
        }
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    Json(payload).into_response()
}

async fn serve(backend: Arc<Backend>) -> ApiClient {
    let router = Router::new().fallback(handle).with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    ApiClient::with_base_url(&format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn get_params_travel_in_the_query_string() {
    let backend = Arc::new(Backend::default());
    let client = serve(Arc::clone(&backend)).await;

    let status = client.project_status("p1").await.unwrap();
    assert!(status.is_ready());

    let requests = backend.requests_to("/projectstatus");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].query.as_deref(), Some("project_id=p1"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn create_sends_empty_variant_arrays() {
    let backend = Arc::new(Backend::default());
    let client = serve(Arc::clone(&backend)).await;

    let form = FormData::draft("Rates", "ana", "", "economy, policy");
    let project_id = create_project_action(&client, &form).await.unwrap();
    assert_eq!(project_id, "p1");

    let requests = backend.requests_to("/createproject");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].query.is_none());
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "project_name": "Rates",
            "creator_name": "ana",
            "description": "",
            "tags": ["economy", "policy"],
            "variant": {"variant_a": [], "variant_b": []}
        })
    );
}

#[tokio::test]
async fn rejected_creation_surfaces_backend_message() {
    let backend = Arc::new(Backend::default());
    let client = serve(backend).await;

    let form = FormData::draft("taken", "ana", "", "").with(VARIANT_A, "snippet");
    let err = create_project_action(&client, &form).await.unwrap_err();
    assert_eq!(
        err,
        ActionError::Rejected("Project name already exists".into())
    );
}

#[tokio::test]
async fn not_found_status_is_reported_with_text_and_code() {
    let backend = Arc::new(Backend::default());
    let client = serve(backend).await;

    let err = client.project_info("gone").await.unwrap_err();
    assert_eq!(err.to_string(), "API request failed: Not Found (404)");
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn project_page_loads_or_is_not_found() {
    let backend = Arc::new(Backend::default());
    let client = serve(Arc::clone(&backend)).await;

    let page = load_project_page(&client, "p1").await.unwrap();
    assert!(page.is_ready());
    assert_eq!(page.info.project_name, "Rates");
    assert_eq!(page.models[0].model_id, "single_judge");
    assert!(page.history.is_empty());

    let err = load_project_page(&client, "gone").await.unwrap_err();
    assert_eq!(err, ActionError::NotFound("gone".into()));
}

#[tokio::test]
async fn query_errors_in_the_body_are_rejections() {
    let backend = Arc::new(Backend::default());
    let client = serve(backend).await;

    let response = query_model_action(&client, "p1", "single_judge", "Who gains?")
        .await
        .unwrap();
    assert!((response.score - 70.0).abs() < f64::EPSILON);

    let err = query_model_action(&client, "p1", "single_judge", "explode")
        .await
        .unwrap_err();
    assert_eq!(err, ActionError::Rejected("model offline".into()));
}

#[tokio::test]
async fn create_then_poll_until_ready_and_redirect() {
    let backend = Arc::new(Backend::default());
    backend.statuses.lock().unwrap().extend([
        json!({"status": "scraping", "last_updated": "", "message": "fetching sources"}),
        json!({"status": "ready", "last_updated": "", "message": "fetching sources\n\nindexed 3 files"}),
    ]);
    let client = Arc::new(serve(Arc::clone(&backend)).await);

    let form = FormData::draft("Rates", "ana", "", "").with(VARIANT_A, "Rates should fall.");
    let project_id = create_project_action(&client, &form).await.unwrap();

    let settings = PollSettings {
        interval: Duration::from_millis(100),
        redirect_delay: Duration::from_millis(1_000),
    };
    let session = PollSession::spawn(Arc::clone(&client), &project_id, settings);

    let mut updates = session.subscribe();
    let scraping = updates
        .wait_for(|state| state.status == "scraping")
        .await
        .unwrap()
        .clone();
    assert_eq!(scraping.status_label(), "SCRAPING");
    assert!(!scraping.is_ready());
    assert_eq!(
        scraping.log,
        vec!["Project created with ID: p1", "fetching sources"]
    );

    updates.wait_for(|state| state.is_ready()).await.unwrap();
    let ready_at = tokio::time::Instant::now();

    assert_eq!(session.navigation().await.as_deref(), Some("/project/p1"));
    assert!(ready_at.elapsed() >= Duration::from_millis(900));

    let state = session.snapshot();
    assert_eq!(state.status_label(), "READY");
    assert_eq!(
        state.log,
        vec![
            "Project created with ID: p1",
            "fetching sources",
            "indexed 3 files",
            "Project is ready! Redirecting...",
        ]
    );

    let checks = backend.requests_to("/projectstatus").len();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(backend.requests_to("/projectstatus").len(), checks);
}
