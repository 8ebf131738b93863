//! In-memory stand-in for the portfolio backend, served over real HTTP.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use folio_app::AppContext;
use folio_auth::{ClientStorage, MemoryStorage, TOKEN_KEY};
use folio_client::ClientConfig;
use folio_core::ContentId;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "hunter22";
pub const GOOD_TOKEN: &str = "good-token";

#[derive(Default)]
pub struct Backend {
    pub skills: Vec<Value>,
    pub testimonials: Vec<Value>,
    pub messages: Vec<Value>,
    pub contact_info: Value,
    /// Every request as `METHOD /path`.
    pub requests: Vec<String>,
    /// When set, every admin call is rejected with 401.
    pub revoked: bool,
    /// Requests (`METHOD /path`) answered with a 500.
    pub failing: Vec<String>,
}

impl Backend {
    pub fn count(&self, request: &str) -> usize {
        self.requests.iter().filter(|r| r.as_str() == request).count()
    }
}

pub type Shared = Arc<Mutex<Backend>>;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

async fn log_requests(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let line = format!("{} {}", req.method(), req.uri().path());
    let failing = {
        let mut backend = state.lock().unwrap();
        let failing = backend.failing.contains(&line);
        backend.requests.push(line);
        failing
    };
    if failing {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }
    next.run(req).await
}

async fn require_admin(
    State(state): State<Shared>,
    headers: HeaderMap,
    req: Request,
    next: Next,
) -> Response {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    let revoked = state.lock().unwrap().revoked;

    if token != Some(GOOD_TOKEN) || revoked {
        return error(StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }
    next.run(req).await
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] != ADMIN_EMAIL || body["password"] != ADMIN_PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(json!({
        "token": GOOD_TOKEN,
        "admin": { "id": ContentId::new().to_string(), "email": ADMIN_EMAIL, "name": "Site Admin" }
    }))
    .into_response()
}

async fn profile() -> Json<Value> {
    Json(json!({ "id": ContentId::new().to_string(), "email": ADMIN_EMAIL, "name": "Site Admin" }))
}

async fn list_skills(State(state): State<Shared>) -> Json<Value> {
    let skills = state.lock().unwrap().skills.clone();
    // The backend sends null for an empty collection.
    if skills.is_empty() {
        Json(Value::Null)
    } else {
        Json(Value::Array(skills))
    }
}

async fn create_skill(State(state): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(ContentId::new().to_string());
    body["createdAt"] = json!(now());
    body["updatedAt"] = json!(now());
    state.lock().unwrap().skills.push(body.clone());
    Json(body)
}

async fn update_skill(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(skill) = backend.skills.iter_mut().find(|s| s["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Skill not found");
    };
    for (key, value) in body.as_object().cloned().unwrap_or_default() {
        skill[key.as_str()] = value;
    }
    skill["updatedAt"] = json!(now());
    Json(skill.clone()).into_response()
}

async fn delete_skill(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut backend = state.lock().unwrap();
    let before = backend.skills.len();
    backend.skills.retain(|s| s["id"] != id);
    if backend.skills.len() == before {
        return error(StatusCode::NOT_FOUND, "Skill not found");
    }
    Json(json!({ "message": "Skill deleted" })).into_response()
}

async fn empty_list() -> Json<Value> {
    Json(Value::Null)
}

async fn portfolio(State(state): State<Shared>) -> Json<Value> {
    let backend = state.lock().unwrap();
    let approved: Vec<Value> = backend
        .testimonials
        .iter()
        .filter(|t| t["status"] == "approved")
        .cloned()
        .collect();
    Json(json!({
        "skills": backend.skills,
        "projects": null,
        "experience": [],
        "education": null,
        "hobbies": [],
        "testimonials": approved,
    }))
}

async fn approved_testimonials(State(state): State<Shared>) -> Json<Value> {
    let backend = state.lock().unwrap();
    Json(Value::Array(
        backend
            .testimonials
            .iter()
            .filter(|t| t["status"] == "approved")
            .cloned()
            .collect(),
    ))
}

async fn submit_testimonial(State(state): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(ContentId::new().to_string());
    body["status"] = json!("pending");
    state.lock().unwrap().testimonials.push(body.clone());
    Json(body)
}

async fn all_testimonials(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().testimonials.clone()))
}

fn set_testimonial_status(state: &Shared, id: &str, status: &str) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(t) = backend.testimonials.iter_mut().find(|t| t["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Testimonial not found");
    };
    t["status"] = json!(status);
    Json(json!({ "message": format!("Testimonial {status}"), "id": id, "status": status }))
        .into_response()
}

async fn approve(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    set_testimonial_status(&state, &id, "approved")
}

async fn reject(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    set_testimonial_status(&state, &id, "rejected")
}

async fn delete_testimonial(State(state): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    state.lock().unwrap().testimonials.retain(|t| t["id"] != id);
    Json(json!({ "message": "Testimonial deleted" }))
}

async fn submit_contact(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body["website"] != "" {
        return error(StatusCode::BAD_REQUEST, "Spam detected");
    }
    let message = json!({
        "id": ContentId::new().to_string(),
        "name": body["name"],
        "email": body["email"],
        "subject": body["subject"],
        "content": body["content"],
        "read": false,
        "createdAt": now(),
    });
    state.lock().unwrap().messages.push(message.clone());
    Json(message).into_response()
}

async fn list_messages(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().messages.clone()))
}

async fn mark_read(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(m) = backend.messages.iter_mut().find(|m| m["id"] == id) else {
        return error(StatusCode::NOT_FOUND, "Message not found");
    };
    m["read"] = json!(true);
    Json(json!({ "message": "Message marked as read" })).into_response()
}

async fn delete_message(State(state): State<Shared>, Path(id): Path<String>) -> Json<Value> {
    state.lock().unwrap().messages.retain(|m| m["id"] != id);
    Json(json!({ "message": "Message deleted" }))
}

async fn get_contact_info(State(state): State<Shared>) -> Json<Value> {
    Json(state.lock().unwrap().contact_info.clone())
}

async fn update_contact_info(State(state): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(ContentId::new().to_string());
    body["updatedAt"] = json!(now());
    state.lock().unwrap().contact_info = body.clone();
    Json(body)
}

async fn upload_resume() -> Json<Value> {
    Json(json!({ "message": "Resume uploaded" }))
}

pub fn build_backend(state: Shared) -> Router {
    let admin = Router::new()
        .route("/profile", get(profile))
        .route("/skills", post(create_skill))
        .route("/skills/:id", put(update_skill).delete(delete_skill))
        .route("/testimonials", get(all_testimonials))
        .route("/testimonials/:id", axum::routing::delete(delete_testimonial))
        .route("/testimonials/:id/approve", put(approve))
        .route("/testimonials/:id/reject", put(reject))
        .route("/messages", get(list_messages))
        .route("/messages/:id", axum::routing::delete(delete_message))
        .route("/messages/:id/read", put(mark_read))
        .route("/contact-info", get(get_contact_info).put(update_contact_info))
        .route("/resume", post(upload_resume))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route("/login", post(login));

    let public = Router::new()
        .route("/skills", get(list_skills))
        .route("/projects", get(empty_list))
        .route("/experience", get(empty_list))
        .route("/education", get(empty_list))
        .route("/hobbies", get(empty_list))
        .route("/portfolio", get(portfolio))
        .route("/testimonials", get(approved_testimonials).post(submit_testimonial))
        .route("/contact", post(submit_contact))
        .route("/contact-info", get(get_contact_info));

    Router::new()
        .nest("/api/admin", admin)
        .nest("/api/public", public)
        .route("/api/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub struct TestServer {
    pub base_url: String,
    pub backend: Shared,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let backend: Shared = Arc::new(Mutex::new(Backend {
            contact_info: json!({ "email": "hello@example.com", "location": "Montreal" }),
            ..Backend::default()
        }));
        let app = build_backend(backend.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            backend,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.backend.lock().unwrap().requests.clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.backend.lock().unwrap().count(request)
    }

    pub fn fail(&self, request: &str) {
        self.backend.lock().unwrap().failing.push(request.to_string());
    }

    pub fn revoke_tokens(&self) {
        self.backend.lock().unwrap().revoked = true;
    }

    pub fn context(&self) -> (AppContext, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let config = ClientConfig::default().with_api_url(format!("{}/api", self.base_url));
        let ctx = AppContext::with_storage(config, storage.clone()).expect("context builds");
        (ctx, storage)
    }

    /// Context that already holds a valid admin token.
    pub fn admin_context(&self) -> (AppContext, Arc<MemoryStorage>) {
        let (ctx, storage) = self.context();
        storage.set(TOKEN_KEY, GOOD_TOKEN).unwrap();
        (ctx, storage)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
