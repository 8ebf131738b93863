use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use folio_auth::{AuthSession, MemoryStorage, TOKEN_KEY, USER_KEY, ClientStorage};
use folio_client::{ApiClient, AuthService, ClientConfig, ClientError, ContentService};
use folio_core::{
    ContactSubmission, ContentId, LoginRequest, ResumeLanguage, SkillInput, TestimonialStatus,
};
use folio_events::{EventRelay, SESSION_EXPIRED, listener};

const GOOD_TOKEN: &str = "good-token";

/// What the fake backend saw.
#[derive(Default)]
struct Seen {
    authorization: Vec<Option<String>>,
    bodies: Vec<Value>,
    uploads: Vec<String>,
}

type Shared = Arc<Mutex<Seen>>;

fn record(state: &Shared, headers: &HeaderMap) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.lock().unwrap().authorization.push(auth);
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {GOOD_TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Invalid or expired token" })),
    )
        .into_response()
}

fn skill_json(id: ContentId, name: &str) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "icon": "",
        "proficiency": 80,
        "category": "Backend",
        "sortOrder": 0,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn build_backend(state: Shared) -> Router {
    Router::new()
        .route(
            "/api/public/skills",
            get(|State(s): State<Shared>, headers: HeaderMap| async move {
                record(&s, &headers);
                Json(Value::Null)
            }),
        )
        .route(
            "/api/public/testimonials",
            get(|| async {
                Json(json!([{
                    "id": ContentId::new().to_string(),
                    "authorName": "Ada",
                    "content": "Great work",
                    "rating": 5,
                    "status": "approved"
                }]))
            }),
        )
        .route(
            "/api/public/contact",
            post(|State(s): State<Shared>, Json(body): Json<Value>| async move {
                s.lock().unwrap().bodies.push(body.clone());
                if body["website"] != "" {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": "Spam detected" })),
                    )
                        .into_response();
                }
                Json(json!({
                    "id": ContentId::new().to_string(),
                    "name": body["name"],
                    "email": body["email"],
                    "subject": body["subject"],
                    "content": body["content"],
                    "read": false
                }))
                .into_response()
            }),
        )
        .route(
            "/api/admin/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] != "hunter22" {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "error": "Invalid credentials" })),
                    )
                        .into_response();
                }
                Json(json!({
                    "token": GOOD_TOKEN,
                    "admin": {
                        "id": ContentId::new().to_string(),
                        "email": body["email"],
                        "name": "Site Admin"
                    }
                }))
                .into_response()
            }),
        )
        .route(
            "/api/admin/profile",
            get(|State(s): State<Shared>, headers: HeaderMap| async move {
                record(&s, &headers);
                if !authorized(&headers) {
                    return unauthorized();
                }
                Json(json!({
                    "id": ContentId::new().to_string(),
                    "email": "admin@example.com",
                    "name": "Site Admin"
                }))
                .into_response()
            }),
        )
        .route(
            "/api/admin/skills",
            post(
                |State(s): State<Shared>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    record(&s, &headers);
                    if !authorized(&headers) {
                        return unauthorized();
                    }
                    s.lock().unwrap().bodies.push(body.clone());
                    let name = body["name"].as_str().unwrap_or_default().to_string();
                    Json(skill_json(ContentId::new(), &name)).into_response()
                },
            ),
        )
        .route(
            "/api/admin/skills/:id",
            delete(|headers: HeaderMap, Path(_id): Path<String>| async move {
                if !authorized(&headers) {
                    return unauthorized();
                }
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Skill not found" })),
                )
                    .into_response()
            }),
        )
        .route(
            "/api/admin/testimonials/:id/approve",
            put(|headers: HeaderMap, Path(id): Path<String>| async move {
                if !authorized(&headers) {
                    return unauthorized();
                }
                Json(json!({ "message": "Testimonial approved", "id": id, "status": "approved" }))
                    .into_response()
            }),
        )
        .route(
            "/api/admin/resume",
            post(
                |State(s): State<Shared>,
                 headers: HeaderMap,
                 axum::extract::Query(q): axum::extract::Query<std::collections::HashMap<String, String>>| async move {
                    if !authorized(&headers) {
                        return unauthorized();
                    }
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    s.lock().unwrap().uploads.push(format!(
                        "{}|{}",
                        q.get("lang").cloned().unwrap_or_default(),
                        content_type
                    ));
                    Json(json!({ "message": "Resume uploaded" })).into_response()
                },
            ),
        )
        .route(
            "/api/admin/messages",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream exploded",
                )
            }),
        )
        .route("/api/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .with_state(state)
}

struct TestServer {
    base_url: String,
    seen: Shared,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let seen: Shared = Arc::default();
        let app = build_backend(seen.clone());
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
            seen,
            handle,
        }
    }

    fn last_authorization(&self) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .authorization
            .last()
            .cloned()
            .flatten()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct Harness {
    storage: Arc<MemoryStorage>,
    relay: Arc<EventRelay>,
    expired: Arc<AtomicUsize>,
    client: ApiClient,
}

impl Harness {
    fn new(server: &TestServer) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let relay = Arc::new(EventRelay::new());
        let expired = Arc::new(AtomicUsize::new(0));

        let counter = expired.clone();
        relay.subscribe(
            SESSION_EXPIRED,
            listener(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let config = ClientConfig::default().with_api_url(format!("{}/api", server.base_url));
        let client = ApiClient::new(&config, AuthSession::new(storage.clone()), relay.clone())
            .expect("client builds");

        Self {
            storage,
            relay,
            expired,
            client,
        }
    }

    fn with_token(self, token: &str) -> Self {
        self.storage.set(TOKEN_KEY, token).unwrap();
        self
    }

    fn content(&self) -> ContentService {
        ContentService::new(self.client.clone())
    }

    fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server);

    let skills = h.content().list_skills().await.unwrap();

    assert!(skills.is_empty(), "null collection decodes as empty");
    assert_eq!(server.last_authorization(), None);
}

#[tokio::test]
async fn stored_token_is_sent_as_bearer() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token("T");

    h.content().list_skills().await.unwrap();

    assert_eq!(server.last_authorization().as_deref(), Some("Bearer T"));
}

#[tokio::test]
async fn rejected_token_is_cleared_and_expiry_published_once() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token("stale");
    h.storage.set(USER_KEY, r#"{"id":"00000000-0000-0000-0000-000000000000","email":"a@b.co"}"#).unwrap();

    let err = h.auth().profile().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Invalid or expired token"));
    assert_eq!(h.expired.load(Ordering::SeqCst), 1);
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap(), None);
    // Only the token goes; the display profile is left for the login screen.
    assert!(h.storage.get(USER_KEY).unwrap().is_some());
    assert!(!h.client.session().is_authenticated());

    // The next call goes out anonymously and is rejected again: one more publish.
    let _ = h.auth().profile().await.unwrap_err();
    assert_eq!(server.last_authorization(), None);
    assert_eq!(h.expired.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn expiry_reaches_every_subscriber() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token("stale");

    let second = Arc::new(AtomicUsize::new(0));
    let c = second.clone();
    h.relay.subscribe(
        SESSION_EXPIRED,
        listener(move |payload| {
            assert!(payload.is_none());
            c.fetch_add(1, Ordering::SeqCst);
        }),
    );

    let _ = h.content().create_skill(&SkillInput { name: "Rust".into(), ..Default::default() }).await;

    assert_eq!(h.expired.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn login_persists_token_and_profile() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server);

    let response = h
        .auth()
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, GOOD_TOKEN);
    assert!(h.auth().is_authenticated());
    assert_eq!(h.storage.get(TOKEN_KEY).unwrap().as_deref(), Some(GOOD_TOKEN));
    let user = h.auth().current_user().expect("profile cached");
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.name, "Site Admin");

    let profile = h.auth().profile().await.unwrap();
    assert_eq!(profile.email, "admin@example.com");
    assert_eq!(server.last_authorization().as_deref(), Some("Bearer good-token"));

    h.auth().logout().unwrap();
    assert!(h.auth().current_user().is_none());
    assert!(!h.auth().is_authenticated());
}

#[tokio::test]
async fn failed_login_surfaces_backend_message() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server);

    let err = h
        .auth()
        .login(&LoginRequest {
            email: "admin@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Invalid email or password."), "Invalid credentials");
    assert!(!h.auth().is_authenticated());
}

#[tokio::test]
async fn create_sends_camel_case_body_and_decodes_record() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token(GOOD_TOKEN);

    let created = h
        .content()
        .create_skill(&SkillInput {
            name: "Rust".into(),
            category: "Backend".into(),
            sort_order: 3,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.name, "Rust");
    let body = server.seen.lock().unwrap().bodies.last().cloned().unwrap();
    assert_eq!(body["sortOrder"], 3);
    assert_eq!(body["proficiency"], 50);
}

#[tokio::test]
async fn error_status_carries_backend_message() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token(GOOD_TOKEN);

    let err = h.content().delete_skill(ContentId::new()).await.unwrap_err();

    match &err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message.as_deref(), Some("Skill not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(h.expired.load(Ordering::SeqCst), 0);
    assert!(h.client.session().is_authenticated());
}

#[tokio::test]
async fn non_json_error_body_has_no_server_message() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token(GOOD_TOKEN);

    let err = h.content().list_messages().await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Failed to load messages."), "Failed to load messages.");
}

#[tokio::test]
async fn contact_submission_forwards_spam_fields() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server);

    let submission = ContactSubmission {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        subject: folio_core::content::CONTACT_FORM_SUBJECT.into(),
        content: "Hello there, nice site!".into(),
        website: String::new(),
        submitted_at_ms: 1_700_000_000_000,
        turnstile_token: None,
    };
    let message = h.content().submit_contact(&submission).await.unwrap();
    assert_eq!(message.name, "Grace");

    let body = server.seen.lock().unwrap().bodies.last().cloned().unwrap();
    assert_eq!(body["submittedAtMs"], 1_700_000_000_000_i64);
    assert_eq!(body["website"], "");
    assert!(body.get("turnstileToken").is_none());

    let bot = ContactSubmission {
        website: "http://spam.example".into(),
        ..submission
    };
    let err = h.content().submit_contact(&bot).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Spam detected"));
}

#[tokio::test]
async fn moderation_and_upload_return_acknowledgements() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server).with_token(GOOD_TOKEN);

    let id = ContentId::new();
    let ack = h.content().approve_testimonial(id).await.unwrap();
    assert_eq!(ack.id, Some(id));
    assert_eq!(ack.status, Some(TestimonialStatus::Approved));

    let ack = h
        .content()
        .upload_resume(ResumeLanguage::Fr, "cv.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap();
    assert_eq!(ack.message, "Resume uploaded");

    let uploads = server.seen.lock().unwrap().uploads.clone();
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].starts_with("fr|multipart/form-data"));
}

#[tokio::test]
async fn public_reads_and_health() {
    let server = TestServer::spawn().await;
    let h = Harness::new(&server);

    let approved = h.content().approved_testimonials().await.unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].status, TestimonialStatus::Approved);

    assert!(h.content().health().await);
    assert_eq!(
        h.content().resume_url(ResumeLanguage::En),
        format!("{}/api/public/resume?lang=en", server.base_url)
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let config = ClientConfig::default().with_api_url("http://127.0.0.1:9/api");
    let client = ApiClient::new(
        &config,
        AuthSession::new(Arc::new(MemoryStorage::new())),
        Arc::new(EventRelay::new()),
    )
    .unwrap();
    let content = ContentService::new(client);

    let err = content.list_skills().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!content.health().await);
}
