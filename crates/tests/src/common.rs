use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::ApiClient;
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Map, Value};
use shared_types::ClientConfig;

/// Token the stub hands out on a successful login and accepts afterwards.
pub const TOKEN: &str = "tok-123";
pub const EMAIL: &str = "ada@example.org";
pub const PASSWORD: &str = "correct horse";

/// A file part received by the stub.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// One request as the stub saw it. Multipart text fields land in `body`
/// as a JSON object of strings.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
    pub files: Vec<RecordedFile>,
}

/// Shared state of the in-process API stub.
#[derive(Clone, Default)]
pub struct Stub {
    requests: Arc<Mutex<Vec<Recorded>>>,
    overrides: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
}

impl Stub {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("the stub has not received any request")
    }

    /// Make `method path` answer with a raw status and body.
    pub fn override_route(&self, method: &str, path: &str, status: u16, body: &str) {
        self.overrides.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
    }
}

/// Start the stub on an ephemeral port and return an anonymous client
/// pointed at it.
pub async fn spawn_stub() -> (ApiClient, Stub) {
    let stub = Stub::default();
    let app = Router::new().fallback(handle).with_state(stub.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server crashed");
    });
    let client = ApiClient::new(ClientConfig::new(format!("http://{addr}"), None));
    (client, stub)
}

/// The same client, signed in with the stub's token.
pub fn signed_in(client: &ApiClient) -> ApiClient {
    client.clone().with_token(Some(TOKEN.to_string()))
}

pub fn user_json(id: i64, name: &str, email: &str, user_type: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "user_type": user_type,
        "status": 1,
        "created_at": "2024-03-01T10:00:00.000000Z"
    })
}

pub fn manuscript_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "title": "On Widgets",
        "abstract": "We study widgets in their natural habitat.",
        "journal_id": 5,
        "journal_title": "Journal of Applied Widgets",
        "author_id": 2,
        "author_name": "Grace Hopper",
        "status": status
    })
}

async fn handle(State(stub): State<Stub>, req: Request) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let (authorization, content_type) = {
        let header_value = |name: header::HeaderName| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        (
            header_value(header::AUTHORIZATION),
            header_value(header::CONTENT_TYPE),
        )
    };

    let is_multipart = content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));
    let (body, files) = if is_multipart {
        read_multipart(req).await
    } else {
        let bytes = axum::body::to_bytes(req.into_body(), usize::MAX)
            .await
            .expect("Failed to read request body");
        (serde_json::from_slice(&bytes).unwrap_or(Value::Null), Vec::new())
    };

    let recorded = Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization,
        content_type,
        body,
        files,
    };
    stub.requests.lock().unwrap().push(recorded.clone());

    let overridden = stub
        .overrides
        .lock()
        .unwrap()
        .get(&(method, path))
        .cloned();
    if let Some((status, body)) = overridden {
        let status = StatusCode::from_u16(status).expect("invalid override status");
        return (status, body).into_response();
    }

    let (status, json) = respond(&recorded);
    (status, Json(json)).into_response()
}

async fn read_multipart(req: Request) -> (Value, Vec<RecordedFile>) {
    let mut multipart = Multipart::from_request(req, &())
        .await
        .expect("Failed to parse multipart body");
    let mut fields = Map::new();
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("bad multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.expect("Failed to read file part");
                files.push(RecordedFile {
                    field: name,
                    file_name,
                    content_type,
                    size: bytes.len(),
                });
            }
            None => {
                let text = field.text().await.expect("Failed to read text part");
                fields.insert(name, Value::String(text));
            }
        }
    }
    (Value::Object(fields), files)
}

fn ok(message: &str, data: Value) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({ "status": true, "message": message, "data": data }),
    )
}

fn text(body: &Value, field: &str) -> Value {
    body.get(field).cloned().unwrap_or(Value::Null)
}

/// Canned behaviour of the remote API.
fn respond(req: &Recorded) -> (StatusCode, Value) {
    let segments: Vec<&str> = req.path.trim_matches('/').split('/').collect();
    let body = &req.body;

    let public = matches!(
        segments.as_slice(),
        ["api", "login"] | ["api", "register"] | ["api", "journal", ..] | ["api", "blog", ..] | ["api", "news"]
    );
    let bearer = format!("Bearer {TOKEN}");
    if !public && req.authorization.as_deref() != Some(bearer.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            json!({ "message": "Unauthenticated." }),
        );
    }

    // Multipart updates arrive as POST with `_method=PUT`.
    let method = match body.get("_method").and_then(Value::as_str) {
        Some(spoofed) if req.method == "POST" => spoofed.to_string(),
        _ => req.method.clone(),
    };

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "login"]) => {
            if body["email"] == EMAIL && body["password"] == PASSWORD {
                ok(
                    "Login successful",
                    json!({ "token": TOKEN, "user": user_json(1, "Ada Lovelace", EMAIL, "0") }),
                )
            } else if body["email"] == "tokenless@example.org" {
                ok(
                    "Login successful",
                    json!({ "token": "", "user": user_json(9, "No Token", "tokenless@example.org", "2") }),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    json!({ "message": "These credentials do not match our records." }),
                )
            }
        }
        ("POST", ["api", "logout"]) => ok("Logged out", Value::Null),
        ("POST", ["api", "register"]) => {
            if body["email"] == EMAIL {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "message": "The email has already been taken.",
                        "errors": { "email": ["The email has already been taken."] }
                    }),
                )
            } else {
                ok(
                    "Registration successful",
                    json!({
                        "id": 20,
                        "name": text(body, "name"),
                        "email": text(body, "email"),
                        "user_type": text(body, "user_type"),
                        "status": 1
                    }),
                )
            }
        }
        ("GET", ["api", "profile"]) => ok("", user_json(1, "Ada Lovelace", EMAIL, "0")),
        ("POST", ["api", "profile"]) => ok(
            "Profile updated",
            json!({
                "id": 1,
                "name": text(body, "name"),
                "email": text(body, "email"),
                "user_type": "0",
                "status": 1
            }),
        ),

        ("GET", ["api", "journal"]) => (
            StatusCode::OK,
            json!({
                "flag": 1,
                "data": [
                    { "id": 5, "title": "Journal of Applied Widgets", "issn": "1234-5678", "category_id": "2", "image": "journals/widgets.png", "status": 1 },
                    { "id": 6, "title": "Annals of Gadgetry", "status": "1" }
                ]
            }),
        ),
        ("GET", ["api", "journal", "5"]) => ok(
            "",
            json!({ "id": 5, "title": "Journal of Applied Widgets", "description": "Widgets, applied.", "status": 1 }),
        ),
        ("GET", ["api", "blog"]) => ok(
            "",
            json!([{ "id": 1, "title": "Open access week", "description": "<p>Hello</p>", "author": "Editorial team", "status": 1 }]),
        ),
        ("GET", ["api", "blog", "1"]) => ok(
            "",
            json!({ "id": 1, "title": "Open access week", "description": "<p>Hello</p>", "status": 1 }),
        ),
        ("GET", ["api", "news"]) => ok("", json!([{ "id": 3, "title": "Call for papers", "body": "Submit now", "status": 1 }])),

        ("GET", ["api", "admin", "categories"]) => ok(
            "",
            json!([{ "id": 1, "name": "Physics", "slug": "physics", "status": 1 }, { "id": 2, "name": "Biology", "status": 0 }]),
        ),
        ("POST", ["api", "admin", "categories"]) => {
            if body["name"] == "Physics" {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "message": "The given data was invalid.",
                        "errors": { "name": ["The name has already been taken."] }
                    }),
                )
            } else {
                ok(
                    "Category created",
                    json!({ "id": 10, "name": body["name"], "description": body["description"], "status": body["status"] }),
                )
            }
        }
        ("PUT", ["api", "admin", "categories", id]) => ok(
            "Category updated",
            json!({ "id": id.parse::<i64>().unwrap_or_default(), "name": body["name"], "status": body["status"] }),
        ),
        ("DELETE", ["api", "admin", "categories", _]) => ok("Category deleted", Value::Null),

        ("GET", ["api", "admin", "groups"]) => ok("", json!([{ "id": 1, "name": "Open Science Press", "status": true }])),
        ("POST", ["api", "admin", "groups"]) => {
            if body["name"] == "Duplicate" {
                (
                    StatusCode::OK,
                    json!({ "flag": 0, "message": "Group already exists" }),
                )
            } else {
                ok("Group created", json!({ "id": 4, "name": body["name"], "status": body["status"] }))
            }
        }
        ("PUT", ["api", "admin", "groups", _]) => ok("Group updated", Value::Null),
        ("DELETE", ["api", "admin", "groups", _]) => ok("Group deleted", Value::Null),

        ("GET", ["api", "admin", "journals"]) => ok("", json!([{ "id": 5, "title": "Journal of Applied Widgets", "status": 1 }])),
        ("POST", ["api", "admin", "journals"]) => ok(
            "Journal created",
            json!({ "id": 11, "title": text(body, "title"), "status": text(body, "status") }),
        ),
        ("PUT", ["api", "admin", "journals", id]) => ok(
            "Journal updated",
            json!({ "id": id.parse::<i64>().unwrap_or_default(), "title": text(body, "title"), "status": text(body, "status") }),
        ),
        ("DELETE", ["api", "admin", "journals", _]) => ok("Journal deleted", Value::Null),

        ("GET", ["api", "admin", "blogs"]) => ok("", json!([{ "id": 1, "title": "Open access week", "description": "Hi", "status": 1 }])),
        ("POST", ["api", "admin", "blogs"]) => ok(
            "Blog created",
            json!({ "id": 2, "title": text(body, "title"), "description": text(body, "description"), "status": text(body, "status") }),
        ),
        ("PUT", ["api", "admin", "blogs", _]) => ok("Blog updated", Value::Null),
        ("DELETE", ["api", "admin", "blogs", _]) => ok("Blog deleted", Value::Null),

        ("GET", ["api", "admin", "news"]) => ok("", json!([{ "id": 3, "title": "Call for papers", "body": "Submit now", "status": 0 }])),
        ("POST", ["api", "admin", "news"]) => ok(
            "News created",
            json!({ "id": 4, "title": text(body, "title"), "body": text(body, "description"), "status": text(body, "status") }),
        ),
        ("PUT", ["api", "admin", "news", _]) => ok("News updated", Value::Null),
        ("DELETE", ["api", "admin", "news", _]) => ok("News deleted", Value::Null),

        ("GET", ["api", "admin", "users"]) => ok(
            "",
            json!([
                user_json(1, "Ada Lovelace", EMAIL, "0"),
                user_json(2, "Grace Hopper", "grace@example.org", "2"),
                user_json(3, "Rosalind Franklin", "rf@example.org", "3")
            ]),
        ),
        ("POST", ["api", "admin", "users"]) => ok(
            "User created",
            json!({ "id": 30, "name": body["name"], "email": body["email"], "user_type": body["user_type"], "status": body["status"] }),
        ),
        ("PUT", ["api", "admin", "users", _]) => ok("User updated", Value::Null),
        ("DELETE", ["api", "admin", "users", "1"]) => (
            StatusCode::FORBIDDEN,
            json!({ "error": "You cannot delete your own account." }),
        ),
        ("DELETE", ["api", "admin", "users", _]) => ok("User deleted", Value::Null),

        ("GET", ["api", "manuscripts"]) => ok(
            "",
            json!([manuscript_json(7, "submitted"), manuscript_json(8, "under_review")]),
        ),
        ("POST", ["api", "manuscripts"]) => ok("Manuscript submitted", manuscript_json(9, "submitted")),
        ("GET", ["api", "manuscripts", "7"]) => ok("", manuscript_json(7, "submitted")),
        ("GET", ["api", "manuscripts", _]) => (
            StatusCode::NOT_FOUND,
            json!({ "message": "Manuscript not found" }),
        ),
        ("POST", ["api", "manuscripts", id, "assign"]) => {
            let mut m = manuscript_json(id.parse().unwrap_or_default(), "under_review");
            m["reviewer_id"] = body["reviewer_id"].clone();
            ok("Reviewer assigned", m)
        }
        ("POST", ["api", "manuscripts", id, "review"]) => {
            let mut m = manuscript_json(id.parse().unwrap_or_default(), "reviewed");
            m["review_comments"] = body["comments"].clone();
            ok("Review submitted", m)
        }
        ("POST", ["api", "manuscripts", id, "decision"]) => {
            let status = body["status"].as_str().unwrap_or("unknown").to_string();
            ok(
                "Decision recorded",
                manuscript_json(id.parse().unwrap_or_default(), &status),
            )
        }

        _ => (StatusCode::NOT_FOUND, json!({ "message": "Not Found" })),
    }
}
