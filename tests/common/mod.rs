use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Query, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;

use resume_harvester::HarvestConfig;

pub const USER: &str = "hr@example.com";
pub const PASSWORD: &str = "hunter2";
const CSRF_TOKEN: &str = "csrf-abc";

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <form method="post" action="/login.php">
    <input type="hidden" name="CSRFToken" value="csrf-abc">
    <input type="hidden" name="login" value="1">
    <input type="hidden" name="tz" value="">
    <input type="hidden" name="r" value="/hiring">
    <input type="email" name="username">
    <input type="password" name="password">
  </form>
</body></html>"#;

/// Non-UTF-8 payload so any text transform would show up as corruption.
pub fn binary_resume() -> Vec<u8> {
    (0..=255u8).chain((0..=255u8).rev()).collect()
}

pub fn pdf_resume() -> Vec<u8> {
    b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<<>>\nendobj\n%%EOF\n".to_vec()
}

#[derive(Default)]
pub struct MockBamboo {
    pub candidate_queries: Mutex<Vec<String>>,
    pub downloads: AtomicUsize,
}

impl MockBamboo {
    pub fn downloads(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.candidate_queries.lock().unwrap().clone()
    }
}

/// Three candidates: Jane and Omar have resumes, Lee has none. Id 4 is only
/// in byIds and must never surface.
fn candidates_payload() -> serde_json::Value {
    json!({
        "data": {
            "candidates": {
                "allIds": [11, 12, 13],
                "byIds": {
                    "11": {
                        "applicantId": "11",
                        "firstName": "Jane",
                        "lastName": "Doe",
                        "rating": "4",
                        "positionId": "7",
                        "resumeFileId": "101",
                        "resumeFileName": "resume.pdf",
                        "email": "jane@example.com"
                    },
                    "12": {
                        "applicantId": "12",
                        "firstName": "Lee",
                        "lastName": "Park",
                        "rating": "3",
                        "positionId": "7",
                        "resumeFileId": null,
                        "resumeFileName": null
                    },
                    "13": {
                        "applicantId": "13",
                        "firstName": "Omar",
                        "lastName": "Haddad",
                        "rating": "5",
                        "positionId": "9",
                        "resumeFileId": "102",
                        "resumeFileName": "Omar CV.docx"
                    },
                    "14": {
                        "applicantId": "14",
                        "firstName": "Ghost",
                        "lastName": "Entry",
                        "resumeFileId": "103",
                        "resumeFileName": "ghost.pdf"
                    }
                }
            },
            "positions": {
                "byIds": {
                    "7": { "name": "Engineer" },
                    "9": { "name": "Data Analyst" }
                }
            }
        }
    })
}

fn has_cookie(headers: &HeaderMap, pair: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.split(';').any(|c| c.trim() == pair))
}

async fn login_page() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, "PHPSESSID=anonymous; Path=/")],
        Html(LOGIN_PAGE),
    )
}

async fn submit_login(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();

    let valid = has_cookie(&headers, "PHPSESSID=anonymous")
        && field("CSRFToken") == CSRF_TOKEN
        && field("login") == "1"
        && field("r") == "/hiring"
        && field("username") == USER
        && field("password") == PASSWORD;

    if valid {
        (
            [(header::SET_COOKIE, "PHPSESSID=authenticated; Path=/")],
            Redirect::to("/home"),
        )
            .into_response()
    } else {
        Html(LOGIN_PAGE).into_response()
    }
}

async fn home() -> Html<&'static str> {
    Html("<html><body>Welcome</body></html>")
}

async fn candidates(
    State(state): State<Arc<MockBamboo>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    state
        .candidate_queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());

    let wants_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    if !has_cookie(&headers, "PHPSESSID=authenticated") || !wants_json {
        return Html(LOGIN_PAGE).into_response();
    }

    (
        [(header::CONTENT_TYPE, "application/json")],
        candidates_payload().to_string(),
    )
        .into_response()
}

async fn download(
    State(state): State<Arc<MockBamboo>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !has_cookie(&headers, "PHPSESSID=authenticated") {
        return StatusCode::FORBIDDEN.into_response();
    }

    let body = match params.get("id").map(String::as_str) {
        Some("101") => pdf_resume(),
        Some("102") => binary_resume(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    state.downloads.fetch_add(1, Ordering::SeqCst);

    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        body,
    )
        .into_response()
}

pub async fn start_server() -> (SocketAddr, Arc<MockBamboo>) {
    let state = Arc::new(MockBamboo::default());
    let app = Router::new()
        .route("/login.php", get(login_page).post(submit_login))
        .route("/home", get(home))
        .route("/hiring/candidates", get(candidates))
        .route("/files/download.php", get(download))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

pub fn config_for(addr: SocketAddr) -> HarvestConfig {
    HarvestConfig {
        base_url: Some(format!("http://{}", addr)),
        limit: 10,
        timeout_seconds: 5,
        ..HarvestConfig::default()
    }
}
