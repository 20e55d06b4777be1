//! Test fixture standing in for a count/value-enveloped REST provider.
//!
//! Serves the response shapes the invoker has to handle: enveloped lists,
//! plain values, HTML sign-in pages served with a 200, envelopes whose
//! items mix data and HTML, and an any-verb echo endpoint for inspecting
//! what was actually sent.

use axum::{
    extract::OriginalUri,
    http::{HeaderMap, Method, StatusCode},
    response::Html,
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A project record, the fixture's stand-in list element.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub state: String,
}

/// The provider's list envelope: `{count, value}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub count: usize,
    pub value: Vec<T>,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "alpha".to_string(),
            state: "wellFormed".to_string(),
        },
        Project {
            id: 2,
            name: "beta".to_string(),
            state: "wellFormed".to_string(),
        },
        Project {
            id: 3,
            name: "gamma".to_string(),
            state: "createPending".to_string(),
        },
    ]
}

pub fn app() -> Router {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/definition", get(get_definition))
        .route("/signin", get(signin_page))
        .route("/mixed", get(mixed_envelope))
        .route("/empty", get(empty_body))
        .route("/echo", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_projects() -> Json<Envelope<Project>> {
    let value = projects();
    Json(Envelope {
        count: value.len(),
        value,
    })
}

async fn get_definition() -> Json<Project> {
    Json(Project {
        id: 9,
        name: "nightly".to_string(),
        state: "wellFormed".to_string(),
    })
}

/// An auth redirect target: HTML served with a 200, the failure mode the
/// invoker's HTML sniff exists for.
async fn signin_page() -> Html<&'static str> {
    Html("<html><head><title>Sign in</title></head><body>Sign in to continue</body></html>")
}

/// An envelope whose items mix real records with an HTML fragment.
async fn mixed_envelope() -> Json<Value> {
    Json(json!({
        "count": 3,
        "value": [
            {"id": 1, "name": "alpha"},
            "<html>access denied</html>",
            {"id": 2, "name": "beta"}
        ]
    }))
}

async fn empty_body() -> StatusCode {
    StatusCode::OK
}

/// Reflect method, headers, and body back as JSON.
async fn echo(
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    let headers: Value = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect::<serde_json::Map<String, Value>>()
        .into();

    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "headers": headers,
        "body": body,
    }))
}
