#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::post,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::mpsc};

pub const UP_PATH: &str = "/api/v1/inference/up";

type Captured = mpsc::UnboundedSender<(String, Value)>;

async fn accept_up(
    State(tx): State<Captured>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Json<Value> {
    let model = body["model"].clone();
    let _ = tx.send((uri.path().to_string(), body));
    Json(json!({ "status": "starting", "model": model }))
}

async fn reject_up() -> (StatusCode, &'static str) {
    (StatusCode::CONFLICT, "model already running")
}

async fn not_json() -> &'static str {
    "ok"
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Inference service that accepts every "up" call and reports each
/// request's path and body on the returned channel.
pub async fn spawn_accepting() -> (String, mpsc::UnboundedReceiver<(String, Value)>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let router = Router::new().route(UP_PATH, post(accept_up)).with_state(tx);
    (spawn_server(router).await, rx)
}

pub async fn spawn_rejecting() -> String {
    spawn_server(Router::new().route(UP_PATH, post(reject_up))).await
}

pub async fn spawn_plain_text() -> String {
    spawn_server(Router::new().route(UP_PATH, post(not_json))).await
}

/// A base URL whose port is known to be closed.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
