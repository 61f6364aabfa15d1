//! Shared fixtures: a stub predictor and the real app, each on an ephemeral loopback port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;
use url_guardian::{api::routes::create_router, config::Config, AppState};

/// Raw request paths seen by a stub predictor, still percent-encoded.
pub type Seen = Arc<Mutex<Vec<String>>>;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    seen: Seen,
}

async fn answer(State(stub): State<Stub>, uri: Uri) -> impl IntoResponse {
    stub.seen.lock().unwrap().push(uri.path().to_string());
    (stub.status, [(header::CONTENT_TYPE, "application/json")], stub.body)
}

/// Starts a predictor that answers every request with `status` and `body`.
pub async fn start_predictor(status: StatusCode, body: &'static str) -> (String, Seen) {
    let seen = Seen::default();
    let stub = Stub { status, body, seen: seen.clone() };
    let app = Router::new().fallback(answer).with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

/// A base URL nothing is listening on.
pub async fn dead_predictor() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Starts the app forwarding to `predictor_url` and returns its base URL.
pub async fn start_app(predictor_url: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = Config {
        server_addr: addr,
        predictor_url: predictor_url.to_string(),
    };
    let app = create_router(AppState::new(&config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
