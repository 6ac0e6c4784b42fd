#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use daily_journal::config::Config;
use daily_journal::db::JournalStorage;
use daily_journal::router::{JournalState, journal_router};
use serde_json::Value;
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Router backed by a fresh SQLite file; the file is removed on drop.
pub struct TestApp {
    pub app: Router,
    pub storage: JournalStorage,
    db_path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "daily-journal-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    path
}

pub async fn spawn_app(tag: &str, cfg: Config) -> TestApp {
    let db_path = temp_db_path(tag);
    let database_url = format!("sqlite:{}", db_path.display());
    let storage = JournalStorage::open(&database_url)
        .await
        .expect("failed to open test database");
    storage.initialize().await.expect("failed to create schema");

    let state = JournalState::new(storage.clone(), &cfg).expect("failed to build state");
    TestApp {
        app: journal_router(state),
        storage,
        db_path,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&body).expect("response body was not JSON");
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}
