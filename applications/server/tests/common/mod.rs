//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use roster_core::UserStore;
use roster_server::{create_router, AccessGuard, AppState};
use roster_storage::SqliteUserStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const VALID_SECRET: &str = "test-shared-secret";
pub const INVALID_SECRET: &str = "INVALID_AUTH";

/// Router backed by a real SQLite file; the temp dir lives as long as this
pub struct TestApp {
    pub router: Router,
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let store = SqliteUserStore::connect(&db_url, 5).await.unwrap();

        Self {
            router: app_with_store(Arc::new(store.clone())),
            store,
            _temp_dir: temp_dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, auth, body).await
    }
}

/// Router over any store, guarded by `VALID_SECRET`
pub fn app_with_store(store: Arc<dyn UserStore>) -> Router {
    let access_guard = Arc::new(AccessGuard::new(VALID_SECRET));
    create_router(AppState::new(store, access_guard))
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn valid_user(id: &str) -> Value {
        json!({
            "identificationNumber": id,
            "firstName": "name",
            "lastName": "lastname",
        })
    }
}
