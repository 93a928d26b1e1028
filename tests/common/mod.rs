use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use widget_api::{config::AppConfig, db, AppState};

/// Helper harness for spinning up an application router backed by a
/// throwaway SQLite database.
pub struct TestApp {
    router: Router,
    pub state: Arc<AppState>,
    _tmp: tempfile::TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let tmp = tempfile::TempDir::new().expect("create tempdir");
        let db_path = tmp.path().join("widgets_test.db");

        let cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = Arc::new(AppState::new(Arc::new(pool), cfg));
        let router = widget_api::app_router(state.clone());

        Self {
            router,
            state,
            _tmp: tmp,
        }
    }

    /// Issue a request against the in-process router.
    pub async fn request(&self, method: Method, uri: &str, json: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let request_body = match json {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(request_body).expect("build request"))
            .await
            .expect("send request")
    }
}

#[allow(dead_code)]
pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

/// Parse the serialized price field back into a `Decimal`. Prices go over
/// the wire as JSON numbers; anything else is a defect.
#[allow(dead_code)]
pub fn price_of(value: &Value) -> Decimal {
    match &value["price"] {
        Value::Number(n) => n.to_string().parse().expect("decimal price"),
        other => panic!("price must be a JSON number, got: {other:?}"),
    }
}
