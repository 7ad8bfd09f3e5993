#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use postbox::AppState;
use postbox_contact::{FormFields, Gateway, GatewayError, Outcome, Receipt};
use tower::ServiceExt;

/// Gateway answering every submission with the same outcome
pub struct StubGateway {
    outcome: Outcome,
    calls: Mutex<Vec<FormFields>>,
}

impl StubGateway {
    pub fn succeeding(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(Receipt::new(message)),
            calls: Mutex::new(vec![]),
        })
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(GatewayError::new(message)),
            calls: Mutex::new(vec![]),
        })
    }

    pub fn calls(&self) -> Vec<FormFields> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Gateway for StubGateway {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        self.calls.lock().unwrap().push(fields.clone());
        self.outcome.clone()
    }
}

pub fn create_test_app(gateway: Arc<StubGateway>) -> Router {
    postbox::create_app(AppState { gateway })
}

pub fn form_body(name: &str, email: &str, message: &str) -> String {
    serde_urlencoded::to_string([("name", name), ("email", email), ("message", message)]).unwrap()
}

pub async fn post_contact(app: Router, body: String, fragment: bool) -> Response<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded");

    if fragment {
        request = request.header(postbox::template::FRAGMENT_HEADER, "true");
    }

    app.oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
