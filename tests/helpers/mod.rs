//! Shared test helpers for integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use guardrail_api::AppState;
use guardrail_core::config::AppConfig;
use guardrail_core::traits::{IdentityClient, IdentityServiceError};
use guardrail_service::GuardrailHandler;

/// Identity client that replays queued responses and records calls.
#[derive(Debug, Default)]
pub struct FakeIam {
    responses: Mutex<VecDeque<Result<(), IdentityServiceError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeIam {
    /// Queue the next response; unqueued calls succeed.
    pub fn respond_with(&self, response: Result<(), IdentityServiceError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Recorded `(group, user)` pairs.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityClient for FakeIam {
    fn provider_type(&self) -> &str {
        "fake-iam"
    }

    async fn remove_user_from_group(
        &self,
        group_name: &str,
        user_name: &str,
    ) -> Result<(), IdentityServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((group_name.to_string(), user_name.to_string()));
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The identity client behind the router
    pub iam: Arc<FakeIam>,
}

/// Response captured from a test request
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let iam = Arc::new(FakeIam::default());
        let guardrail = GuardrailHandler::new(iam.clone());
        let state = AppState::new(AppConfig::default(), guardrail);

        Self {
            router: guardrail_api::build_app(state),
            iam,
        }
    }

    /// Send a request with a raw body
    pub async fn request_raw(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Post one event envelope
    pub async fn post_event(&self, envelope: Value) -> TestResponse {
        let body = serde_json::to_string(&envelope).expect("Failed to serialize body");
        self.request_raw("POST", "/api/events", body).await
    }
}

/// Build an EventBridge envelope around a CloudTrail record.
pub fn envelope(
    event_name: &str,
    identity_type: &str,
    actor: &str,
    target: &str,
    group: &str,
) -> Value {
    serde_json::json!({
        "version": "0",
        "id": "c2a7f5a1-6f0e-4a4b-9c1d-2b7e1f3f0a11",
        "detail-type": "AWS API Call via CloudTrail",
        "source": "aws.iam",
        "account": "111122223333",
        "time": "2024-05-01T12:00:00Z",
        "region": "us-east-1",
        "detail": {
            "eventSource": "iam.amazonaws.com",
            "eventName": event_name,
            "userIdentity": {
                "type": identity_type,
                "userName": actor,
                "arn": format!("arn:aws:iam::111122223333:user/{actor}"),
                "accountId": "111122223333"
            },
            "requestParameters": {
                "userName": target,
                "groupName": group
            }
        }
    })
}
