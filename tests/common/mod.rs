#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use taskboard::{
    routes::{API_PREFIX, app},
    state::AppState,
    test_helpers::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, database_state},
};

pub struct TestApp {
    pub state: Arc<AppState>,
    pub router: Router,
    _dir: TempDir,
}

/// Full stack over a fresh SQLite file. The seeded admin is user 1.
pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("taskboard.db").display()
    );
    let state = database_state(&url).await.expect("build app state");
    TestApp {
        router: app(state.clone()),
        state,
        _dir: dir,
    }
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(api_path(path));
        if let Some(auth) = auth {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let res = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = res.status();
        let bytes = body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).expect("response should be JSON");
        (status, json)
    }

    pub async fn register(
        &self,
        first: &str,
        last: &str,
        email: &str,
        password: &str,
        account_type: &str,
    ) -> (StatusCode, Value) {
        self.send(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({
                "firstName": first,
                "lastName": last,
                "email": email,
                "password": password,
                "accountType": account_type,
            })),
        )
        .await
    }

    /// Logs in and returns the `Authorization` header value.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/auth",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        let token = body["data"]["access_token"]
            .as_str()
            .expect("access token present");
        format!("Bearer {token}")
    }

    pub async fn admin_auth(&self) -> String {
        self.login(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD).await
    }

    /// Registers a team member and returns `(user_id, auth header)`.
    pub async fn member(&self, first: &str, email: &str) -> (i32, String) {
        let (status, body) = self
            .register(first, "Tester", email, "member-pass", "Team Member")
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        let user_id = body["data"]["user_id"].as_i64().expect("user id present") as i32;
        (user_id, self.login(email, "member-pass").await)
    }

    pub async fn create_task(&self, admin: &str, title: &str, user_id: i32) -> i32 {
        let (status, body) = self
            .send(
                Method::POST,
                "/group_admin",
                Some(admin),
                Some(json!({
                    "title": title,
                    "description": "",
                    "deadline": "2026-12-31",
                    "priority": "Medium",
                    "status": "Pending",
                    "user_id": user_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["data"]["task_id"].as_i64().expect("task id present") as i32
    }
}
