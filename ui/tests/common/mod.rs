use std::time::Duration;

use chrono::Utc;
use egui_kittest::Harness;
use roster_states::Time;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    pub harness: Harness<'a, State>,
}

impl TestCtx<'_> {
    /// Users page harness against a mock rule service whose list endpoint
    /// answers with `list_body`.
    pub async fn new_users_page(list_body: serde_json::Value) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/rule"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body))
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                // Mirror the app loop: stamp the clock, apply command output, render.
                state.ctx.state_mut::<Time>().set(Utc::now());
                state.ctx.apply_pending();
                roster_ui::widgets::users_page(&mut state.ctx, ui);
            },
            state,
        );

        Self {
            mock_server,
            harness,
        }
    }

    /// Step frames until `predicate` holds, failing after ~3 seconds.
    pub async fn wait_for(&mut self, what: &str, mut predicate: impl FnMut(&State) -> bool) {
        for _ in 0..300 {
            self.harness.step();
            if predicate(self.harness.state()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for: {what}");
    }

    /// Step frames until the mock server has seen `count` requests of the
    /// given method, failing after ~3 seconds.
    pub async fn wait_for_requests(&mut self, http_method: &str, count: usize) {
        for _ in 0..300 {
            self.harness.step();
            if self.requests(http_method).await.len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {count} {http_method} request(s)");
    }

    /// All recorded requests with the given method, in arrival order.
    pub async fn requests(&self, http_method: &str) -> Vec<wiremock::Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.to_string().eq_ignore_ascii_case(http_method))
            .collect()
    }
}

/// Two-user page body shared by several tests.
#[allow(unused)]
pub fn two_users_body() -> serde_json::Value {
    serde_json::json!({
        "data": [
            {
                "id": 1,
                "username": "alice",
                "realname": "Alice A",
                "rolename": "admin",
                "deptname": "平台部",
                "position": "工程师",
                "logincount": 0,
                "photo": null
            },
            {
                "id": 2,
                "username": "bob",
                "realname": "Bob",
                "rolename": "user",
                "deptname": "测试部",
                "position": "QA",
                "logincount": 1,
                "photo": null
            }
        ],
        "total": 2
    })
}

/// Empty page body.
#[allow(unused)]
pub fn empty_body() -> serde_json::Value {
    serde_json::json!({ "data": [], "total": 0 })
}
