/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdeck-store tests

use std::sync::Arc;
use std::sync::Once;

use taskdeck_adapter::{ClientConfig, TaskdeckClient};
use taskdeck_store::Stores;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Wire stores against the mock server
pub fn stores_for(server: &MockServer) -> Stores {
    let client = TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init");
    Stores::new(Arc::new(client))
}

/// JSON body for a task the service would return
#[allow(dead_code)]
pub fn task_body(id: &str, content: &str, project_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "content": content,
        "priority": 1,
        "projectId": project_id,
    })
}

/// JSON body for a project the service would return
#[allow(dead_code)]
pub fn project_body(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name })
}

/// Mount `GET /api/tasks` returning the given tasks for every call
#[allow(dead_code)]
pub async fn mount_task_list(server: &MockServer, tasks: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks))
        .mount(server)
        .await;
}

/// Mount `GET /api/projects` returning the given projects for every call
#[allow(dead_code)]
pub async fn mount_project_list(server: &MockServer, projects: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects))
        .mount(server)
        .await;
}
