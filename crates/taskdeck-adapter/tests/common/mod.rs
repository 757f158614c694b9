/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdeck-adapter tests

use taskdeck_adapter::{ClientConfig, TaskdeckClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn mock_client(server: &MockServer) -> TaskdeckClient {
    TaskdeckClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
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
