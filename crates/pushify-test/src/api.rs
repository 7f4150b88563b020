use pushify_core::ClientSettings;

/// Helper for testing the Pushify API using wiremock.
///
/// Warning: when using `Mock::expected` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        api_url: server.uri(),
        user_agent: "Pushify Rust-SDK [TEST]".to_string(),
        client_version: None,
    };

    (server, settings)
}
