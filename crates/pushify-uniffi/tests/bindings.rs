//! Drives the exported objects the way a mobile host would, with the log callback installed.

use std::sync::{Arc, Mutex};

use pushify_core::{
    platform::DevicePlatform,
    registration::RegistrationOutcome,
    session::AppRoute,
};
use pushify_test::{start_api_mock, FakePlatform, FAKE_DEVICE_ID};
use pushify_uniffi::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[derive(Default)]
struct TestCallback {
    logs: Mutex<Vec<(String, String, String)>>,
}

impl LogCallback for TestCallback {
    fn on_log(&self, level: String, target: String, message: String) -> Result<()> {
        self.logs
            .lock()
            .expect("Failed to lock logs mutex")
            .push((level, target, message));
        Ok(())
    }
}

fn client(settings: pushify_core::ClientSettings, platform: &Arc<FakePlatform>) -> Client {
    Client::new(
        Some(settings),
        DevicePlatform::Android,
        platform.clone(),
        platform.clone(),
        platform.clone(),
    )
}

#[tokio::test]
async fn test_register_through_bindings() {
    let callback = Arc::new(TestCallback::default());
    init_logger(Some(callback.clone() as Arc<dyn LogCallback>));

    let (_server, settings) = start_api_mock(vec![
        Mock::given(method("POST"))
            .and(path("/device"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1),
        Mock::given(method("POST"))
            .and(path("/auth/refresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt" })))
            .expect(1),
    ])
    .await;

    let platform = Arc::new(FakePlatform::default());
    let client = client(settings, &platform);

    assert_eq!(client.session().route(), AppRoute::Setup);
    assert!(!client.registration().is_registering());

    let outcome = client.registration().setup_device().await.unwrap();
    assert!(matches!(outcome, RegistrationOutcome::Registered { .. }));

    let session = client.session().session().unwrap();
    assert_eq!(session.session_token, FAKE_DEVICE_ID);
    assert_eq!(client.session().route(), AppRoute::Main);

    let logs = callback.logs.lock().expect("Failed to lock logs mutex");
    let (level, target, _) = logs
        .iter()
        .find(|(_, _, message)| message.contains("device registered"))
        .expect("registration should be logged");
    assert_eq!(level, "INFO");
    assert!(target.starts_with("pushify_core"));
    assert!(
        logs.iter().all(|(_, _, message)| !message.contains(FAKE_DEVICE_ID)),
        "the session token must not be logged"
    );
    drop(logs);

    client.session().clear();
    assert_eq!(client.session().route(), AppRoute::Setup);
}

#[tokio::test]
async fn test_errors_are_flattened() {
    let (_server, settings) = start_api_mock(vec![Mock::given(method("POST"))
        .and(path("/device"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Bad device" })))])
    .await;

    let platform = Arc::new(FakePlatform::default());
    let client = client(settings, &platform);

    let err = client
        .registration()
        .register_device(Some("Test".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, PushifyError::RegisterDevice(_)));
    assert_eq!(platform.calls().alerts, vec!["Bad device".to_string()]);
    assert!(client.session().session().is_none());
}
