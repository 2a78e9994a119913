use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock::MockTransport;

fn client(mock: &MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new("", mock.clone())
}

fn session_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "trainer_id": "t-1",
        "trainer_name": "Lisa Mary",
        "trainer_image": "https://example.com/lisa.jpg",
        "category": "Yoga",
        "duration": 30,
        "description": "",
        "image": "https://example.com/s.jpg"
    })
}

// =============================================================
// Endpoint helpers
// =============================================================

#[test]
fn sessions_endpoint_without_category_has_no_query() {
    assert_eq!(sessions_endpoint(None), "/api/sessions");
    assert_eq!(sessions_endpoint(Some("All")), "/api/sessions");
    assert_eq!(sessions_endpoint(Some("  ")), "/api/sessions");
}

#[test]
fn sessions_endpoint_encodes_category() {
    assert_eq!(sessions_endpoint(Some("Yoga")), "/api/sessions?category=Yoga");
    assert_eq!(sessions_endpoint(Some("Deep Sleep")), "/api/sessions?category=Deep+Sleep");
    assert_eq!(sessions_endpoint(Some("a&b")), "/api/sessions?category=a%26b");
}

#[test]
fn session_endpoint_formats_expected_path() {
    assert_eq!(session_endpoint("42"), "/api/sessions/42");
}

#[test]
fn join_url_trims_trailing_slash_on_base() {
    assert_eq!(join_url("https://api.example.com/", "/api/programs"), "https://api.example.com/api/programs");
    assert_eq!(join_url("", "/api/programs"), "/api/programs");
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn new_client_sends_no_authorization() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/api/programs", 200, json!([]));
    block_on(client(&mock).list_programs()).unwrap();
    assert_eq!(mock.calls()[0].authorization_header(), None);
}

#[test]
fn with_credential_attaches_bearer_to_every_request() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/api/programs", 200, json!([]))
        .respond(Method::Get, "/api/sessions", 200, json!([]));
    let api = client(&mock).with_credential(Some("xyz".to_owned()));

    block_on(api.list_programs()).unwrap();
    block_on(api.list_sessions(None)).unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.authorization_header().as_deref() == Some("Bearer xyz")));
}

#[test]
fn with_credential_none_clears_bearer_without_touching_original() {
    let api = client(&MockTransport::new()).with_credential(Some("abc".to_owned()));
    let cleared = api.with_credential(None);
    assert_eq!(api.credential(), Some("abc"));
    assert_eq!(cleared.credential(), None);
}

#[test]
fn requests_use_configured_base_url() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "https://backend.test/api/programs", 200, json!([]));
    let api = ApiClient::new("https://backend.test/", mock.clone());
    block_on(api.list_programs()).unwrap();
    assert_eq!(mock.calls()[0].url, "https://backend.test/api/programs");
}

// =============================================================
// Operations
// =============================================================

#[test]
fn login_posts_credentials_and_decodes_token() {
    let mock = MockTransport::new();
    mock.respond(
        Method::Post,
        "/api/auth/login",
        200,
        json!({ "access_token": "xyz", "token_type": "bearer", "user": { "id": 1, "name": "Amy" } }),
    );
    let request = LoginRequest { email: "amy@example.com".to_owned(), password: "secret1".to_owned() };

    let resp = block_on(client(&mock).login(&request)).unwrap();

    assert_eq!(resp.access_token, "xyz");
    assert_eq!(resp.user.id, "1");
    assert_eq!(resp.user.name, "Amy");
    let sent: serde_json::Value = serde_json::from_str(mock.calls()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({ "email": "amy@example.com", "password": "secret1" }));
}

#[test]
fn login_with_bad_credentials_is_unauthorized_with_detail() {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/api/auth/login", 401, json!({ "detail": "Invalid email or password" }));
    let request = LoginRequest { email: "a@b.c".to_owned(), password: "nope".to_owned() };

    let err = block_on(client(&mock).login(&request)).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized(Some("Invalid email or password".to_owned())));
    assert_eq!(err.user_message("Login failed"), "Invalid email or password");
}

#[test]
fn signup_duplicate_email_surfaces_backend_message() {
    let mock = MockTransport::new();
    mock.respond(Method::Post, "/api/auth/signup", 400, json!({ "detail": "Email already registered" }));
    let request = SignupRequest {
        name: "Amy".to_owned(),
        email: "amy@example.com".to_owned(),
        password: "secret1".to_owned(),
    };

    let err = block_on(client(&mock).signup(&request)).unwrap_err();

    assert_eq!(err.user_message("Signup failed"), "Email already registered");
}

#[test]
fn list_sessions_sends_category_filter() {
    let mock = MockTransport::new();
    mock.respond(
        Method::Get,
        "/api/sessions?category=Meditation",
        200,
        json!([session_json("s-1", "Evening Calm")]),
    );

    let sessions = block_on(client(&mock).list_sessions(Some("Meditation"))).unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].title, "Evening Calm");
}

#[test]
fn get_session_missing_is_not_found() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/api/sessions/42", 404, json!({ "detail": "Session not found" }));

    let err = block_on(client(&mock).get_session("42")).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn server_failure_maps_to_server_error() {
    let mock = MockTransport::new();
    mock.respond_raw(Method::Get, "/api/programs", 502, "Bad Gateway");

    let err = block_on(client(&mock).list_programs()).unwrap_err();

    assert_eq!(err, ApiError::Server { status: 502, detail: None });
}

#[test]
fn transport_failure_propagates_unchanged() {
    let mock = MockTransport::new();
    mock.fail(Method::Get, "/api/programs", "connection refused");

    let err = block_on(client(&mock).list_programs()).unwrap_err();

    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
    assert_eq!(mock.calls().len(), 1);
}

#[test]
fn undecodable_payload_is_validation_error() {
    let mock = MockTransport::new();
    mock.respond(Method::Get, "/api/sessions/7", 200, json!({ "unexpected": true }));

    let err = block_on(client(&mock).get_session("7")).unwrap_err();

    assert!(matches!(err, ApiError::Validation { from_backend: false, .. }));
}

#[test]
fn record_progress_posts_started_row() {
    let mock = MockTransport::new();
    mock.respond(
        Method::Post,
        "/api/progress",
        200,
        json!({ "id": "pr-1", "user_id": "u-1", "session_id": "s-1", "completed": false, "progress_percentage": 0 }),
    );
    let api = client(&mock).with_credential(Some("tok".to_owned()));

    let record = block_on(api.record_progress(&ProgressUpdate::started("s-1"))).unwrap();

    assert_eq!(record.session_id.as_deref(), Some("s-1"));
    let call = &mock.calls()[0];
    assert_eq!(call.method, Method::Post);
    let sent: serde_json::Value = serde_json::from_str(call.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({ "session_id": "s-1", "completed": false, "progress_percentage": 0 }));
}

#[test]
fn list_progress_decodes_rows() {
    let mock = MockTransport::new();
    mock.respond(
        Method::Get,
        "/api/progress",
        200,
        json!([
            { "id": "p1", "user_id": "u", "session_id": "s1", "completed": true, "progress_percentage": 100 },
            { "id": "p2", "user_id": "u", "session_id": "s2", "completed": false, "progress_percentage": 0 }
        ]),
    );

    let rows = block_on(client(&mock).list_progress()).unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].completed);
}
