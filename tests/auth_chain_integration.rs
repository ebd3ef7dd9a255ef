//! Integration tests for the Microsoft / Xbox Live login chain
//!
//! These tests verify:
//! - A full code exchange walks all four stages in order and opens a session
//! - A failing stage stops the chain before the next stage is called
//! - XSTS error codes are reported whether they arrive on a 200 or a 401
//! - An existing access token skips the chain entirely

mod helpers;

use helpers::{create_test_config, create_test_dispatcher, session_profile};
use mojang_client::auth::{authorize_xsts, XblToken};
use mojang_client::{ApiError, Authenticator, LoginOutcome, LoginRequest};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_ID: &str = "069a79f444e94726a5befca90e38aaf5";

fn authenticator_for(server: &MockServer) -> Authenticator {
    Authenticator::new(create_test_config(server)).expect("Failed to build authenticator")
}

async fn mount_oauth_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .and(body_string_contains("code=auth-code"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("client_id=test-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": "ms-token",
            "refresh_token": "ms-refresh",
            "expires_in": 86400
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_xbl_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/user/authenticate"))
        .and(body_string_contains("d=ms-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "IssueInstant": "2024-01-01T00:00:00.0000000Z",
            "Token": "xbl-token",
            "DisplayClaims": {"xui": [{"uhs": "12345"}]}
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_xsts_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .and(body_string_contains("xbl-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Token": "xsts-token",
            "DisplayClaims": {"xui": [{"uhs": "12345"}]}
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_minecraft_login_success(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/authentication/login_with_xbox"))
        .and(body_json(json!({"identityToken": "XBL3.0 x=12345;xsts-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "some-guid",
            "access_token": "mc-token",
            "token_type": "Bearer",
            "expires_in": 86400
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_account_profile(server: &MockServer, token: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/minecraft/profile"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ACCOUNT_ID,
            "name": "Notch",
            "skins": [],
            "capes": []
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_login_chain() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 1).await;
    mount_xbl_success(&server, 1).await;
    mount_xsts_success(&server, 1).await;
    mount_minecraft_login_success(&server, 1).await;
    mount_account_profile(&server, "mc-token", 1).await;

    let request = LoginRequest {
        code: Some("auth-code".to_string()),
        ..Default::default()
    };
    let outcome = authenticator_for(&server)
        .login(request)
        .await
        .expect("login should succeed");

    let LoginOutcome::Authenticated(session) = outcome else {
        panic!("expected an authenticated session");
    };
    assert_eq!(session.account().name, "Notch");
    assert_eq!(session.account().id.simple().to_string(), ACCOUNT_ID);
    assert_eq!(session.access_token().secret(), "mc-token");

    // Stages run strictly in order.
    let requests = server.received_requests().await.expect("recording is on");
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(
        paths,
        vec![
            "/oauth20_token.srf",
            "/user/authenticate",
            "/xsts/authorize",
            "/authentication/login_with_xbox",
            "/minecraft/profile",
        ]
    );
}

#[tokio::test]
async fn test_access_token_skips_the_chain() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 0).await;
    mount_xbl_success(&server, 0).await;
    mount_account_profile(&server, "existing-token", 1).await;

    let request = LoginRequest {
        access_token: Some("existing-token".to_string()),
        code: Some("auth-code".to_string()),
        ..Default::default()
    };
    let outcome = authenticator_for(&server).login(request).await.unwrap();
    assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
}

#[tokio::test]
async fn test_no_code_or_token_returns_authorization_url() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 0).await;

    let request = LoginRequest {
        state: Some("anti-forgery".to_string()),
        ..Default::default()
    };
    match authenticator_for(&server).login(request).await.unwrap() {
        LoginOutcome::AuthorizationUrl(url) => {
            assert_eq!(url.path(), "/oauth20_authorize.srf");
            assert!(url
                .query_pairs()
                .any(|(k, v)| k == "state" && v == "anti-forgery"));
        }
        other => panic!("expected an authorization URL, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oauth_error_response_stops_chain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "The provided value for the 'code' parameter is not valid."
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_xbl_success(&server, 0).await;

    let result = authenticator_for(&server).exchange_code("bad-code").await;
    match result {
        Err(ApiError::Authentication(message)) => {
            assert!(message.contains("'code' parameter is not valid"))
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oauth_error_object_on_success_status_stops_chain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_grant",
            "errorMessage": "code expired"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_xbl_success(&server, 0).await;

    let result = authenticator_for(&server).exchange_code("old-code").await;
    match result {
        Err(ApiError::Authentication(message)) => {
            assert_eq!(message, "invalid_grant: code expired")
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oauth_error_description_on_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "The provided authorization code has expired."
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_xbl_success(&server, 0).await;

    match authenticator_for(&server).exchange_code("old-code").await {
        Err(ApiError::Authentication(message)) => assert_eq!(
            message,
            "invalid_grant: The provided authorization code has expired."
        ),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oauth_token_object_without_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "error_description": "User declined the requested scopes."
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_xbl_success(&server, 0).await;

    match authenticator_for(&server).exchange_code("auth-code").await {
        Err(ApiError::Authentication(message)) => {
            assert_eq!(message, "User declined the requested scopes.")
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_xbl_failure_stops_chain() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/user/authenticate"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;
    mount_xsts_success(&server, 0).await;

    let result = authenticator_for(&server).exchange_code("auth-code").await;
    match result {
        Err(ApiError::Authentication(message)) => assert_eq!(message, "invalid access token"),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_xsts_error_code_on_unauthorized() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 1).await;
    mount_xbl_success(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Identity": "0",
            "XErr": 2_148_916_238_u64,
            "Message": "",
            "Redirect": "https://start.ui.xboxlive.com/AddChildToFamily"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_minecraft_login_success(&server, 0).await;

    match authenticator_for(&server).exchange_code("auth-code").await {
        Err(ApiError::Authentication(message)) => {
            assert!(message.contains("2148916238"), "message was {message}");
            assert!(message.contains("child account"));
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_xsts_error_code_on_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/xsts/authorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Identity": "0",
            "XErr": "2148916233"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = create_test_dispatcher(&server);
    match authorize_xsts(&dispatcher, XblToken::new("xbl-token")).await {
        Err(ApiError::Authentication(message)) => {
            assert!(message.starts_with("XSTS returned error code 2148916233"))
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_minecraft_login_failure() {
    let server = MockServer::start().await;
    mount_oauth_success(&server, 1).await;
    mount_xbl_success(&server, 1).await;
    mount_xsts_success(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/authentication/login_with_xbox"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "path": "/authentication/login_with_xbox",
            "errorMessage": "Invalid app registration"
        })))
        .expect(1)
        .mount(&server)
        .await;

    match authenticator_for(&server).exchange_code("auth-code").await {
        Err(ApiError::Authentication(message)) => {
            assert_eq!(message, "Invalid app registration")
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upstream_failure_during_chain_is_not_masked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth20_token.srf"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    mount_xbl_success(&server, 0).await;

    let result = authenticator_for(&server).exchange_code("auth-code").await;
    assert!(matches!(
        result,
        Err(ApiError::UpstreamUnavailable { status: 503 })
    ));
}

#[tokio::test]
async fn test_rejected_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/minecraft/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoginRequest {
        access_token: Some("stale-token".to_string()),
        ..Default::default()
    };
    match authenticator_for(&server).login(request).await {
        Err(ApiError::Authentication(message)) => assert_eq!(message, "invalid access token"),
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_profile_and_attributes() {
    let server = MockServer::start().await;
    mount_account_profile(&server, "mc-token", 1).await;
    Mock::given(method("GET"))
        .and(path(format!("/session/minecraft/profile/{ACCOUNT_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_profile(ACCOUNT_ID, "Notch")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/player/attributes"))
        .and(header("authorization", "Bearer mc-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "privileges": {"onlineChat": {"enabled": true}},
            "profanityFilterPreferences": {"profanityFilterOn": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = LoginRequest {
        access_token: Some("mc-token".to_string()),
        ..Default::default()
    };
    let LoginOutcome::Authenticated(session) = authenticator_for(&server).login(request).await.unwrap()
    else {
        panic!("expected an authenticated session");
    };

    let profile = session
        .profile()
        .await
        .unwrap()
        .expect("profile should be returned");
    assert_eq!(profile.username, "Notch");

    let attributes = session.attributes().await.unwrap();
    assert!(attributes.contains_key("privileges"));
}
