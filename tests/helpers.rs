// Shared test helpers for pointing the client at a mock server and building
// session-server payloads.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use wiremock::MockServer;

use mojang_client::{Config, Dispatcher, LogFormat, LogLevel};

/// Creates a Config whose every endpoint lives on `server`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(server: &MockServer) -> Config {
    let uri = server.uri();
    Config {
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        api_base: uri.clone(),
        session_server: uri.clone(),
        services_base: uri.clone(),
        oauth_authorize_url: format!("{uri}/oauth20_authorize.srf"),
        oauth_token_url: format!("{uri}/oauth20_token.srf"),
        xbl_url: format!("{uri}/user/authenticate"),
        xsts_url: format!("{uri}/xsts/authorize"),
        client_id: Some("test-client".to_string()),
        timeout_seconds: 5,
        user_agent: "mojang_client_test/1.0".to_string(),
        ..Default::default()
    }
}

/// Creates a dispatcher for `server`.
#[allow(dead_code)]
pub fn create_test_dispatcher(server: &MockServer) -> Dispatcher {
    Dispatcher::new(create_test_config(server)).expect("Failed to build dispatcher")
}

/// Derives a stable, distinct 32-digit id from a username.
#[allow(dead_code)]
pub fn fake_id(name: &str) -> String {
    let hash = name
        .bytes()
        .fold(0x811c_9dc5_u128, |acc, b| {
            (acc ^ u128::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
    format!("{hash:032x}")
}

/// Builds the session server's answer for `GET /session/minecraft/profile/{id}`.
#[allow(dead_code)]
pub fn session_profile(id: &str, name: &str) -> Value {
    let envelope = json!({
        "timestamp": 1_700_000_000_000_i64,
        "profileId": id,
        "profileName": name,
        "textures": {
            "SKIN": {
                "url": format!("http://textures.minecraft.net/texture/{}", "ab".repeat(32))
            }
        }
    });
    json!({
        "id": id,
        "name": name,
        "properties": [{
            "name": "textures",
            "value": STANDARD.encode(envelope.to_string()),
            "signature": "c2lnbmF0dXJl"
        }]
    })
}
