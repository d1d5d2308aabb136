// SPDX-License-Identifier: BUSL-1.1
//! Contract tests for TranslatorClient against a wiremock translator.
//!
//! ## Procedures Tested
//!
//! | Procedure | Test |
//! |-----------|------|
//! | `translate_requirement` | `translate_requirement_*` |
//! | `translate_text` | `translate_text_*` |
//! | `get_supported_languages` | `languages_*` |
//! | (failure mapping) | `*_becomes_error_payload` |

use std::time::Duration;

use reqtrack_translator::{
    build_response, http_status_for, is_error_payload, Indicator, Requirement, TranslatorClient,
    TranslatorConfig, Value,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TranslatorClient {
    let addr = server.address();
    let config = TranslatorConfig::new(addr.ip().to_string(), addr.port()).with_timeout_secs(5);
    TranslatorClient::new(config).unwrap()
}

fn xml_response(value: &Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml")
        .set_body_string(build_response(value))
}

fn message(payload: &reqtrack_translator::Struct) -> &str {
    payload
        .get("message")
        .and_then(Value::as_str)
        .expect("error payload carries a message")
}

// ── translate_requirement ────────────────────────────────────────────

#[tokio::test]
async fn translate_requirement_returns_echoed_struct_unchanged() {
    let server = MockServer::start().await;
    let echoed = Value::from(json!({
        "status": "ok",
        "title": "Login",
        "description": "User can log in",
        "type": "functional"
    }));

    Mock::given(method("POST"))
        .and(path("/RPC2"))
        .and(header("content-type", "text/xml"))
        .and(body_string_contains(
            "<methodName>translate_requirement</methodName>",
        ))
        .and(body_string_contains(
            "<member><name>title</name><value><string>Login</string></value></member>",
        ))
        .and(body_string_contains(
            "<param><value><string>en</string></value></param>",
        ))
        .respond_with(xml_response(&echoed))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let requirement = json!({
        "title": "Login",
        "description": "User can log in",
        "type": "functional",
        "tags": "[]"
    });
    let payload = client.translate_requirement(requirement, "en").await;

    assert_eq!(Value::Struct(payload.clone()), echoed);
    assert_eq!(http_status_for(&payload), 200);
}

#[tokio::test]
async fn translate_requirement_sends_typed_record_with_indicators() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/RPC2"))
        .and(body_string_contains(
            "<member><name>type</name><value><string>non-functional</string></value></member>",
        ))
        .and(body_string_contains(
            "<member><name>indicators</name><value><array><data><value><struct>",
        ))
        .and(body_string_contains("<member><name>id</name><value><int>12</int></value></member>"))
        .respond_with(xml_response(&Value::from(json!({"status": "ok"}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let requirement = Requirement {
        id: 12,
        title: "Availability".into(),
        kind: reqtrack_translator::RequirementKind::NonFunctional,
        indicators: vec![Indicator {
            name: "uptime".into(),
            unit: "%".into(),
            value: "99.9".into(),
            ..Indicator::default()
        }],
        ..Requirement::default()
    };
    let payload = client.translate_requirement(&requirement, "de").await;
    assert!(!is_error_payload(&payload));
}

#[tokio::test]
async fn translate_requirement_passes_service_error_through() {
    let server = MockServer::start().await;
    let service_error = Value::from(json!({
        "status": "error",
        "message": "Unsupported language: xx",
        "code": 400
    }));

    Mock::given(method("POST"))
        .respond_with(xml_response(&service_error))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client
        .translate_requirement(json!({"title": "Login"}), "xx")
        .await;
    assert_eq!(Value::Struct(payload.clone()), service_error);
    assert_eq!(http_status_for(&payload), 500);
}

// ── translate_text ───────────────────────────────────────────────────

#[tokio::test]
async fn translate_text_sends_params_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/RPC2"))
        .and(body_string_contains(
            "<methodName>translate_text</methodName>\n<params>\n\
             <param><value><string>Hallo Welt</string></value></param>\n\
             <param><value><string>en</string></value></param>\n\
             <param><value><string>de</string></value></param>\n\
             </params>",
        ))
        .respond_with(xml_response(&Value::from(json!({
            "status": "ok",
            "original": "Hallo Welt",
            "translated": "Hello world",
            "target_language": "en"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.translate_text("Hallo Welt", "en", "de").await;
    assert_eq!(payload["translated"], Value::from("Hello world"));
}

// ── get_supported_languages ──────────────────────────────────────────

#[tokio::test]
async fn languages_decodes_nested_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains(
            "<methodName>get_supported_languages</methodName>\n<params>\n</params>",
        ))
        .respond_with(xml_response(&Value::from(json!({
            "status": "ok",
            "languages": [{"code": "en", "name": "English"}, {"code": "ru", "name": "Russian"}]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.get_supported_languages().await;
    let languages = payload["languages"].as_array().expect("array");
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[1].get("code"), Some(&Value::from("ru")));
}

// ── failure mapping ──────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_service_becomes_error_payload() {
    let config = TranslatorConfig::new("127.0.0.1", 1).with_timeout_secs(2);
    let client = TranslatorClient::new(config).unwrap();

    let payload = client.get_supported_languages().await;
    assert!(is_error_payload(&payload));
    assert!(!message(&payload).is_empty());
    assert_eq!(http_status_for(&payload), 500);
}

#[tokio::test]
async fn invalid_xml_becomes_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not xml at all"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.translate_text("x", "en", "auto").await;
    assert!(is_error_payload(&payload));
    assert_eq!(message(&payload), "Invalid response from translator service");
}

#[tokio::test]
async fn fault_response_becomes_malformed_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<?xml version=\"1.0\"?><methodResponse><fault><value><struct>\
             <member><name>faultCode</name><value><int>1</int></value></member>\
             <member><name>faultString</name><value><string>boom</string></value></member>\
             </struct></value></fault></methodResponse>",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.get_supported_languages().await;
    assert_eq!(message(&payload), "Malformed response from translator service");
}

#[tokio::test]
async fn non_struct_result_becomes_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(xml_response(&Value::from("just a string")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.translate_text("x", "en", "auto").await;
    assert!(is_error_payload(&payload));
    assert!(message(&payload).contains("expected struct, got string"));
}

#[tokio::test]
async fn http_error_status_becomes_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = client.get_supported_languages().await;
    assert!(message(&payload).contains("HTTP 503"));
}

#[tokio::test]
async fn slow_service_times_out_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            xml_response(&Value::from(json!({"status": "ok"}))).set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let addr = server.address();
    let config = TranslatorConfig::new(addr.ip().to_string(), addr.port()).with_timeout_secs(1);
    let client = TranslatorClient::new(config).unwrap();

    let payload = client.get_supported_languages().await;
    assert!(message(&payload).contains("timed out"));
}

#[tokio::test]
async fn call_exposes_typed_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<broken"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.call("anything", &[]).await.unwrap_err();
    assert!(matches!(
        err,
        reqtrack_translator::RpcError::InvalidXml { .. }
    ));
    assert!(!err.is_transport());
}
