// SPDX-License-Identifier: BUSL-1.1
//! Procedure implementations for the translator stub.
//!
//! The stub does not translate. It accepts the same arguments as the real
//! service, with the same optional trailing languages, and replies in the
//! same shapes with the source text echoed back. Failures are reported
//! in-band as `{status: "error", message}`; the stub never emits wire faults
//! because the client cannot decode them.

use reqtrack_translator::client::{GET_SUPPORTED_LANGUAGES, TRANSLATE_REQUIREMENT, TRANSLATE_TEXT};
use reqtrack_translator::{error_payload, MethodCall, Struct, Value};

/// Language codes and display names the stub accepts as targets.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ru", "Russian"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("zh", "Chinese"),
];

/// Target language when the caller omits it.
const DEFAULT_TARGET: &str = "en";

/// Source language placeholder meaning "detect".
const AUTO_DETECT: &str = "auto";

/// Run `call` and return the struct to send back.
pub fn dispatch(call: &MethodCall) -> Value {
    tracing::info!(method = %call.method_name, params = call.params.len(), "dispatching call");
    let payload = match call.method_name.as_str() {
        TRANSLATE_REQUIREMENT => translate_requirement(&call.params),
        TRANSLATE_TEXT => translate_text(&call.params),
        GET_SUPPORTED_LANGUAGES => supported_languages(),
        other => error_payload(format!("Unknown method: {other}")),
    };
    Value::Struct(payload)
}

fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

fn ok_payload() -> Struct {
    let mut payload = Struct::new();
    payload.insert("status".into(), Value::from("ok"));
    payload
}

fn target_language(value: Option<&Value>) -> Result<&str, Struct> {
    match value.map(Value::as_str) {
        None => Ok(DEFAULT_TARGET),
        Some(Some(code)) if is_supported(code) => Ok(code),
        Some(Some(code)) => Err(error_payload(format!("Unsupported language: {code}"))),
        Some(None) => Err(error_payload("Target language must be a string")),
    }
}

/// Tags stored as a JSON string array are returned as an array; anything
/// else comes back unchanged.
fn decode_tags(tags: &Value) -> Value {
    match tags.as_str().filter(|raw| !raw.is_empty()) {
        Some(raw) => match serde_json::from_str::<Vec<String>>(raw) {
            Ok(list) => Value::from(list),
            Err(_) => tags.clone(),
        },
        None => tags.clone(),
    }
}

fn translate_requirement(params: &[Value]) -> Struct {
    let (requirement, target) = match params {
        [requirement] => (requirement, None),
        [requirement, target] => (requirement, Some(target)),
        _ => return error_payload("translate_requirement expects 1 or 2 parameters"),
    };
    let Some(fields) = requirement.as_struct() else {
        return error_payload("Requirement must be a struct");
    };
    let target = match target_language(target) {
        Ok(code) => code,
        Err(payload) => return payload,
    };

    let mut translated = fields.clone();
    if let Some(tags) = translated.get_mut("tags") {
        *tags = decode_tags(tags);
    }

    let mut payload = ok_payload();
    payload.insert("requirement".into(), Value::Struct(translated));
    payload.insert("target_language".into(), Value::from(target));
    payload
}

fn translate_text(params: &[Value]) -> Struct {
    let (text, target, source) = match params {
        [text] => (text, None, None),
        [text, target] => (text, Some(target), None),
        [text, target, source] => (text, Some(target), Some(source)),
        _ => return error_payload("translate_text expects 1 to 3 parameters"),
    };
    let Some(text) = text.as_str() else {
        return error_payload("Text must be a string");
    };
    let target = match target_language(target) {
        Ok(code) => code,
        Err(payload) => return payload,
    };
    let source = source.and_then(Value::as_str).unwrap_or(AUTO_DETECT);
    let source = if source.is_empty() { AUTO_DETECT } else { source };
    tracing::debug!(source, target, "echoing text");

    let mut payload = ok_payload();
    payload.insert("original".into(), Value::from(text));
    payload.insert("translated".into(), Value::from(text));
    payload.insert("target_language".into(), Value::from(target));
    payload
}

fn supported_languages() -> Struct {
    let languages: Vec<Value> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| -> Value { [("code", *code), ("name", *name)].into_iter().collect() })
        .collect();
    let mut payload = ok_payload();
    payload.insert("languages".into(), Value::Array(languages));
    payload
}
