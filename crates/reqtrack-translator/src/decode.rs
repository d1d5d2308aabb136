// SPDX-License-Identifier: BUSL-1.1
//! XML-RPC document decoding.
//!
//! Decoding of a `<value>` subtree is total: unknown type tags degrade to
//! their text content and numbers that fail to parse degrade to strings.
//! Only the document envelope can fail.
//!
//! Wire faults (`<methodResponse><fault>…`) are not recognized. They lack the
//! `params/param/value` path and are reported as
//! [`RpcError::MalformedResponse`]; the translator signals application
//! errors through a `status` member instead.

use crate::error::RpcError;
use crate::value::{Struct, Value};
use crate::xml::{self, Element};

/// An inbound procedure call, as seen by a server.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method_name: String,
    pub params: Vec<Value>,
}

/// Decode a `<methodResponse>` body into its single return value.
pub fn decode_response(bytes: &[u8]) -> Result<Value, RpcError> {
    let root = xml::parse(bytes)?;
    if root.name != "methodResponse" {
        return Err(RpcError::MalformedResponse);
    }
    root.child("params")
        .and_then(|params| params.child("param"))
        .and_then(|param| param.child("value"))
        .map(decode_value)
        .ok_or(RpcError::MalformedResponse)
}

/// Decode a `<methodCall>` body. A missing `<params>` means zero params.
pub fn parse_method_call(bytes: &[u8]) -> Result<MethodCall, RpcError> {
    let root = xml::parse(bytes)?;
    if root.name != "methodCall" {
        return Err(RpcError::MalformedCall);
    }
    let method_name = root
        .child("methodName")
        .map(|name| name.text().trim().to_string())
        .ok_or(RpcError::MalformedCall)?;
    let params = root
        .child("params")
        .map(|params| {
            params
                .children_named("param")
                .map(|param| param.child("value").map(decode_value).unwrap_or_else(empty))
                .collect()
        })
        .unwrap_or_default();
    Ok(MethodCall {
        method_name,
        params,
    })
}

fn empty() -> Value {
    Value::String(String::new())
}

/// Decode one `<value>` element.
pub(crate) fn decode_value(value: &Element) -> Value {
    let Some(typed) = value.first_element() else {
        return empty();
    };
    match typed.name.as_str() {
        "boolean" => Value::Boolean(typed.text() == "1"),
        "int" | "i4" => {
            let text = typed.text();
            text.trim()
                .parse()
                .map(Value::Integer)
                .unwrap_or(Value::String(text))
        }
        "double" => {
            let text = typed.text();
            text.trim()
                .parse()
                .map(Value::Double)
                .unwrap_or(Value::String(text))
        }
        "string" => Value::String(typed.text()),
        "struct" => Value::Struct(decode_struct(typed)),
        "array" => Value::Array(
            typed
                .child("data")
                .map(|data| data.children_named("value").map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => Value::String(typed.text()),
    }
}

fn decode_struct(el: &Element) -> Struct {
    let mut members = Struct::new();
    for member in el.children_named("member") {
        let Some(name) = member.child("name") else {
            continue;
        };
        let value = member.child("value").map(decode_value).unwrap_or_else(empty);
        members.insert(name.text(), value);
    }
    members
}
