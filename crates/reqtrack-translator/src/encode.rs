// SPDX-License-Identifier: BUSL-1.1
//! XML-RPC document encoding.
//!
//! Every string that lands in text content (method names, struct keys,
//! string values) goes through [`escape_text`]: markup characters are
//! escaped with [`quick_xml::escape::escape`], carriage returns are written as
//! `&#13;` so parsers do not fold `\r\n` into `\n`, and characters XML 1.0
//! forbids are replaced with U+FFFD. The output is well-formed for any
//! Rust `String`.

use std::borrow::Cow;

use quick_xml::escape::escape;

use crate::value::Value;

const XML_DECL: &str = "<?xml version=\"1.0\"?>\n";

/// Build a `<methodCall>` document for `method_name` with positional params.
///
/// An empty method name is encoded as-is; the service rejects it.
pub fn build_request(method_name: &str, params: &[Value]) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str("<methodCall>\n<methodName>");
    out.push_str(&escape_text(method_name));
    out.push_str("</methodName>\n<params>\n");
    for param in params {
        out.push_str("<param><value>");
        encode_value_into(param, &mut out);
        out.push_str("</value></param>\n");
    }
    out.push_str("</params>\n</methodCall>\n");
    out
}

/// Build a successful `<methodResponse>` document carrying one value.
pub fn build_response(value: &Value) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str("<methodResponse>\n<params>\n<param><value>");
    encode_value_into(value, &mut out);
    out.push_str("</value></param>\n</params>\n</methodResponse>\n");
    out
}

/// Encode the typed element for `value` (without the surrounding `<value>`).
pub fn encode_value(value: &Value) -> String {
    let mut out = String::new();
    encode_value_into(value, &mut out);
    out
}

/// Characters allowed in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn escape_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| c != '\r' && is_xml_char(c)) {
        return escape(text);
    }
    let cleaned: String = text
        .chars()
        .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect();
    Cow::Owned(escape(cleaned.as_str()).replace('\r', "&#13;"))
}

fn encode_value_into(value: &Value, out: &mut String) {
    match value {
        Value::Boolean(b) => {
            out.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::Integer(n) => {
            out.push_str("<int>");
            out.push_str(&n.to_string());
            out.push_str("</int>");
        }
        Value::Double(d) => {
            out.push_str("<double>");
            out.push_str(&d.to_string());
            out.push_str("</double>");
        }
        Value::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape_text(s));
            out.push_str("</string>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                out.push_str("<value>");
                encode_value_into(item, out);
                out.push_str("</value>");
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape_text(name));
                out.push_str("</name><value>");
                encode_value_into(member, out);
                out.push_str("</value></member>");
            }
            out.push_str("</struct>");
        }
    }
}
