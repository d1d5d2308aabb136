// SPDX-License-Identifier: BUSL-1.1
//! # RPC Value
//!
//! The tagged union carried by every call and response. A value is exactly
//! one of six variants; there is no null and no "unsupported" case. Native
//! inputs that have no direct counterpart coerce to `String` (absent values
//! become the empty string).
//!
//! ## List or struct
//!
//! Typed Rust callers pick the variant statically: a `Vec` is an array, a
//! map is a struct. Generic JSON callers hand over `serde_json::Value`, where
//! an object may really be a list serialized with index keys. For those,
//! an object is an array iff its keys are exactly `"0"`, `"1"`, … `"n-1"` in
//! that order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Keyed members of an XML-RPC `<struct>`, in insertion order.
pub type Struct = IndexMap<String, Value>;

/// A single XML-RPC value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Struct(Struct),
}

impl Value {
    /// Wire name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "int",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Struct(_) => "struct",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value as `f64`; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Consume the value, returning its members if it is a struct.
    pub fn into_struct(self) -> Result<Struct, Value> {
        match self {
            Self::Struct(members) => Ok(members),
            other => Err(other),
        }
    }

    /// Look up a struct member. `None` for missing keys and non-structs.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|members| members.get(key))
    }

    /// Convert to a JSON value for display or pass-through to a browser.
    ///
    /// Non-finite doubles have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Boolean(b) => serde_json::Value::Bool(*b),
            Self::Integer(n) => serde_json::Value::from(*n),
            Self::Double(d) => serde_json::Number::from_f64(*d)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Struct(members) => serde_json::Value::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// True when the object's keys are exactly `"0"..="n-1"` in order.
///
/// The empty object is not treated as a list.
fn is_sequential_keys(map: &serde_json::Map<String, serde_json::Value>) -> bool {
    !map.is_empty()
        && map
            .keys()
            .enumerate()
            .all(|(index, key)| *key == index.to_string())
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::String(String::new()),
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if n.is_u64() {
                    Self::String(n.to_string())
                } else {
                    n.as_f64()
                        .map(Self::Double)
                        .unwrap_or_else(|| Self::String(n.to_string()))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                if is_sequential_keys(&map) {
                    Self::Array(map.into_iter().map(|(_, v)| Self::from(v)).collect())
                } else {
                    Self::Struct(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
                }
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

macro_rules! impl_from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::String(n.to_string()))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::String(n.to_string()))
    }
}

impl From<f32> for Value {
    fn from(d: f32) -> Self {
        Self::Double(f64::from(d))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or_else(|| Self::String(String::new()))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    fn from(members: IndexMap<String, V>) -> Self {
        Self::Struct(members.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(members: BTreeMap<String, V>) -> Self {
        Self::Struct(members.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Struct(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_becomes_empty_string() {
        assert_eq!(Value::from(json!(null)), Value::String(String::new()));
        assert_eq!(Value::from(None::<i64>), Value::String(String::new()));
    }

    #[test]
    fn json_numbers_pick_integer_then_double() {
        assert_eq!(Value::from(json!(42)), Value::Integer(42));
        assert_eq!(Value::from(json!(-7)), Value::Integer(-7));
        assert_eq!(Value::from(json!(2.5)), Value::Double(2.5));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::String(u64::MAX.to_string())
        );
    }

    #[test]
    fn sequential_object_keys_become_array() {
        let v = Value::from(json!({"0": "a", "1": "b", "2": "c"}));
        assert_eq!(v, Value::Array(vec!["a".into(), "b".into(), "c".into()]));
    }

    #[test]
    fn gapped_object_keys_stay_struct() {
        let v = Value::from(json!({"0": "a", "1": "b", "3": "c"}));
        let members = v.as_struct().expect("struct");
        assert_eq!(members.len(), 3);
        assert_eq!(members.get("3"), Some(&Value::from("c")));
    }

    #[test]
    fn out_of_order_index_keys_stay_struct() {
        let v = Value::from(json!({"1": "b", "0": "a"}));
        assert_eq!(v.kind(), "struct");
    }

    #[test]
    fn padded_index_keys_stay_struct() {
        let v = Value::from(json!({"00": "a", "1": "b"}));
        assert_eq!(v.kind(), "struct");
    }

    #[test]
    fn empty_object_stays_struct() {
        assert_eq!(Value::from(json!({})), Value::Struct(Struct::new()));
        assert_eq!(Value::from(json!([])), Value::Array(vec![]));
    }

    #[test]
    fn struct_keeps_insertion_order() {
        let v = Value::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = v.as_struct().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn to_json_maps_non_finite_double_to_null() {
        assert_eq!(Value::Double(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::Double(1.5).to_json(), json!(1.5));
    }

    #[test]
    fn to_json_round_trips_nested_object() {
        let original = json!({
            "name": "X",
            "indicators": [{"name": "latency", "value": "100"}],
            "active": true,
            "weight": 3
        });
        assert_eq!(Value::from(original.clone()).to_json(), original);
    }

    #[test]
    fn from_iter_builds_struct() {
        let v: Value = [("status", "ok"), ("message", "fine")].into_iter().collect();
        assert_eq!(v.get("status").and_then(Value::as_str), Some("ok"));
        assert_eq!(v.get("missing"), None);
    }

    #[test]
    fn large_unsigned_coerces_to_string() {
        assert_eq!(Value::from(u64::MAX), Value::String(u64::MAX.to_string()));
        assert_eq!(Value::from(5u64), Value::Integer(5));
    }
}
