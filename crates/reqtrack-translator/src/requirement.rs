// SPDX-License-Identifier: BUSL-1.1
//! Requirement records as assembled by the requirement store.
//!
//! The store joins a requirement row with its indicator rows; the result is
//! what `translate_requirement` sends as its first parameter. The store keeps
//! tags as a JSON-encoded string; they are decoded to an array on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value::{Struct, Value};

/// Functional or non-functional requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementKind {
    #[default]
    Functional,
    NonFunctional,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::NonFunctional => "non-functional",
        }
    }
}

/// Whether an indicator is measured or judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    #[default]
    Quantitative,
    Qualitative,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Qualitative => "qualitative",
        }
    }
}

/// An acceptance indicator attached to a requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: IndicatorKind,
    #[serde(default)]
    pub unit: String,
    /// Target value as entered; kept textual ("100", "99.9", "high").
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// A requirement row joined with its indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: RequirementKind,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub complexity: String,
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub assignee: Option<String>,
    /// JSON-encoded array of tag strings, e.g. `["auth","ui"]`.
    #[serde(default = "empty_tags")]
    pub tags: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
}

fn empty_tags() -> String {
    "[]".to_string()
}

impl Default for Requirement {
    fn default() -> Self {
        Self {
            id: 0,
            project_id: 0,
            title: String::new(),
            description: String::new(),
            kind: RequirementKind::default(),
            priority: String::new(),
            complexity: String::new(),
            layer: String::new(),
            component: String::new(),
            assignee: None,
            tags: empty_tags(),
            status: String::new(),
            created_at: None,
            updated_at: None,
            indicators: Vec::new(),
        }
    }
}

impl Requirement {
    /// Decoded tag list. A tag string that is not a JSON string array yields
    /// no tags.
    pub fn tags(&self) -> Vec<String> {
        serde_json::from_str(&self.tags).unwrap_or_default()
    }
}

fn timestamp(ts: Option<DateTime<Utc>>) -> Value {
    ts.map(|t| t.to_rfc3339()).into()
}

impl From<&Indicator> for Value {
    fn from(ind: &Indicator) -> Self {
        let mut members = Struct::new();
        members.insert("name".into(), Value::from(&ind.name));
        members.insert("type".into(), Value::from(ind.kind.as_str()));
        members.insert("unit".into(), Value::from(&ind.unit));
        members.insert("value".into(), Value::from(&ind.value));
        members.insert("description".into(), Value::from(&ind.description));
        Value::Struct(members)
    }
}

impl From<&Requirement> for Value {
    fn from(req: &Requirement) -> Self {
        let mut members = Struct::new();
        members.insert("id".into(), Value::from(req.id));
        members.insert("project_id".into(), Value::from(req.project_id));
        members.insert("title".into(), Value::from(&req.title));
        members.insert("description".into(), Value::from(&req.description));
        members.insert("type".into(), Value::from(req.kind.as_str()));
        members.insert("priority".into(), Value::from(&req.priority));
        members.insert("complexity".into(), Value::from(&req.complexity));
        members.insert("layer".into(), Value::from(&req.layer));
        members.insert("component".into(), Value::from(&req.component));
        members.insert("assignee".into(), Value::from(req.assignee.as_deref()));
        members.insert("tags".into(), Value::from(req.tags()));
        members.insert("status".into(), Value::from(&req.status));
        members.insert("created_at".into(), timestamp(req.created_at));
        members.insert("updated_at".into(), timestamp(req.updated_at));
        members.insert(
            "indicators".into(),
            Value::Array(req.indicators.iter().map(Value::from).collect()),
        );
        Value::Struct(members)
    }
}

impl From<Requirement> for Value {
    fn from(req: Requirement) -> Self {
        Value::from(&req)
    }
}
