use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON:API resource object: `{"id", "type", "attributes"}`
///
/// Relationships and links are ignored when decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub attributes: A,
}

impl<A> Resource<A> {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, attributes: A) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            attributes,
        }
    }
}

/// Top-level `meta` of a list response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    #[serde(rename = "page-count", default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// A decoded response document
///
/// `included` stays untyped because compound documents may mix resource types;
/// use [`Document::included_of`] to pull out one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document<D> {
    pub data: D,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
    #[serde(default)]
    pub meta: Meta,
}

impl<D: DeserializeOwned> Document<D> {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<D> Document<D> {
    /// Included resources whose `type` equals `kind`, decoded as `T`
    pub fn included_of<T: DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>> {
        self.included
            .iter()
            .filter(|resource| resource.get("type").and_then(Value::as_str) == Some(kind))
            .map(|resource| Ok(serde_json::from_value(resource.clone())?))
            .collect()
    }
}

/// Request body for create/update: `{"data": {"type", ["id",] "attributes"}}`
pub fn resource_body<A: Serialize>(kind: &str, id: Option<&str>, attributes: &A) -> Result<Value> {
    let mut data = serde_json::Map::new();
    data.insert("type".to_string(), Value::String(kind.to_string()));
    if let Some(id) = id {
        data.insert("id".to_string(), Value::String(id.to_string()));
    }
    data.insert("attributes".to_string(), serde_json::to_value(attributes)?);

    let mut body = serde_json::Map::new();
    body.insert("data".to_string(), Value::Object(data));
    Ok(Value::Object(body))
}
