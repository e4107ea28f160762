use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Paths keyed by normalized template, in document order.
pub type PathMap = IndexMap<String, PathItem>;

/// The Swagger 2.0 document produced by a conversion.
///
/// Only the fields this converter can derive from WADL are modeled; absent
/// optional fields are omitted from the serialized JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swagger {
  pub swagger: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host: Option<String>,
  #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
  pub base_path: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub schemes: Option<Vec<String>>,
  pub info: Info,
  pub paths: PathMap,
}

impl Swagger {
  /// Total number of operations across all paths.
  #[must_use]
  pub fn operation_count(&self) -> usize {
    self.paths.values().map(|item| item.operations.len()).sum()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
  pub title: String,
  pub version: String,
}

/// Operations at one path plus the common parameters every operation there
/// inherits from ancestor resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
  #[serde(flatten)]
  pub operations: IndexMap<String, Operation>,
  pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub struct Operation {
  #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  pub responses: IndexMap<String, Response>,
  /// Absent when the WADL method has no `request` node at all, empty when it
  /// has one without parameters.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parameters: Option<Vec<Parameter>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
  pub external_docs: Option<ExternalDocs>,
}

#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub struct Parameter {
  #[builder(into)]
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<bool>,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub param_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
  pub enum_values: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Query,
  Header,
  Path,
  Body,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub schema: Option<Schema>,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalDocs {
  pub url: String,
}

/// The JSON-Schema subset body schemas are assembled from: primitive leaves
/// plus `object/properties` and `array/items` wrappers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<IndexMap<String, Schema>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<Schema>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
}

impl Schema {
  #[must_use]
  pub fn typed(schema_type: impl Into<String>) -> Self {
    Self {
      schema_type: Some(schema_type.into()),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn object(properties: IndexMap<String, Schema>) -> Self {
    Self {
      schema_type: Some("object".to_string()),
      properties: Some(properties),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn array(items: Schema) -> Self {
    Self {
      schema_type: Some("array".to_string()),
      items: Some(Box::new(items)),
      ..Self::default()
    }
  }
}
