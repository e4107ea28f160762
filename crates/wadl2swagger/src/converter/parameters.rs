use std::str::FromStr;

use serde_json::Value;
use strum::EnumString;

use super::swagger::{ExternalDocs, Parameter, ParameterLocation, Schema};
use crate::error::ConvertError;
use crate::wadl::{DocText, Element};

/// The WADL parameter styles this converter covers. Anything else (`matrix`,
/// for one) is rejected rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ParameterStyle {
  Query,
  Header,
  Template,
  Plain,
}

impl ParameterStyle {
  pub(crate) fn of(param: &Element) -> Result<Self, ConvertError> {
    let name = param.attr("name").unwrap_or("<unnamed>");
    let style = param
      .attr("style")
      .ok_or_else(|| ConvertError::unsupported(format!("parameter `{name}` has no style")))?;

    Self::from_str(style).map_err(|_| ConvertError::unsupported(format!("parameter style `{style}` on `{name}`")))
  }

  pub(crate) const fn location(self) -> ParameterLocation {
    match self {
      Self::Query => ParameterLocation::Query,
      Self::Header => ParameterLocation::Header,
      Self::Template => ParameterLocation::Path,
      Self::Plain => ParameterLocation::Body,
    }
  }
}

/// Maps a WADL/XSD type attribute to its Swagger primitive schema.
///
/// The attribute may still carry a namespace prefix; only the local part
/// matters, compared case-insensitively. Unrecognized types degrade to
/// `string` — a lossy but deliberate fallback, since failing hard here would
/// reject otherwise convertible documents.
pub(crate) fn convert_type(raw: Option<&str>) -> Schema {
  let Some(raw) = raw else {
    return Schema::default();
  };

  let local = raw.rsplit(':').next().unwrap_or(raw);

  match local.to_ascii_lowercase().as_str() {
    "boolean" | "string" | "integer" => Schema::typed(local),
    "double" | "decimal" => Schema::typed("number"),
    "int" => Schema {
      format: Some("int32".to_string()),
      ..Schema::typed("integer")
    },
    "long" => Schema {
      format: Some("int64".to_string()),
      ..Schema::typed("integer")
    },
    "positiveinteger" => Schema {
      minimum: Some(1),
      ..Schema::typed("integer")
    },
    "anyuri" | "date" | "time" | "date-time" => Schema::typed("string"),
    _ => Schema::typed("string"),
  }
}

/// Description and external-docs content distilled from `doc` children.
#[derive(Debug, Default)]
pub(crate) struct DocBlock {
  pub(crate) description: Option<String>,
  pub(crate) external_docs: Option<ExternalDocs>,
}

/// Folds an element's `doc` children into one block: plain texts join into a
/// newline-separated description, a `url` annotation (Apigee extension)
/// becomes external docs, last one winning.
pub(crate) fn convert_doc(element: &Element) -> DocBlock {
  let mut block = DocBlock::default();

  for doc in element.doc_texts() {
    let text = match doc {
      DocText::Plain(text) => text,
      DocText::Annotated { url, text } => {
        if let Some(url) = url {
          block.external_docs = Some(ExternalDocs { url });
        }
        text
      }
    };

    let text = text.trim();
    if text.is_empty() {
      continue;
    }

    match &mut block.description {
      Some(description) => {
        description.push('\n');
        description.push_str(text);
      }
      None => block.description = Some(text.to_string()),
    }
  }

  block
}

/// Converts one WADL `param` element into a Swagger parameter.
pub(crate) fn convert_parameter(param: &Element) -> Result<Parameter, ConvertError> {
  let style = ParameterStyle::of(param)?;
  let location = style.location();
  let name = param
    .attr("name")
    .ok_or_else(|| ConvertError::unsupported("parameter without a name attribute"))?;

  let type_schema = convert_type(param.attr("type"));
  let param_type = type_schema.schema_type.unwrap_or_else(|| "string".to_string());

  // Swagger requires path parameters; the source attribute cannot opt out.
  let required = if location == ParameterLocation::Path {
    true
  } else {
    parse_required(param.attr("required"), name)?
  };

  let default = param
    .attr("default")
    .map(|raw| convert_default(raw, &param_type, name))
    .transpose()?;

  let doc = convert_doc(param);
  // A doc url would map to externalDocs, but Swagger parameters carry no
  // such field; the annotation is dropped at this level.

  Ok(
    Parameter::builder()
      .name(name)
      .required(required)
      .location(location)
      .param_type(param_type)
      .maybe_format(type_schema.format)
      .maybe_minimum(type_schema.minimum)
      .maybe_default(default)
      .maybe_description(doc.description)
      .maybe_enum_values(options(param))
      .build(),
  )
}

fn parse_required(raw: Option<&str>, name: &str) -> Result<bool, ConvertError> {
  match raw {
    None => Ok(false),
    Some(raw) => raw.trim().parse().map_err(|_| {
      ConvertError::unsupported(format!("required attribute `{raw}` of parameter `{name}` is not a boolean"))
    }),
  }
}

fn convert_default(raw: &str, param_type: &str, name: &str) -> Result<Value, ConvertError> {
  if param_type == "string" {
    return Ok(Value::String(raw.to_string()));
  }

  serde_json::from_str(raw).map_err(|source| ConvertError::InvalidDefault {
    name: name.to_string(),
    value: raw.to_string(),
    source,
  })
}

fn options(param: &Element) -> Option<Vec<String>> {
  if !param.has_child("option") {
    return None;
  }

  Some(
    param
      .children("option")
      .filter_map(|option| option.attr("value"))
      .map(str::to_string)
      .collect(),
  )
}
