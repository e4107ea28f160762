use indexmap::IndexMap;

use super::representations::json_body_schema;
use super::swagger::Response;
use crate::error::ConvertError;
use crate::wadl::Element;

pub(crate) const DEFAULT_STATUS: &str = "200";
pub(crate) const DEFAULT_RESPONSE_DESCRIPTION: &str = "Successful Response";

/// The response set every operation starts from.
pub(crate) fn default_responses() -> IndexMap<String, Response> {
  IndexMap::from([(
    DEFAULT_STATUS.to_string(),
    Response {
      schema: None,
      description: DEFAULT_RESPONSE_DESCRIPTION.to_string(),
    },
  )])
}

/// Converts WADL `response` nodes into the Swagger responses map.
///
/// Statuses come from each node's whitespace-separated `status` attribute,
/// defaulting to 200. A node with a JSON representation overwrites every
/// status it lists; when several nodes target the same status, the last one
/// wins. The default 200 entry survives unless something overwrites it.
pub(crate) fn convert_responses(responses: &[&Element]) -> Result<IndexMap<String, Response>, ConvertError> {
  let mut converted = default_responses();

  for response in responses {
    let statuses: Vec<String> = match response.attr("status") {
      Some(status) => status.split_whitespace().map(str::to_string).collect(),
      None => vec![DEFAULT_STATUS.to_string()],
    };

    let representations: Vec<&Element> = response.children("representation").collect();
    let Some(schema) = json_body_schema(&representations)? else {
      continue;
    };

    for status in statuses {
      let response = Response {
        schema: Some(schema.clone()),
        description: status.clone(),
      };
      converted.insert(status, response);
    }
  }

  Ok(converted)
}
