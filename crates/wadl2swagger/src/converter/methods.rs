use super::parameters::{convert_doc, convert_parameter};
use super::representations::json_body_schema;
use super::responses::{convert_responses, default_responses};
use super::swagger::{Operation, Parameter, ParameterLocation};
use crate::error::ConvertError;
use crate::wadl::Element;

/// Builds one Swagger operation from a WADL `method` node.
pub(crate) fn convert_method(method: &Element) -> Result<Operation, ConvertError> {
  let parameters = match method.expect_single("request")? {
    Some(request) => Some(convert_request(request)?),
    None => None,
  };

  let response_nodes: Vec<&Element> = method.children("response").collect();
  let responses = if response_nodes.is_empty() {
    default_responses()
  } else {
    convert_responses(&response_nodes)?
  };

  let doc = convert_doc(method);

  Ok(
    Operation::builder()
      .maybe_operation_id(method.attr("id").map(str::to_string))
      .responses(responses)
      .maybe_parameters(parameters)
      .maybe_description(doc.description)
      .maybe_external_docs(doc.external_docs)
      .build(),
  )
}

/// Converts a `request` node's parameters, appending a synthetic `body`
/// parameter after them when the request carries a JSON representation.
fn convert_request(request: &Element) -> Result<Vec<Parameter>, ConvertError> {
  let mut parameters = request
    .children("param")
    .map(convert_parameter)
    .collect::<Result<Vec<_>, _>>()?;

  let representations: Vec<&Element> = request.children("representation").collect();
  if let Some(schema) = json_body_schema(&representations)? {
    parameters.push(
      Parameter::builder()
        .name("body")
        .location(ParameterLocation::Body)
        .schema(schema)
        .build(),
    );
  }

  Ok(parameters)
}
