use pretty_assertions::assert_eq;
use serde_json::json;

use super::common::element;
use crate::converter::responses::convert_responses;
use crate::wadl::Element;

fn convert(elements: &[Element]) -> serde_json::Value {
  let refs: Vec<&Element> = elements.iter().collect();
  serde_json::to_value(convert_responses(&refs).unwrap()).unwrap()
}

#[test]
fn test_response_without_representation_keeps_default() {
  let response = element(r#"<response status="204"/>"#);

  assert_eq!(
    convert(&[response]),
    json!({ "200": { "description": "Successful Response" } })
  );
}

#[test]
fn test_json_representation_overwrites_each_listed_status() {
  let response = element(
    r#"<response status="200 202">
         <representation mediaType="application/json">
           <param name="id" style="plain" path="id" type="xs:int"/>
         </representation>
       </response>"#,
  );

  let schema = json!({
    "type": "object",
    "properties": { "id": { "type": "integer", "format": "int32" } }
  });

  assert_eq!(
    convert(&[response]),
    json!({
      "200": { "schema": schema, "description": "200" },
      "202": { "schema": schema, "description": "202" }
    })
  );
}

#[test]
fn test_missing_status_defaults_to_200() {
  let response = element(
    r#"<response>
         <representation mediaType="application/json">
           <param name="ok" style="plain" path="ok" type="xs:boolean"/>
         </representation>
       </response>"#,
  );

  assert_eq!(
    convert(&[response]),
    json!({
      "200": {
        "schema": { "type": "object", "properties": { "ok": { "type": "boolean" } } },
        "description": "200"
      }
    })
  );
}

#[test]
fn test_last_response_node_wins_per_status() {
  let first = element(
    r#"<response status="200">
         <representation mediaType="application/json">
           <param name="old" style="plain" path="old"/>
         </representation>
       </response>"#,
  );
  let second = element(
    r#"<response status="200">
         <representation mediaType="application/json">
           <param name="new" style="plain" path="new"/>
         </representation>
       </response>"#,
  );

  assert_eq!(
    convert(&[first, second]),
    json!({
      "200": {
        "schema": { "type": "object", "properties": { "new": {} } },
        "description": "200"
      }
    })
  );
}

#[test]
fn test_non_json_media_types_are_ignored() {
  let response = element(
    r#"<response status="200">
         <representation mediaType="application/xml">
           <param name="id" style="plain" path="id"/>
         </representation>
       </response>"#,
  );

  assert_eq!(
    convert(&[response]),
    json!({ "200": { "description": "Successful Response" } })
  );
}
