use pretty_assertions::assert_eq;
use serde_json::json;
use wadl2swagger::{ConvertError, WadlDocument, convert};

const WIDGET_STORE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wadl:application xmlns:wadl="http://wadl.dev.java.net/2009/02"
                  xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <wadl:doc title="Widget Store API"/>
  <wadl:resources base="https://api.widgets.example:8443/v1/">
    <wadl:resource path="widgets">
      <wadl:method name="GET" id="listWidgets">
        <wadl:doc>Lists all widgets.</wadl:doc>
        <wadl:request>
          <wadl:param name="limit" style="query" type="xs:int" default="25"/>
          <wadl:param name="state" style="query" type="xs:string">
            <wadl:option value="active"/>
            <wadl:option value="retired"/>
          </wadl:param>
        </wadl:request>
      </wadl:method>
      <wadl:method name="POST" id="createWidget">
        <wadl:request>
          <wadl:representation mediaType="application/json">
            <wadl:param name="name" style="plain" path="name" type="xs:string"/>
            <wadl:param name="parts" style="plain" path="parts[n].sku" type="xs:string"/>
            <wadl:param name="count" style="plain" path="parts[n].count" type="xs:int"/>
          </wadl:representation>
        </wadl:request>
        <wadl:response status="201">
          <wadl:representation mediaType="application/json">
            <wadl:param name="id" style="plain" path="id" type="xs:long"/>
          </wadl:representation>
        </wadl:response>
      </wadl:method>
      <wadl:resource path="{id:[0-9]+}">
        <wadl:param name="id" style="template" type="xs:long"/>
        <wadl:method name="GET" id="getWidget"/>
      </wadl:resource>
    </wadl:resource>
  </wadl:resources>
</wadl:application>"#;

#[test]
fn converts_the_widget_store_document() {
  let document = WadlDocument::parse(WIDGET_STORE).unwrap();
  let swagger = convert(&document).unwrap();

  assert_eq!(
    serde_json::to_value(&swagger).unwrap(),
    json!({
      "swagger": "2.0",
      "host": "api.widgets.example:8443",
      "basePath": "/v1/",
      "schemes": ["https"],
      "info": { "title": "Widget Store API", "version": "1.0.0" },
      "paths": {
        "/widgets": {
          "get": {
            "operationId": "listWidgets",
            "responses": { "200": { "description": "Successful Response" } },
            "parameters": [
              {
                "name": "limit",
                "required": false,
                "in": "query",
                "type": "integer",
                "format": "int32",
                "default": 25
              },
              {
                "name": "state",
                "required": false,
                "in": "query",
                "type": "string",
                "enum": ["active", "retired"]
              }
            ],
            "description": "Lists all widgets."
          },
          "post": {
            "operationId": "createWidget",
            "responses": {
              "200": { "description": "Successful Response" },
              "201": {
                "schema": {
                  "type": "object",
                  "properties": {
                    "id": { "type": "integer", "format": "int64" }
                  },
                  "title": "WidgetsPost201Response"
                },
                "description": "201"
              }
            },
            "parameters": [
              {
                "name": "body",
                "in": "body",
                "schema": {
                  "type": "object",
                  "properties": {
                    "name": { "type": "string" },
                    "parts": {
                      "type": "array",
                      "items": {
                        "type": "object",
                        "properties": {
                          "sku": { "type": "string" },
                          "count": { "type": "integer", "format": "int32" }
                        }
                      }
                    }
                  },
                  "title": "WidgetsPostRequest"
                }
              }
            ]
          },
          "parameters": []
        },
        "/widgets/{id}": {
          "get": {
            "operationId": "getWidget",
            "responses": { "200": { "description": "Successful Response" } }
          },
          "parameters": [
            {
              "name": "id",
              "required": true,
              "in": "path",
              "type": "integer",
              "format": "int64"
            }
          ]
        }
      }
    })
  );
}

#[test]
fn rejects_non_wadl_documents() {
  let error = WadlDocument::parse("<openapi/>").unwrap_err();
  assert!(matches!(error, ConvertError::UnsupportedConstruct { .. }));
}

#[test]
fn conversion_is_deterministic() {
  let document = WadlDocument::parse(WIDGET_STORE).unwrap();

  let first = serde_json::to_string(&convert(&document).unwrap()).unwrap();
  let second = serde_json::to_string(&convert(&document).unwrap()).unwrap();
  assert_eq!(first, second);
}
