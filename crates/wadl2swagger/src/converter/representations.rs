use indexmap::IndexMap;

use super::parameters::convert_type;
use super::schema_path::{build_fragment, merge_property};
use super::swagger::Schema;
use crate::error::ConvertError;
use crate::wadl::Element;

pub(crate) const JSON_MEDIA_TYPE: &str = "application/json";

/// Builds one object schema out of the JSON representations among
/// `representations`.
///
/// Each `plain`-style child parameter contributes the fragment its `path`
/// attribute describes; fragments from all JSON representations deep-merge
/// into a single property map. Returns `None` when nothing contributed.
/// Representations of any other media type are skipped — non-JSON bodies are
/// outside this converter's coverage.
pub(crate) fn json_body_schema(representations: &[&Element]) -> Result<Option<Schema>, ConvertError> {
  let mut properties: IndexMap<String, Schema> = IndexMap::new();

  for representation in representations {
    if representation.attr("mediaType") != Some(JSON_MEDIA_TYPE) {
      continue;
    }

    for param in representation.children("param") {
      if param.attr("style") != Some("plain") {
        continue;
      }

      let path = param.attr("path").ok_or_else(|| {
        ConvertError::unsupported(format!(
          "representation parameter `{}` has no path attribute",
          param.attr("name").unwrap_or("<unnamed>")
        ))
      })?;

      let (name, fragment) = build_fragment(path, convert_type(param.attr("type")))?;
      merge_property(&mut properties, name, fragment);
    }
  }

  if properties.is_empty() {
    Ok(None)
  } else {
    Ok(Some(Schema::object(properties)))
  }
}
