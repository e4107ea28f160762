use indexmap::map::Entry;
use url::Url;

use super::methods::convert_method;
use super::parameters::convert_parameter;
use super::path_template::normalize_template;
use super::swagger::{Info, ParameterLocation, PathItem, PathMap, Swagger};
use crate::error::ConvertError;
use crate::utils::join_paths;
use crate::utils::text::capitalize;
use crate::wadl::{Element, WadlDocument};

pub(crate) const SWAGGER_VERSION: &str = "2.0";
pub(crate) const DEFAULT_TITLE: &str = "Default Title";
pub(crate) const INFO_VERSION: &str = "1.0.0";

/// Converts a parsed WADL document into a Swagger 2.0 document.
pub fn convert(document: &WadlDocument) -> Result<Swagger, ConvertError> {
  let application = document.application();
  let root = application
    .expect_single("resources")?
    .ok_or_else(|| ConvertError::unsupported("application has no `resources` element"))?;

  let (host, base_path, schemes) = split_base_url(root.attr("base").unwrap_or(""));

  let title = application
    .children("doc")
    .next()
    .and_then(|doc| doc.attr("title"))
    .unwrap_or(DEFAULT_TITLE);

  let mut paths = PathMap::new();
  for resource in root.children("resource") {
    merge_paths(&mut paths, convert_resource(resource)?)?;
  }

  apply_schema_titles(&mut paths);

  Ok(Swagger {
    swagger: SWAGGER_VERSION.to_string(),
    host,
    base_path,
    schemes,
    info: Info {
      title: title.to_string(),
      version: INFO_VERSION.to_string(),
    },
    paths,
  })
}

/// Recursively converts one `resource` node into the path map of its
/// subtree.
///
/// The node's own `param` children are the common parameters: they attach to
/// the path item registered here and are prepended to every path item coming
/// back from child resources, so ancestor parameters always precede a
/// child's own. Child paths are re-normalized and joined under this node's
/// path before merging.
fn convert_resource(resource: &Element) -> Result<PathMap, ConvertError> {
  if resource.has_child("resource_type") {
    return Err(ConvertError::unsupported("resource_type references"));
  }

  let resource_path = join_paths("/", &normalize_template(resource.attr("path").unwrap_or(""))?);

  let common_parameters = resource
    .children("param")
    .map(convert_parameter)
    .collect::<Result<Vec<_>, _>>()?;

  let mut item = PathItem::default();
  for method in resource.children("method") {
    let name = method
      .attr("name")
      .ok_or_else(|| ConvertError::unsupported(format!("method without a name under `{resource_path}`")))?;
    item.operations.insert(name.to_lowercase(), convert_method(method)?);
  }

  let mut paths = PathMap::new();
  if !item.operations.is_empty() {
    item.parameters = common_parameters.clone();
    paths.insert(resource_path.clone(), item);
  }

  for child in resource.children("resource") {
    let mut rewritten = PathMap::new();
    for (sub_path, mut sub_item) in convert_resource(child)? {
      let own = std::mem::take(&mut sub_item.parameters);
      sub_item.parameters = common_parameters.iter().cloned().chain(own).collect();
      rewritten.insert(join_paths(&resource_path, &normalize_template(&sub_path)?), sub_item);
    }
    merge_paths(&mut paths, rewritten)?;
  }

  Ok(paths)
}

/// Folds `additions` into `paths`.
///
/// A path present in both maps must agree on its common parameters —
/// disagreement means the same Swagger path was reached through structurally
/// different ancestor chains, which has no faithful representation. On
/// agreement the operations are shallow-merged, additions winning per
/// method.
pub(crate) fn merge_paths(paths: &mut PathMap, additions: PathMap) -> Result<(), ConvertError> {
  for (path, item) in additions {
    match paths.entry(path) {
      Entry::Occupied(mut existing) => {
        if existing.get().parameters != item.parameters {
          return Err(ConvertError::MergeConflict {
            path: existing.key().clone(),
          });
        }
        existing.get_mut().operations.extend(item.operations);
      }
      Entry::Vacant(slot) => {
        slot.insert(item);
      }
    }
  }

  Ok(())
}

/// Names anonymous body and response schemas after their location.
///
/// `/store/orders/{id}` with a `put` body becomes `StoreOrdersIdPutRequest`;
/// a 200 response schema there becomes `StoreOrdersIdPut200Response`.
/// Schemas that already carry a title keep it.
fn apply_schema_titles(paths: &mut PathMap) {
  for (path, item) in paths.iter_mut() {
    let capitalized = capitalize_path(path);

    for (method, operation) in &mut item.operations {
      let stem = format!("{capitalized}{}", capitalize(method));

      for parameter in operation.parameters.iter_mut().flatten() {
        if parameter.location != ParameterLocation::Body {
          continue;
        }
        if let Some(schema) = &mut parameter.schema
          && schema.title.is_none()
        {
          schema.title = Some(format!("{stem}Request"));
        }
      }

      for (status, response) in &mut operation.responses {
        if let Some(schema) = &mut response.schema
          && schema.title.is_none()
        {
          schema.title = Some(format!("{stem}{status}Response"));
        }
      }
    }
  }
}

fn capitalize_path(path: &str) -> String {
  path
    .replace(['{', '}'], "")
    .split('/')
    .filter(|segment| !segment.is_empty())
    .map(capitalize)
    .collect()
}

/// Splits the `resources/@base` URL into Swagger's host, basePath, and
/// schemes. An absent or unparseable base omits all three.
fn split_base_url(base: &str) -> (Option<String>, Option<String>, Option<Vec<String>>) {
  let Ok(url) = Url::parse(base) else {
    return (None, None, None);
  };

  let host = url.host_str().map(|host| match url.port() {
    Some(port) => format!("{host}:{port}"),
    None => host.to_string(),
  });
  let base_path = (!url.path().is_empty()).then(|| url.path().to_string());
  let schemes = Some(vec![url.scheme().to_string()]);

  (host, base_path, schemes)
}
