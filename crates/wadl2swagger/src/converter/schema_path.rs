use indexmap::IndexMap;
use indexmap::map::Entry;

use super::swagger::Schema;
use crate::error::ConvertError;

/// One step of a flattened parameter path: a property name, optionally
/// flagged as an array by the `[n]` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
  name: String,
  array: bool,
}

/// Expands a flattened parameter path like `a.b[n].c` into the schema
/// fragment it denotes, returning the top-level property name together with
/// its schema.
///
/// Every dot descends into an `object/properties` wrapper and every `[n]`
/// suffix inserts an `array/items` wrapper, so `items[n].name` with a string
/// leaf yields `items: {array of {object with name: string}}`. The caller
/// collects the returned pairs into the enclosing object's property map.
pub(crate) fn build_fragment(path: &str, leaf: Schema) -> Result<(String, Schema), ConvertError> {
  let mut segments = parse_path(path)?.into_iter().rev();

  let Some(last) = segments.next() else {
    return Err(malformed(path));
  };

  let mut name = last.name;
  let mut value = if last.array { Schema::array(leaf) } else { leaf };

  for segment in segments {
    let inner = Schema::object(IndexMap::from([(name, value)]));
    value = if segment.array { Schema::array(inner) } else { inner };
    name = segment.name;
  }

  Ok((name, value))
}

/// Deep-merges `fragment` into the property map under `name`.
///
/// Sibling properties accumulated from earlier fragments survive at every
/// depth; only a terminal leaf's own fields may be overwritten by a later
/// fragment that targets the same path.
pub(crate) fn merge_property(properties: &mut IndexMap<String, Schema>, name: String, fragment: Schema) {
  match properties.entry(name) {
    Entry::Occupied(mut existing) => merge_schema(existing.get_mut(), fragment),
    Entry::Vacant(slot) => {
      slot.insert(fragment);
    }
  }
}

fn merge_schema(existing: &mut Schema, incoming: Schema) {
  if let Some(incoming_properties) = incoming.properties {
    let properties = existing.properties.get_or_insert_with(IndexMap::new);
    for (name, value) in incoming_properties {
      merge_property(properties, name, value);
    }
  }

  if let Some(incoming_items) = incoming.items {
    match &mut existing.items {
      Some(items) => merge_schema(items, *incoming_items),
      None => existing.items = Some(incoming_items),
    }
  }

  if incoming.schema_type.is_some() {
    existing.schema_type = incoming.schema_type;
  }
  if incoming.format.is_some() {
    existing.format = incoming.format;
  }
  if incoming.minimum.is_some() {
    existing.minimum = incoming.minimum;
  }
  if incoming.title.is_some() {
    existing.title = incoming.title;
  }
}

fn parse_path(path: &str) -> Result<Vec<Segment>, ConvertError> {
  if path.is_empty() {
    return Err(malformed(path));
  }

  path
    .split('.')
    .map(|part| {
      let (name, array) = match part.strip_suffix("[n]") {
        Some(name) => (name, true),
        None => (part, false),
      };

      if name.is_empty() || name.contains('[') || name.contains(']') {
        return Err(malformed(path));
      }

      Ok(Segment {
        name: name.to_string(),
        array,
      })
    })
    .collect()
}

fn malformed(path: &str) -> ConvertError {
  ConvertError::unsupported(format!("malformed representation parameter path `{path}`"))
}
