use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::node::Element;
use crate::error::ConvertError;

/// Maximum element nesting accepted from an input document.
const MAX_ELEMENT_DEPTH: usize = 128;

/// Parses an XML document into an [`Element`] tree.
///
/// Namespace prefixes are stripped from tag and attribute names (`wadl:param`
/// becomes `param`), and `xmlns` declarations are dropped entirely. Child
/// order and multiplicity survive as-is; text content accumulates per
/// element.
pub(crate) fn parse_tree(xml: &str) -> Result<Element, ConvertError> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().trim_text(true);

  let mut stack: Vec<Element> = Vec::new();
  let mut root: Option<Element> = None;

  loop {
    let position = reader.buffer_position();
    let event = reader
      .read_event()
      .map_err(|source| ConvertError::Xml { position, source })?;

    match event {
      Event::Start(start) => {
        if stack.len() >= MAX_ELEMENT_DEPTH {
          return Err(ConvertError::unsupported(format!(
            "element nesting deeper than {MAX_ELEMENT_DEPTH}"
          )));
        }
        stack.push(open_element(&start, position)?);
      }
      Event::Empty(start) => {
        let element = open_element(&start, position)?;
        close_element(&mut stack, &mut root, element)?;
      }
      Event::End(_) => {
        if let Some(element) = stack.pop() {
          close_element(&mut stack, &mut root, element)?;
        }
      }
      Event::Text(text) => {
        let content = text.unescape().map_err(|source| ConvertError::Xml {
          position,
          source: source.into(),
        })?;
        append_text(&mut stack, &content);
      }
      Event::CData(data) => {
        append_text(&mut stack, &String::from_utf8_lossy(&data.into_inner()));
      }
      Event::Eof => break,
      _ => {}
    }
  }

  root.ok_or_else(|| ConvertError::unsupported("document contains no root element"))
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<Element, ConvertError> {
  let name = strip_prefix(&String::from_utf8_lossy(start.name().as_ref())).to_string();
  let mut attributes = IndexMap::new();

  for attribute in start.attributes() {
    let attribute = attribute.map_err(|source| ConvertError::Xml {
      position,
      source: source.into(),
    })?;
    let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();

    if key == "xmlns" || key.starts_with("xmlns:") {
      continue;
    }

    let value = attribute
      .unescape_value()
      .map_err(|source| ConvertError::Xml {
        position,
        source: source.into(),
      })?
      .into_owned();

    attributes.insert(strip_prefix(&key).to_string(), value);
  }

  Ok(Element {
    name,
    attributes,
    ..Element::default()
  })
}

fn close_element(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) -> Result<(), ConvertError> {
  match stack.last_mut() {
    Some(parent) => parent.children.push(element),
    None => {
      if root.is_some() {
        return Err(ConvertError::unsupported("document has more than one root element"));
      }
      *root = Some(element);
    }
  }

  Ok(())
}

fn append_text(stack: &mut [Element], content: &str) {
  if content.is_empty() {
    return;
  }

  if let Some(open) = stack.last_mut() {
    open.text.push_str(content);
  }
}

fn strip_prefix(name: &str) -> &str {
  name.rsplit(':').next().unwrap_or(name)
}
