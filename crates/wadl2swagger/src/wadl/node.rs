use indexmap::IndexMap;

use crate::error::ConvertError;

/// One parsed XML element with namespace prefixes already stripped.
///
/// Children keep document order and multiplicity; accessors always yield
/// sequences, singletons included. The tree is read-only input to the
/// converter and is never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
  pub(crate) name: String,
  pub(crate) attributes: IndexMap<String, String>,
  pub(crate) children: Vec<Element>,
  pub(crate) text: String,
}

/// Documentation content in the tagged form the converter consumes.
///
/// WADL `doc` elements come in two shapes: bare text, and the Apigee
/// extension carrying attributes (most notably `url`). Distinguishing them
/// here keeps the converters free of shape-sniffing.
#[derive(Debug, Clone, PartialEq)]
pub enum DocText {
  Plain(String),
  Annotated { url: Option<String>, text: String },
}

impl Element {
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attributes.get(name).map(String::as_str)
  }

  /// Accumulated text content of the element's direct text nodes.
  #[must_use]
  pub fn text(&self) -> &str {
    &self.text
  }

  /// All child elements named `tag`, in document order.
  pub fn children<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Element> {
    self.children.iter().filter(move |child| child.name == tag)
  }

  #[must_use]
  pub fn has_child(&self, tag: &str) -> bool {
    self.children(tag).next().is_some()
  }

  /// Unwraps a child that the WADL vocabulary allows at most once.
  ///
  /// Returns `Ok(None)` when absent; more than one occurrence is a shape
  /// violation of the supported subset.
  pub fn expect_single(&self, tag: &str) -> Result<Option<&Element>, ConvertError> {
    let mut matches = self.children(tag);
    let first = matches.next();

    if matches.next().is_some() {
      return Err(ConvertError::unsupported(format!(
        "more than one `{tag}` element under `{}`",
        self.name
      )));
    }

    Ok(first)
  }

  /// The element's `doc` children, classified into [`DocText`] variants.
  pub fn doc_texts(&self) -> impl Iterator<Item = DocText> {
    self.children("doc").map(|doc| {
      if doc.attributes.is_empty() {
        DocText::Plain(doc.text.clone())
      } else {
        DocText::Annotated {
          url: doc.attr("url").map(str::to_string),
          text: doc.text.clone(),
        }
      }
    })
  }
}
