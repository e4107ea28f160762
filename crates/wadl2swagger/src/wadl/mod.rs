mod node;
pub(crate) mod parser;

pub use node::{DocText, Element};

use crate::error::ConvertError;

/// A parsed WADL document, rooted at its `application` element.
#[derive(Debug, Clone)]
pub struct WadlDocument {
  root: Element,
}

impl WadlDocument {
  /// Parses WADL XML into a document tree.
  ///
  /// Namespace prefixes are stripped during the parse, so accessors see
  /// plain WADL vocabulary names regardless of how the input qualified them.
  pub fn parse(xml: &str) -> Result<Self, ConvertError> {
    let root = parser::parse_tree(xml)?;

    if root.name() != "application" {
      return Err(ConvertError::unsupported(format!(
        "expected an `application` root element, found `{}`",
        root.name()
      )));
    }

    Ok(Self { root })
  }

  #[must_use]
  pub fn application(&self) -> &Element {
    &self.root
  }
}
