use crate::wadl::{Element, WadlDocument, parser};

/// Parses an XML snippet into a single element tree.
pub(crate) fn element(xml: &str) -> Element {
  parser::parse_tree(xml).expect("test XML must parse")
}

/// Wraps resource markup in a minimal application/resources envelope and
/// parses it into a document.
pub(crate) fn document(base: &str, resources: &str) -> WadlDocument {
  let xml = format!(
    r#"<application xmlns="http://wadl.dev.java.net/2009/02">
         <resources base="{base}">{resources}</resources>
       </application>"#
  );
  WadlDocument::parse(&xml).expect("test WADL must parse")
}
