use thiserror::Error;

/// Failures that abort a conversion.
///
/// Conversion is all-or-nothing: no partial Swagger document is produced when
/// any of these surface. Unrecognized WADL *types* are not listed here; the
/// type table falls back to `string` for those.
#[derive(Debug, Error)]
pub enum ConvertError {
  /// A `{name:regex}` template whose regex never closes its braces.
  #[error("unmatched curly brackets in path: {path}")]
  MalformedTemplate { path: String },

  /// A shape of WADL this converter deliberately does not cover, surfaced
  /// loudly instead of silently mis-converting.
  #[error("unsupported WADL construct: {detail}")]
  UnsupportedConstruct { detail: String },

  /// The same Swagger path was reached through ancestor chains that disagree
  /// on the inherited common parameters.
  #[error("conflicting common parameters for path: {path}")]
  MergeConflict { path: String },

  /// A `default` attribute on a non-string-typed parameter that is not
  /// parseable JSON.
  #[error("default value `{value}` of parameter `{name}` is not valid JSON")]
  InvalidDefault {
    name: String,
    value: String,
    #[source]
    source: serde_json::Error,
  },

  /// The input was not well-formed XML.
  #[error("XML syntax error at byte {position}")]
  Xml {
    position: u64,
    #[source]
    source: quick_xml::Error,
  },
}

impl ConvertError {
  pub(crate) fn unsupported(detail: impl Into<String>) -> Self {
    Self::UnsupportedConstruct { detail: detail.into() }
  }
}
