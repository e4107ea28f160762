//! Converts WADL (XML) API descriptions into Swagger 2.0 JSON.
//!
//! The library side of the `wadl2swagger` binary: [`wadl`] parses the XML
//! into a prefix-stripped element tree, [`converter`] walks the resource
//! tree into a Swagger document. Conversion is pure and all-or-nothing —
//! any unsupported construct aborts with a [`ConvertError`] instead of
//! producing a silently wrong document.

pub mod converter;
pub mod error;
pub mod utils;
pub mod wadl;

pub use converter::convert;
pub use converter::swagger::Swagger;
pub use error::ConvertError;
pub use wadl::WadlDocument;
