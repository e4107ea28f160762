use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

// Jersey extends WADL templates with `{<name>: <regex>}` placeholders, see
// https://docs.oracle.com/cd/E19776-01/820-4867/6nga7f5nc/index.html
// Swagger only knows `{<name>}`, so the regex span has to be cut out. The
// tricky part is finding where the regex ends: it may contain its own brace
// pairs (quantifiers) and backslash-escaped braces.
static PLACEHOLDER_WITH_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}:]+:").unwrap());

/// Rewrites every `{name:regex}` placeholder in `path` to plain `{name}`.
///
/// Templates without regex constraints pass through unchanged, so the
/// rewrite is idempotent.
pub(crate) fn normalize_template(path: &str) -> Result<String, ConvertError> {
  let mut template = path.to_string();

  while let Some(found) = PLACEHOLDER_WITH_REGEX.find(&template) {
    let colon = found.end() - 1;
    let close = matching_close_brace(&template, colon, path)?;
    // Cut from the colon up to (not including) the placeholder's own
    // closing brace, which stays behind to terminate `{name}`.
    template.replace_range(colon..close, "");
  }

  Ok(template)
}

/// Scans forward from the colon of a `{name:regex}` placeholder and returns
/// the byte index of the brace that closes the placeholder.
///
/// Keeps a nesting counter starting at 1 for the placeholder's own open
/// brace; unescaped `{` and `}` inside the regex adjust it. Braces preceded
/// by an odd number of backslashes are regex-escaped literals and are
/// skipped.
fn matching_close_brace(template: &str, colon: usize, original: &str) -> Result<usize, ConvertError> {
  let bytes = template.as_bytes();
  let mut depth = 1usize;
  let mut next = colon + 1;

  while depth != 0 {
    let open = find_unescaped(bytes, b'{', next);
    let close = find_unescaped(bytes, b'}', next);

    let Some(close) = close else {
      return Err(ConvertError::MalformedTemplate {
        path: original.to_string(),
      });
    };

    match open {
      Some(open) if open < close => {
        depth += 1;
        next = open + 1;
      }
      _ => {
        depth -= 1;
        next = close + 1;
      }
    }
  }

  Ok(next - 1)
}

fn find_unescaped(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
  let mut position = from;

  while position < bytes.len() {
    if bytes[position] == needle {
      let mut backslashes = 0;
      while backslashes < position && bytes[position - 1 - backslashes] == b'\\' {
        backslashes += 1;
      }
      if backslashes % 2 == 0 {
        return Some(position);
      }
    }
    position += 1;
  }

  None
}
