/// Joins two URL path segments with exactly one separating slash.
///
/// Either side may be empty, already slash-terminated, or slash-prefixed;
/// the seam always collapses to a single `/`.
#[must_use]
pub fn join_paths(left: &str, right: &str) -> String {
  format!("{}/{}", left.trim_end_matches('/'), right.trim_start_matches('/'))
}
