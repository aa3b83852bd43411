//! Structural feature extraction from raw source text
//!
//! Everything in here is a textual pattern match, never a parse. Loop
//! keywords inside string literals or comments count like any other text,
//! and an identifier that happens to end in `for` followed by `(` counts
//! as a loop. That imprecision is part of the contract: the rule cascade
//! is tuned against these exact counts, so do not swap in a real parser.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

const FOR_LOOP_PATTERN: &str = r"for\s*\(";
const WHILE_LOOP_PATTERN: &str = r"while\s*\(";
const FUNCTION_NAME_PATTERN: &str = r"function\s+(\w+)";
const ARRAY_ALLOCATION_PATTERN: &str = r"\[\]|new Array";

/// Structural counts derived from a single scan of the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
  pub for_loop_count: usize,
  pub while_loop_count: usize,
  pub is_recursive: bool,
  pub recursive_call_count: usize,
  pub has_binary_search_pattern: bool,
  pub array_allocation_count: usize,
  pub line_count: usize,
}

impl Features {
  /// Combined loop count across both keywords
  pub fn loop_count(&self) -> usize {
    self.for_loop_count + self.while_loop_count
  }
}

/// Derive all structural features from a snippet of source text
pub fn extract(source: &str) -> Features {
  let recursive_call_count = count_self_calls(source);

  let features = Features {
    for_loop_count: count_matches(source, FOR_LOOP_PATTERN),
    while_loop_count: count_matches(source, WHILE_LOOP_PATTERN),
    is_recursive: recursive_call_count > 0,
    recursive_call_count,
    has_binary_search_pattern: has_search_markers(source),
    array_allocation_count: count_matches(source, ARRAY_ALLOCATION_PATTERN),
    line_count: count_nonblank_lines(source),
  };

  debug!(?features, "extracted features");
  features
}

/// Count non-overlapping matches of a pattern across the whole text
fn count_matches(source: &str, pattern: &str) -> usize {
  let regex = Regex::new(pattern).unwrap();
  regex.find_iter(source).count()
}

/// Count lines whose trimmed form is non-empty
fn count_nonblank_lines(source: &str) -> usize {
  source.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Count self-calls of the first declared function
///
/// The declaration itself matches the call pattern once, so any further
/// occurrence of `<name>(` means the function invokes itself somewhere.
fn count_self_calls(source: &str) -> usize {
  let name_regex = Regex::new(FUNCTION_NAME_PATTERN).unwrap();
  let name = match name_regex.captures(source) {
    Some(captures) => captures.get(1).unwrap().as_str(),
    None => return 0,
  };

  let call_pattern = format!(r"{}\s*\(", regex::escape(name));
  let call_regex = Regex::new(&call_pattern).unwrap();
  call_regex.find_iter(source).count().saturating_sub(1)
}

/// Substring heuristic for a halving search: `mid` plus `left` or `right`
fn has_search_markers(source: &str) -> bool {
  source.contains("mid") && (source.contains("left") || source.contains("right"))
}
