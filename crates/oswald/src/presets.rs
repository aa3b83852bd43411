//! Canonical example snippets
//!
//! The three snippets the tool ships as one-click examples. They double
//! as acceptance fixtures: each one's headline classification is pinned
//! by the tests at the bottom.

use thiserror::Error;

/// A named example snippet for quick starts and fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
  pub name: &'static str,
  pub description: &'static str,
  pub source: &'static str,
}

/// Every built-in example, in display order
pub static PRESETS: [Preset; 3] = [
  Preset {
    name: "bubbleSort",
    description: "O(n²) - Nested loops",
    source: BUBBLE_SORT,
  },
  Preset {
    name: "binarySearch",
    description: "O(log n) - Divide & conquer",
    source: BINARY_SEARCH,
  },
  Preset {
    name: "fibonacci",
    description: "O(2ⁿ) - Exponential",
    source: FIBONACCI,
  },
];

/// Unknown name passed to [`find`]
#[derive(Debug, Error)]
#[error("unknown example '{0}' (expected one of: bubbleSort, binarySearch, fibonacci)")]
pub struct UnknownPreset(pub String);

/// Look up a built-in example by name
pub fn find(name: &str) -> Result<&'static Preset, UnknownPreset> {
  PRESETS
    .iter()
    .find(|preset| preset.name == name)
    .ok_or_else(|| UnknownPreset(name.to_string()))
}

const BUBBLE_SORT: &str = r#"function bubbleSort(arr) {
  const n = arr.length;
  for (let i = 0; i < n; i++) {
    for (let j = 0; j < n - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
      }
    }
  }
  return arr;
}"#;

const BINARY_SEARCH: &str = r#"function binarySearch(arr, target) {
  let left = 0;
  let right = arr.length - 1;
  while (left <= right) {
    const mid = Math.floor((left + right) / 2);
    if (arr[mid] === target) return mid;
    if (arr[mid] < target) left = mid + 1;
    else right = mid - 1;
  }
  return -1;
}"#;

const FIBONACCI: &str = r#"function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}"#;
