//! Example operation counts at fixed input sizes
//!
//! The table is derived from the settled time class alone, independent of
//! whatever steps the cascade recorded along the way.

use serde::{Deserialize, Serialize};

use crate::analysis::Complexity;

/// Marker emitted when 2ⁿ leaves the displayable range
pub const OVERFLOW_MARKER: &str = "> 1 million";

/// Input sizes every example table is built from, ascending
pub const EXAMPLE_SIZES: [u64; 4] = [10, 100, 1000, 10000];

/// Operation count for one table row: exact, or past the marker threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpCount {
  Exact(u64),
  Marker(String),
}

impl OpCount {
  fn overflow() -> Self {
    OpCount::Marker(OVERFLOW_MARKER.to_string())
  }
}

/// One (input size, operation count) illustration row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCalc {
  pub n: u64,
  pub operations: OpCount,
}

/// Build the four-row example table for a settled time class
pub fn example_table(complexity: Complexity) -> Vec<ExampleCalc> {
  EXAMPLE_SIZES
    .iter()
    .map(|&n| ExampleCalc { n, operations: operations_for(complexity, n) })
    .collect()
}

/// Operation count for one input size under one complexity class
fn operations_for(complexity: Complexity, n: u64) -> OpCount {
  match complexity {
    Complexity::Constant => OpCount::Exact(1),
    Complexity::Logarithmic => OpCount::Exact(log2_ceil(n)),
    Complexity::Linear => OpCount::Exact(n),
    Complexity::Linearithmic => OpCount::Exact(n * log2_ceil(n)),
    Complexity::Quadratic => OpCount::Exact(n * n),
    Complexity::Cubic => OpCount::Exact(n * n * n),
    Complexity::Exponential => {
      if n <= 20 {
        OpCount::Exact(1 << n)
      } else {
        OpCount::overflow()
      }
    }
  }
}

/// ⌈log₂ n⌉, matching the table's halving illustration
fn log2_ceil(n: u64) -> u64 {
  (n as f64).log2().ceil() as u64
}

/// Format a raw count for display: K past 1000, M past 1,000,000
pub fn format_operations(operations: &OpCount) -> String {
  match operations {
    OpCount::Marker(marker) => marker.clone(),
    OpCount::Exact(count) => format_count(*count),
  }
}

fn format_count(count: u64) -> String {
  if count >= 1_000_000 {
    format!("{:.1}M", count as f64 / 1_000_000.0)
  } else if count >= 1000 {
    format!("{:.1}K", count as f64 / 1000.0)
  } else {
    count.to_string()
  }
}
