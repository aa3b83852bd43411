//! Analysis result types and the `analyze` entry point
//!
//! `analyze` is total: any string input, including empty or non-code
//! text, produces a well-formed result. When no pattern rule fires the
//! verdict settles on the constant-time default.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cascade;
use crate::estimates::{self, ExampleCalc};
use crate::features::{self, Features};

/// The fixed set of complexity classes the analyzer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
  #[serde(rename = "O(1)")]
  Constant,
  #[serde(rename = "O(log n)")]
  Logarithmic,
  #[serde(rename = "O(n)")]
  Linear,
  /// Wired into the operations table but never produced by any rule
  #[serde(rename = "O(n log n)")]
  Linearithmic,
  #[serde(rename = "O(n²)")]
  Quadratic,
  #[serde(rename = "O(n³)")]
  Cubic,
  #[serde(rename = "O(2ⁿ)")]
  Exponential,
}

impl Complexity {
  /// Big-O notation as displayed to users
  pub fn notation(&self) -> &'static str {
    match self {
      Complexity::Constant => "O(1)",
      Complexity::Logarithmic => "O(log n)",
      Complexity::Linear => "O(n)",
      Complexity::Linearithmic => "O(n log n)",
      Complexity::Quadratic => "O(n²)",
      Complexity::Cubic => "O(n³)",
      Complexity::Exponential => "O(2ⁿ)",
    }
  }
}

impl fmt::Display for Complexity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.notation())
  }
}

/// One display-only stage of the complexity derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
  pub step: usize,
  pub operation: String,
  pub cost: String,
  pub total: String,
}

/// Everything a display surface needs to render one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
  pub time_complexity: Complexity,
  pub space_complexity: Complexity,
  pub explanation: Vec<String>,
  pub steps: Vec<Step>,
  pub example_calcs: Vec<ExampleCalc>,
  #[serde(flatten)]
  pub features: Features,
}

/// Analyze a snippet of source text and classify its complexity
pub fn analyze(source: &str) -> Analysis {
  let features = features::extract(source);
  let verdict = cascade::classify(&features);
  let example_calcs = estimates::example_table(verdict.time);

  Analysis {
    time_complexity: verdict.time,
    space_complexity: verdict.space,
    explanation: verdict.explanation,
    steps: verdict.steps,
    example_calcs,
    features,
  }
}

/// Read a file and analyze its contents
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Analysis> {
  let source = fs::read_to_string(path.as_ref())?;
  Ok(analyze(&source))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_input_settles_on_defaults() {
    let analysis = analyze("");
    assert_eq!(analysis.time_complexity, Complexity::Constant);
    assert_eq!(analysis.space_complexity, Complexity::Constant);
    assert!(analysis.explanation.is_empty());
    assert!(analysis.steps.is_empty());
    assert_eq!(analysis.features.line_count, 0);
    assert_eq!(analysis.example_calcs.len(), 4);
  }

  #[test]
  fn test_analyze_is_idempotent() {
    let source = "function fibonacci(n) {\n  if (n <= 1) return n;\n  return fibonacci(n - 1) + fibonacci(n - 2);\n}";
    assert_eq!(analyze(source), analyze(source));
  }

  #[test]
  fn test_example_calcs_shape_for_any_input() {
    for source in ["", "garbage ((( text", "for (a) {}\nfor (b) {}"] {
      let sizes: Vec<u64> = analyze(source).example_calcs.iter().map(|calc| calc.n).collect();
      assert_eq!(sizes, vec![10, 100, 1000, 10000]);
    }
  }

  #[test]
  fn test_notation_strings() {
    assert_eq!(Complexity::Constant.to_string(), "O(1)");
    assert_eq!(Complexity::Linearithmic.to_string(), "O(n log n)");
    assert_eq!(Complexity::Exponential.to_string(), "O(2ⁿ)");
  }

  #[test]
  fn test_serialized_shape() {
    let analysis = analyze("for (a) {}\nfor (b) {}");
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["timeComplexity"], "O(n²)");
    assert_eq!(json["spaceComplexity"], "O(1)");
    assert_eq!(json["exampleCalcs"][0]["n"], 10);
    assert_eq!(json["exampleCalcs"][0]["operations"], 100);
    // Feature counts flatten onto the result for display surfaces.
    assert_eq!(json["forLoopCount"], 2);
    assert_eq!(json["lineCount"], 2);
    assert_eq!(json["isRecursive"], false);
  }

  #[test]
  fn test_analyze_file_roundtrip() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "while (x > 0) {{ x--; }}").unwrap();

    let analysis = analyze_file(file.path()).unwrap();
    assert_eq!(analysis.time_complexity, Complexity::Linear);
  }

  #[test]
  fn test_analyze_file_missing_path() {
    assert!(analyze_file("no/such/file.js").is_err());
  }
}
