//! End-to-end checks of the public `analyze` contract

use oswald::estimates::{OpCount, OVERFLOW_MARKER};
use oswald::{analyze, presets, Complexity};

#[test]
fn example_calcs_always_have_four_fixed_sizes() {
  for source in ["", "not code at all", "for (a) {}", "function f() { f(); f(); }"] {
    let analysis = analyze(source);
    let sizes: Vec<u64> = analysis.example_calcs.iter().map(|calc| calc.n).collect();
    assert_eq!(sizes, vec![10, 100, 1000, 10000], "input: {source:?}");
  }
}

#[test]
fn sequential_loops_read_as_nested() {
  // Two `for (` occurrences classify as quadratic even when the loops are
  // textually sequential: the count is the heuristic, not the structure.
  let source = "for (let i = 0; i < n; i++) { a(); }\nfor (let j = 0; j < n; j++) { b(); }";
  let analysis = analyze(source);
  assert_eq!(analysis.time_complexity, Complexity::Quadratic);
}

#[test]
fn fibonacci_shape_is_exponential() {
  let source = presets::find("fibonacci").unwrap().source;
  let analysis = analyze(source);

  assert!(analysis.features.is_recursive);
  assert_eq!(analysis.features.recursive_call_count, 2);
  assert_eq!(analysis.time_complexity, Complexity::Exponential);
  assert_eq!(analysis.space_complexity, Complexity::Linear);

  // 2ⁿ rows: exact below the cutoff, marker above it.
  assert_eq!(analysis.example_calcs[0].operations, OpCount::Exact(1024));
  assert_eq!(analysis.example_calcs[1].operations, OpCount::Marker(OVERFLOW_MARKER.to_string()));
}

#[test]
fn binary_search_shape_is_logarithmic() {
  let source = presets::find("binarySearch").unwrap().source;
  let analysis = analyze(source);

  assert_eq!(analysis.time_complexity, Complexity::Logarithmic);
  assert_eq!(analysis.steps.len(), 1);

  let rows: Vec<OpCount> =
    analysis.example_calcs.iter().map(|calc| calc.operations.clone()).collect();
  assert_eq!(
    rows,
    vec![OpCount::Exact(4), OpCount::Exact(7), OpCount::Exact(10), OpCount::Exact(14)]
  );
}

#[test]
fn search_markers_win_over_recursion() {
  // Last-rule-wins regression: a single self-call plus the three marker
  // substrings must land on O(log n), not linear recursion.
  let source = "function probe(n) {\n  let mid = 0; let left = 0; let right = 0;\n  return probe(n - 1);\n}";
  let analysis = analyze(source);

  assert_eq!(analysis.features.recursive_call_count, 1);
  assert_eq!(analysis.time_complexity, Complexity::Logarithmic);
  assert_eq!(analysis.steps.len(), 1);
}

#[test]
fn analyze_is_deterministic() {
  for preset in &presets::PRESETS {
    assert_eq!(analyze(preset.source), analyze(preset.source), "preset: {}", preset.name);
  }
}

#[test]
fn empty_input_degrades_to_constant() {
  let analysis = analyze("");
  assert_eq!(analysis.time_complexity, Complexity::Constant);
  assert_eq!(analysis.space_complexity, Complexity::Constant);
  assert!(analysis.explanation.is_empty());
  assert!(analysis.steps.is_empty());
  assert_eq!(analysis.features.line_count, 0);
}

#[test]
fn wire_shape_matches_display_contract() {
  let analysis = analyze(presets::find("fibonacci").unwrap().source);
  let json = serde_json::to_value(&analysis).unwrap();

  assert_eq!(json["timeComplexity"], "O(2ⁿ)");
  assert_eq!(json["spaceComplexity"], "O(n)");
  assert!(json["explanation"].is_array());
  assert_eq!(json["steps"][0]["step"], 1);
  assert_eq!(json["exampleCalcs"][0]["operations"], 1024);
  assert_eq!(json["exampleCalcs"][3]["operations"], "> 1 million");
  assert_eq!(json["recursiveCallCount"], 2);
}
