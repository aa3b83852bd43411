//! Complexity rule cascade
//!
//! Rules run in a fixed order over a mutable verdict, and a later rule may
//! overwrite whatever an earlier one decided. The order is load-bearing:
//! the search-marker rule runs after recursion on purpose, so its verdict
//! wins whenever both fire. Check the ordering tests at the bottom before
//! rearranging anything.

use tracing::debug;

use crate::analysis::{Complexity, Step};
use crate::features::Features;

/// Verdict accumulator threaded through the cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
  pub time: Complexity,
  pub space: Complexity,
  pub explanation: Vec<String>,
  pub steps: Vec<Step>,
}

impl Default for Verdict {
  /// Constant time and space with nothing to explain
  fn default() -> Self {
    Self {
      time: Complexity::Constant,
      space: Complexity::Constant,
      explanation: vec![],
      steps: vec![],
    }
  }
}

type Rule = fn(&Features, &mut Verdict);

/// The cascade, in evaluation order
const CASCADE: &[Rule] = &[nested_loops, single_loop, recursion, search_markers, array_space];

/// Run every rule over a default verdict, in order
pub fn classify(features: &Features) -> Verdict {
  let mut verdict = Verdict::default();
  for rule in CASCADE {
    rule(features, &mut verdict);
  }

  debug!(time = %verdict.time, space = %verdict.space, "cascade settled");
  verdict
}

/// Two or three loop keywords read as that many levels of nesting
///
/// Four or more loops have no arm: the verdict from an earlier rule (the
/// constant default) stands. Known gap, kept as-is.
fn nested_loops(features: &Features, verdict: &mut Verdict) {
  let nested = features.for_loop_count.max(features.while_loop_count);
  if nested < 2 {
    return;
  }

  match nested {
    2 => {
      verdict.time = Complexity::Quadratic;
      verdict.explanation.push("Detected nested loops: 2 levels of iteration".to_string());
      verdict.steps.push(Step {
        step: 1,
        operation: "Outer loop iteration".to_string(),
        cost: "n iterations".to_string(),
        total: "n".to_string(),
      });
      verdict.steps.push(Step {
        step: 2,
        operation: "Inner loop iteration (per outer)".to_string(),
        cost: "n iterations".to_string(),
        total: "n × n = n²".to_string(),
      });
    }
    3 => {
      verdict.time = Complexity::Cubic;
      verdict.explanation.push("Detected 3 levels of nested loops".to_string());
      verdict.steps.push(Step {
        step: 1,
        operation: "Triple nested iteration".to_string(),
        cost: "n × n × n".to_string(),
        total: "n³".to_string(),
      });
    }
    _ => {}
  }
}

/// A single loop keyword reads as one linear pass
fn single_loop(features: &Features, verdict: &mut Verdict) {
  if features.for_loop_count.max(features.while_loop_count) >= 2 {
    return; // the nested rule owns this shape
  }

  if features.for_loop_count == 1 || features.while_loop_count == 1 {
    verdict.time = Complexity::Linear;
    verdict.explanation.push("Single loop detected: linear time".to_string());
    verdict.steps.push(Step {
      step: 1,
      operation: "Loop iteration".to_string(),
      cost: "n iterations".to_string(),
      total: "n".to_string(),
    });
  }
}

/// Self-calls: two or more branch exponentially, one unwinds linearly
///
/// Either way the call stack grows with the input, so space goes linear
/// and the time verdict from any loop rule is overwritten.
fn recursion(features: &Features, verdict: &mut Verdict) {
  if !features.is_recursive {
    return;
  }

  if features.recursive_call_count >= 2 {
    verdict.time = Complexity::Exponential;
    verdict.explanation.push("Multiple recursive calls detected (exponential)".to_string());
    verdict.steps.push(Step {
      step: 1,
      operation: "Recursive branching".to_string(),
      cost: "2 calls per level".to_string(),
      total: "2ⁿ (tree height n)".to_string(),
    });
  } else {
    verdict.time = Complexity::Linear;
    verdict.explanation.push("Single recursive call (linear recursion)".to_string());
    verdict.steps.push(Step {
      step: 1,
      operation: "Recursive call stack".to_string(),
      cost: "n levels deep".to_string(),
      total: "n".to_string(),
    });
  }

  verdict.space = Complexity::Linear;
  verdict.explanation.push("Recursion uses call stack space".to_string());
}

/// Search markers force a logarithmic verdict over everything before them
///
/// Replaces the steps outright instead of appending. Runs last among the
/// time rules, so a recursive function that merely mentions `mid` and
/// `left`/`right` still lands on O(log n). Known false positive, kept
/// as-is.
fn search_markers(features: &Features, verdict: &mut Verdict) {
  if !features.has_binary_search_pattern {
    return;
  }

  verdict.time = Complexity::Logarithmic;
  verdict.explanation.push("Binary search pattern: dividing search space".to_string());
  verdict.steps = vec![Step {
    step: 1,
    operation: "Search space division".to_string(),
    cost: "Halves each iteration".to_string(),
    total: "log₂(n)".to_string(),
  }];
}

/// Array allocations mean linear auxiliary space, whatever the time verdict
fn array_space(features: &Features, verdict: &mut Verdict) {
  if features.array_allocation_count == 0 {
    return;
  }

  verdict.space = Complexity::Linear;
  verdict.explanation.push(format!("{} array(s) allocated", features.array_allocation_count));
}
