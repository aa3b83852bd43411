//! Heuristic Big-O estimation from raw source text

pub mod analysis;
pub mod cascade;
pub mod estimates;
pub mod features;
pub mod presets;

pub use analysis::{analyze, analyze_file, Analysis, Complexity, Step};
pub use estimates::{ExampleCalc, OpCount};
pub use features::{extract, Features};
