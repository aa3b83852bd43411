use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use oswald::analysis::{analyze, Analysis, Complexity};
use oswald::estimates::format_operations;
use oswald::presets;

const TOTAL_WIDTH: usize = 44;

/// Oswald - Heuristic Algorithm Complexity Analysis
#[derive(Parser)]
#[command(name = "oswald")]
#[command(about = "Heuristic Big-O estimation for algorithm snippets")]
#[command(version)]
struct Cli {
  /// File to analyze (reads stdin when omitted)
  #[arg(value_name = "PATH")]
  path: Option<PathBuf>,

  /// Analyze a built-in example instead of a file
  #[arg(short, long, value_name = "NAME")]
  example: Option<String>,

  /// List the built-in examples and exit
  #[arg(long)]
  list_examples: bool,

  /// Emit the analysis as JSON instead of a rendered report
  #[arg(short, long)]
  json: bool,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  if cli.list_examples {
    print_examples();
    return Ok(());
  }

  let source = read_source(&cli)?;
  let analysis = analyze(&source);

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&analysis)?);
  } else {
    print_report(&analysis);
  }

  Ok(())
}

/// Resolve the input text: preset, file, or stdin
fn read_source(cli: &Cli) -> Result<String> {
  if let Some(name) = &cli.example {
    let preset = presets::find(name)?;
    return Ok(preset.source.to_string());
  }

  match &cli.path {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display())),
    None => {
      let mut source = String::new();
      std::io::stdin().read_to_string(&mut source).context("failed to read stdin")?;
      Ok(source)
    }
  }
}

fn print_examples() {
  println!("{}", "Built-in examples:".bold());
  for preset in &presets::PRESETS {
    println!("  {:<14} {}", preset.name.green(), preset.description.dimmed());
  }
}

fn print_report(analysis: &Analysis) {
  println!("{}", "⚡ Oswald - Algorithm Complexity Analysis".purple().bold());
  println!();

  println!("Time Complexity:  {}", complexity_colored(analysis.time_complexity).bold());
  println!("Space Complexity: {}", complexity_colored(analysis.space_complexity).bold());
  println!();

  if !analysis.explanation.is_empty() {
    println!("{}", "Analysis Details".bold());
    for line in &analysis.explanation {
      println!("{} {}", ">".green(), line);
    }
    println!();
  }

  let features = &analysis.features;
  println!("{}", "Source Stats".bold());
  println!("  Lines of Code: {}", features.line_count.to_string().green());
  println!("  Loop Count:    {}", features.loop_count().to_string().green());
  println!("  Recursive:     {}", if features.is_recursive { "Yes".green() } else { "No".green() });
  println!();

  if !analysis.steps.is_empty() {
    println!("{}", "Calculation Steps".bold());
    for step in &analysis.steps {
      println!("  {} {}", format!("[{}]", step.step).green().bold(), step.operation.bold());
      println!("      Cost:  {}", step.cost.dimmed());
      println!("      Total: {}", step.total.cyan());
    }
    println!();
  }

  print_performance_table(analysis);
}

fn print_performance_table(analysis: &Analysis) {
  let n_width = "Input Size (n)".len();

  println!("{}", "Performance Examples".bold());
  println!("  {:<n_width$}  {}", "Input Size (n)", "Operations");
  println!("  {}", "=".repeat(TOTAL_WIDTH));
  for calc in &analysis.example_calcs {
    // Pad before coloring so ANSI escapes don't skew the column width.
    let n_text = format!("{:<n_width$}", calc.n);
    let operations = format_operations(&calc.operations);
    println!("  {}  {}", n_text.green(), operations.cyan());
  }
}

/// Terminal rendition of the green-to-red complexity color ramp
fn complexity_colored(complexity: Complexity) -> ColoredString {
  let text = complexity.notation();
  match complexity {
    Complexity::Constant | Complexity::Logarithmic => text.green(),
    Complexity::Linear => text.cyan(),
    Complexity::Linearithmic => text.yellow(),
    Complexity::Quadratic => text.red(),
    Complexity::Cubic => text.red(),
    Complexity::Exponential => text.magenta(),
  }
}
