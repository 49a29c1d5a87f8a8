//! CSV column comparison demo
//!
//! A CLI stand-in for a GUI front-end: parse inline CSV rows, extract one
//! numeric column, run the full five-algorithm comparison, print the
//! performance report, then trace a single algorithm over an 8-element
//! preview and print each step.
//!
//! Run with: cargo run --example csv_comparison
//! Set RUST_LOG=debug to see the per-measurement events.

use sortbench::{compare_all, extract_column, trace_sort, Algorithm};
use tracing_subscriber::EnvFilter;

const CSV: &str = "\
name,score
alice,52.5
bob,3.25
carol,88
dave,1.5
erin,97.75
frank,20
grace,64.5
heidi,7
ivan,41.25
judy,15.5
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Split into header + data rows, the way a table widget would
    let mut lines = CSV.lines();
    let headers: Vec<&str> = lines.next().unwrap_or_default().split(',').collect();
    let rows: Vec<Vec<String>> = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();

    let column = 1;
    println!("Column: {} ({} rows)\n", headers[column], rows.len());

    // Full comparison over the whole column
    let values = extract_column(&rows, column, None)?;
    let result = compare_all(&values, &Algorithm::ALL);
    println!("{}\n", result.report());
    println!("as JSON: {}\n", serde_json::to_string_pretty(&result)?);

    // Step trace over an 8-element preview, as the step table would show it
    let preview = extract_column(&rows, column, Some(8))?;
    let (sorted, steps) = trace_sort(&preview, Algorithm::Quick);
    println!("Quick sort steps over {preview:?}:");
    println!("  {:<10} {:?}", "Original", preview);
    for step in &steps {
        println!("  {:<10} {:?}", step.label(), step.snapshot());
    }
    println!("  {:<10} {sorted:?}", "Sorted");

    Ok(())
}
