// ABOUTME: Handler for the evaluate subcommand
// ABOUTME: Runs the Ruffier evaluation and prints the outcome in the configured format

use ruffier::{
    config::CliConfig,
    errors::AppResult,
    formatters::format_output,
    intelligence::ruffier_evaluator::{evaluate, RuffierOutcome},
};
use tracing::info;

pub fn run(p1: f64, p2: f64, p3: f64, age: i64, config: &CliConfig) -> AppResult<()> {
    let outcome = RuffierOutcome::from(evaluate(p1, p2, p3, age));

    if let RuffierOutcome::NoData(no_data) = &outcome {
        info!(age = no_data.age, "No reference data for age");
    }

    let output = format_output(&outcome, config.output_format, config.pretty)?;
    println!("{}", output.data);
    Ok(())
}
