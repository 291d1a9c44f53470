// ABOUTME: Handler for the table subcommand
// ABOUTME: Prints reference index bands for one age column or the whole table

use ruffier::{
    config::CliConfig,
    errors::AppResult,
    formatters::format_output,
    intelligence::ruffier_evaluator::{reference_bands, reference_table},
};

pub fn run(age: Option<i64>, config: &CliConfig) -> AppResult<()> {
    let data = match age {
        Some(age) => {
            let bands = reference_bands(age)?;
            format_output(&bands, config.output_format, config.pretty)?.data
        }
        None => format_output(&reference_table(), config.output_format, config.pretty)?.data,
    };

    print!("{data}");
    if !data.ends_with('\n') {
        println!();
    }
    Ok(())
}
