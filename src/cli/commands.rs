use crate::mapper::SpreadsheetMapper;
use crate::types::ProcessOutcome;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Printed on stdout when the argument count is wrong
pub const USAGE: &str = "Usage: pricelist-mapper <input_file> <template_file> <output_file>";

/// Install the stderr log subscriber.
///
/// Stdout is reserved for the JSON result, so nothing is logged there.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
}

/// Execute the mapping and print the JSON result line.
///
/// Mapping failures are part of the payload; only a failure to emit the
/// payload itself is returned as an error.
pub fn process(input: PathBuf, template: PathBuf, output: PathBuf) -> anyhow::Result<ProcessOutcome> {
    let mapper = SpreadsheetMapper::new();
    let outcome = mapper.process(&input, &template, &output);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string(&outcome)?)?;
    stdout.flush()?;

    Ok(outcome)
}
