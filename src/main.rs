use clap::Parser;
use pricelist_mapper::cli;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exactly three positionals. Help and version flags are disabled so that
/// any other argument count, `--help` included, is a usage error.
#[derive(Parser)]
#[command(name = "pricelist-mapper")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Vendor price list (.xlsx, .xls, .xlsb, .ods)
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Q360 template workbook (.xlsx)
    #[arg(allow_hyphen_values = true)]
    template: PathBuf,

    /// Output workbook path (created or overwritten)
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let Ok(cli) = Cli::try_parse() else {
        println!("{}", cli::USAGE);
        return Ok(ExitCode::FAILURE);
    };

    cli::init_logging();
    cli::process(cli.input, cli.template, cli.output)?;

    Ok(ExitCode::SUCCESS)
}
