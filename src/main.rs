use anyhow::{Context, Result};
use clap::Parser;
use json_to_csv::{Cli, logger};

fn main() -> Result<()> {
    // Parse CLI flags
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let options = cli.into_options();
    json_to_csv::run(&options).with_context(|| {
        format!(
            "Conversion from {} to {} failed",
            options.infile, options.outfile
        )
    })?;

    Ok(())
}
