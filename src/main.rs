use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use uvvis_plot::cli::Args;
use uvvis_plot::config::RunConfig;
use uvvis_plot::pipeline;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = RunConfig::try_from(args).context("invalid arguments")?;
    let report = pipeline::run(&config)?;
    log::debug!("{} file(s) written", report.artifacts().count());
    Ok(())
}
