mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xsd_dto_generator::{
    xsd::{ArrayConvention, SimplifyOptions},
    Config,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = Config {
        generator: cli.generator,
        allow_dtd: cli.allow_dtd,
        simplify: SimplifyOptions {
            array_convention: if cli.no_array_heuristic {
                ArrayConvention::Disabled
            } else {
                ArrayConvention::Prefix(cli.array_prefix)
            },
        },
        dump_model: cli.dump_model,
    };

    match xsd_dto_generator::transform(&cli.input, cli.output.as_deref(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
