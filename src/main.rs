use clap::Parser;
use std::process;

use cliff_context::{Result, cli, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("cliff_context")
        .build();

    // stdout is reserved for the JSON document
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn run(cli_args: &cli::Args) -> Result<()> {
    color_eyre::install()?;

    initialize_logger(cli_args.debug)?;

    command::execute(cli_args)
}

fn main() {
    let cli_args = cli::Args::parse();

    if let Err(err) = run(&cli_args) {
        eprintln!("{}", err.report_line());
        process::exit(1);
    }
}
