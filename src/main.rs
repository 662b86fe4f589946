use anyhow::{Context, Result};
use std::io::{self, Read};
use std::process;
use log::{debug, error, info};

use qdisc::{app, cli, logging};

fn main() {
    if let Err(e) = run() {
        error!("Application error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::args::parse_args();
    cli::args::validate_args(&args)?;

    let config_manager = app::load_configuration(&args)?;

    let log_config = app::configure_logging(&args, &config_manager)?;
    logging::init_logger(log_config)?;

    let queue_config = app::resolve_queue_config(&args, &config_manager)?;

    let values = if args.values.is_empty() {
        debug!("No values on the command line, reading stdin");
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read values from stdin")?;
        app::parse_values(&input)?
    } else {
        args.values.clone()
    };

    let report = app::run_queue(&queue_config, values)?;
    info!("{}", report.summary());
    report.write_to(&mut io::stdout().lock())
}
