use chrono::Local;
use clap::Parser;
use flightsched::api::{FlightApi, RunPlan};
use flightsched::config::FlightConfig;
use flightsched::error::Result;
use flightsched::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;
use cli::print::{print_error, print_messages};

const EXIT_FAILURE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(EXIT_FAILURE);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let plan = RunPlan {
        input_file: cli.input_file,
        input_dir: cli.input_dir,
        json_db: cli.json_db,
        query_file: cli.query_file,
    };
    // reject bad invocations before reading anything
    plan.check()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = FlightConfig::load(&cwd)?.with_db_file(cli.output_db);

    let mut api = FlightApi::new(FileStore::new(cwd), config);
    let result = api.execute(plan, Local::now())?;
    print_messages(&result.messages);
    Ok(())
}
