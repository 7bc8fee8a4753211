use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flightsched")]
#[command(version = env!("FLIGHTSCHED_LONG_VERSION"))]
#[command(about = "Flight schedule parser and query tool", long_about = None)]
pub struct Cli {
    /// Parse a single CSV file
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Parse all CSV files in a folder (combined, one line numbering)
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub input_dir: Option<PathBuf>,

    /// Custom output path for the database (default: db.json)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_db: Option<PathBuf>,

    /// Load an existing database instead of parsing CSV files
    #[arg(short = 'j', long = "json-db", value_name = "PATH")]
    pub json_db: Option<PathBuf>,

    /// Execute queries from a JSON file on the loaded database
    #[arg(short = 'q', long = "query", value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
