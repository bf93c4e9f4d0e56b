use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file with the waiting parties and available tables
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the seating plan to
    #[arg(short, long, value_name = "FOLDER")]
    pub plan_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
