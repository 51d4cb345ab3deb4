use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "miningsim",
    version,
    about = "Reconstructs mining simulation statistics from an event log"
)]
pub struct Cli {
    /// Path to the simulation log file
    #[arg(short = 'i', long = "input", value_name = "IN_FILE_NAME")]
    pub input: PathBuf,

    /// Path of the statistics document to write (`.json` for JSON, XML otherwise)
    #[arg(short = 'o', long = "output", value_name = "OUT_FILE_NAME")]
    pub output: PathBuf,
}
