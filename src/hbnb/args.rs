use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hbnb")]
#[command(about = "Interactive console over a file-backed object store", long_about = None)]
pub struct Cli {
    /// Path to the JSON store file (defaults to file.json in the working
    /// directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
