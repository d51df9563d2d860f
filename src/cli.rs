use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

pub const DEFAULT_SOURCE: &str = "lipsum.txt";
pub const DEFAULT_OUT: &str = "../src/lipsum.inl";

#[derive(Parser, Debug)]
#[command(name = "lipsum-words")]
#[command(about = "Split a lorem ipsum sample into the unique words it uses", long_about = None)]
pub struct Cli {
    /// Text sample to read words from.
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
    /// Generated word list file (overwritten).
    #[arg(long, default_value = DEFAULT_OUT)]
    pub out: PathBuf,
    /// Language of the generated array literal.
    #[arg(long, value_enum, default_value_t = Target::Cpp)]
    pub target: Target,
    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,
    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Cpp,
    Rust,
}
