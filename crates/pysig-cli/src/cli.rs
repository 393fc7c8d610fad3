//! CLI argument parsing

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "pysig")]
#[command(about = "Python Signature Inspector", long_about = None)]
pub struct Cli {
    /// Stub file to read (reads stdin when omitted)
    pub file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: Format,

    /// Stop after the first valid signature
    #[arg(long)]
    pub first: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
