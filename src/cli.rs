use clap::{Parser, Subcommand};

/// SplitItRight — A bill splitting CLI that divides receipt items among diners.
#[derive(Parser, Debug)]
#[command(name = "split_it_right")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to an extraction result JSON file (omit to start an empty bill).
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive bill-splitting session.
    Split,

    /// Print the extracted receipt entries without starting a session.
    Inspect,
}

impl Default for Command {
    fn default() -> Self {
        Command::Split
    }
}
