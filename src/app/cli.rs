use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Pick an animal on stdin and watch it speak, move, eat and sleep"
)]
pub struct Cli {
    /// File that failed behaviors are appended to (default: errors.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Read settings from this TOML file instead of ~/.config/menagerie/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not print the selection prompt before reading stdin
    #[arg(long)]
    pub no_prompt: bool,
}
