//! Command-line interface

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "talent-score",
    version,
    about = "Scores public GitHub profiles from account and repository metadata"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve(ServeCommand),
    /// Analyze one profile and print the result
    Analyze(AnalyzeCommand),
}

#[derive(Args, Debug, Default)]
pub struct ServeCommand {
    /// Listen address, overrides HOST
    #[arg(long)]
    pub host: Option<String>,
    /// Listen port, overrides PORT
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Profile URL, e.g. https://github.com/octocat
    pub github_url: String,
    /// Print the raw JSON result instead of the text report
    #[arg(long)]
    pub json: bool,
}
