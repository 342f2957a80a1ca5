// GitHub talent score server
//
// Serves `POST /api/analyze` by default; `talent-score analyze <url>` runs a
// single analysis from the command line.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AnalyzeCommand, Cli, Commands, ServeCommand};
use github_talent_score::{Config, ProfileAnalyzer, analysis, report, server};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;
    let analyzer = ProfileAnalyzer::new(
        config
            .github_client()
            .context("failed to create GitHub client")?,
    );

    match cli.command.unwrap_or(Commands::Serve(ServeCommand::default())) {
        Commands::Serve(cmd) => serve(config, analyzer, cmd).await,
        Commands::Analyze(cmd) => analyze(analyzer, cmd).await,
    }
}

async fn serve(mut config: Config, analyzer: ProfileAnalyzer, cmd: ServeCommand) -> Result<()> {
    if let Some(host) = cmd.host {
        config.host = host;
    }
    if let Some(port) = cmd.port {
        config.port = port;
    }

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    server::serve(listener, analyzer, shutdown_signal())
        .await
        .context("server error")?;
    info!("Server stopped");
    Ok(())
}

async fn analyze(analyzer: ProfileAnalyzer, cmd: AnalyzeCommand) -> Result<()> {
    let username = analysis::extract_username(&cmd.github_url)?;
    let result = analyzer.analyze_username(&username).await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_text(&username, &result));
    }
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
