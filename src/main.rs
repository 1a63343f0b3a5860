use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use company_insight::connector::adapter::http;
use company_insight::{Commands, Container, ContainerConfig, PromptMode, Router};

#[derive(Parser)]
#[command(name = "company-insight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Prompt mode used when a request does not name one: synthesis or retrieval
    #[arg(long, global = true, default_value = "synthesis")]
    mode: PromptMode,

    /// Sampling temperature sent to the completion service
    #[arg(long, global = true, default_value = "0.3")]
    temperature: f32,

    /// Completion calls allowed per query when the response cannot be parsed
    #[arg(long, global = true, default_value = "2")]
    max_parse_attempts: u32,

    /// Answer from a built-in mock instead of calling the completion service
    #[arg(long, global = true)]
    mock_completion: bool,

    /// Mirror the last result to this JSON file so `result` can show it later
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mode: cli.mode,
        temperature: cli.temperature,
        max_parse_attempts: cli.max_parse_attempts,
        mock_completion: cli.mock_completion,
        session_file: cli.session_file,
    })?;

    if let Commands::Serve { port, public } = cli.command {
        let ip = if public {
            Ipv4Addr::UNSPECIFIED
        } else {
            Ipv4Addr::LOCALHOST
        };
        return http::serve(Arc::new(container), SocketAddr::from((ip, port))).await;
    }

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}
