/// Roster test generator - drafts contract tests for consumer source files
use std::path::PathBuf;

use clap::Parser;
use roster_testgen::{generate_tests, OpenAiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-testgen")]
#[command(about = "Generate contract test drafts for Roster consumers", long_about = None)]
struct Cli {
    /// Consumer source file to generate tests for
    source: PathBuf,

    /// Contract test file the generated tests should imitate
    #[arg(short, long)]
    template: PathBuf,

    /// Directory the generated file is written to
    #[arg(short, long, default_value = "libraries/roster-client/tests")]
    out_dir: PathBuf,

    /// Chat completions model
    #[arg(short, long, default_value = "gpt-4o")]
    model: String,

    /// API key for the completions endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the completions endpoint
    #[arg(long, default_value = "https://api.openai.com")]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_testgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = OpenAiClient::new(cli.base_url, cli.api_key, cli.model);
    let path = generate_tests(&client, &cli.source, &cli.template, &cli.out_dir).await?;

    println!("Test file generated at {}", path.display());

    Ok(())
}
