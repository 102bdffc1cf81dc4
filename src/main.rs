use anyhow::{Context, Result};
use clap::Parser;
use resume_harvester::cli::HarvestCli;
use resume_harvester::hiring::Credentials;
use resume_harvester::{HarvestConfig, Harvester};
use tracing::{error, info};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = HarvestCli::parse();

    let mut config = HarvestConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    if cli.user.trim().is_empty() {
        anyhow::bail!("'-u' flag is required");
    }

    let password = match &cli.password {
        Some(password) => password.clone(),
        None => tokio::task::block_in_place(|| rpassword::prompt_password("Enter your password: "))
            .context("Failed to read password")?,
    };
    let credentials = Credentials::new(cli.user.clone(), password);

    let download_dir = config.resolved_download_dir()?;
    let endpoints = config.endpoints()?;
    info!("Saving resumes to {}", download_dir.display());

    println!("Starting downloads...");

    let summary = Harvester::new(&config, endpoints)
        .run(&credentials, &download_dir)
        .await?;

    println!("Downloaded {} resumes", summary.downloaded);
    Ok(())
}
