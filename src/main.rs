use std::sync::{mpsc, Arc};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use feedloader::api::RemoteFeedLoader;
use feedloader::cli::{Cli, Commands};
use feedloader::config::Config;
use feedloader::domain::{FeedItem, FeedLoader};
use feedloader::errors::{AppError, AppResult};
use feedloader::http::ReqwestHttpClient;

fn main() {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();

    match cli.command {
        Commands::Load { url, json, timeout } => cmd_load(url, json, timeout, &config),
    }
}

fn cmd_load(
    url: Option<String>,
    json: bool,
    timeout: Option<u64>,
    config: &Config,
) -> AppResult<()> {
    let raw = url
        .or_else(|| config.feed_url.clone())
        .ok_or_else(|| AppError::MissingEnvVar("FEEDLOADER_URL".to_string()))?;
    let url = Url::parse(&raw).map_err(|e| AppError::InvalidUrl(format!("{} ({})", raw, e)))?;

    // An explicit flag wins without consulting FEEDLOADER_TIMEOUT_SECS
    let timeout = match timeout {
        Some(secs) => Duration::from_secs(secs),
        None => config.timeout()?,
    };

    let loader = RemoteFeedLoader::new(url, Arc::new(ReqwestHttpClient::new(timeout)));
    let items = load_and_wait(&loader, timeout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print_items(&items);
    }

    Ok(())
}

/// Block until the loader calls back or `timeout` (plus slack for the
/// transport's own timeout to fire first) elapses.
fn load_and_wait(loader: &dyn FeedLoader, timeout: Duration) -> AppResult<Vec<FeedItem>> {
    let (tx, rx) = mpsc::channel();
    loader.load(Box::new(move |result| {
        // Receiver is gone only if we already timed out
        let _ = tx.send(result);
    }));

    let result = rx
        .recv_timeout(timeout + Duration::from_secs(1))
        .map_err(|_| AppError::Timeout(timeout.as_secs()))?;

    Ok(result?)
}

fn print_items(items: &[FeedItem]) {
    if items.is_empty() {
        println!("Feed is empty.");
        return;
    }

    println!("Loaded {} item(s):", items.len());
    for item in items {
        println!();
        println!("  {}", item.id);
        println!("    Image: {}", item.image_url);
        if let Some(description) = &item.description {
            println!("    Description: {}", description);
        }
        if let Some(location) = &item.location {
            println!("    Location: {}", location);
        }
    }
}
