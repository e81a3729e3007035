//! PODR Client - Main entry point.
//!
//! Connects to PHUSE's Open Data Repository ("PODR"), lists the available
//! tables, prints a sample of FDA adverse-event records, and disconnects.
//! PODR allows one connection at a time, so everything runs sequentially
//! over a single session.

use clap::Parser;
use podr_client::config::Config;
use podr_client::db::PodrClient;
use podr_client::error::PodrResult;
use podr_client::queries;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let config = Config::parse();

    init_tracing(&config);

    if let Err(err) = run(&config).await {
        eprintln!("{}", err.user_message());
        error!(error = %err, "Fatal error");
        std::process::exit(err.exit_code());
    }
}

async fn run(config: &Config) -> PodrResult<()> {
    // Resolve credentials before touching the network.
    let credentials = config.credentials()?;

    println!("Starting..");

    info!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        "Starting podr-client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut client = PodrClient::connect(config, &credentials).await?;

    println!("\nConnected to PostgreSQL database :: [{}]", config.dbname);
    println!("At host [{}] with port [{}]\n", config.host, config.port);

    let report = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        queries::run_report(client.conn(), config, &mut out).await
    };

    // Close exactly once per successful connect, even when a query failed.
    let closed = client.close().await;
    report?;
    closed?;

    println!(
        "\nDisconnected from PostgreSQL database :: [{}]",
        config.dbname
    );

    Ok(())
}
