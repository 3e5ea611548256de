use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use labelview::{browser, server};

#[derive(Parser)]
#[command(
    name = "labelview",
    about = "Serves the bundled audio labeling UI and opens it in the default browser",
    version
)]
struct Args {}

#[tokio::main]
async fn main() {
    Args::parse();
    setup_logging();

    // Must not delay the accept loop; the outcome is best-effort.
    let url = server::base_url();
    tokio::spawn(async move {
        let _ = browser::open(&url);
    });

    if let Err(err) = server::run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
