//! Pano Dashboard
//!
//! Fetches the financial and operational summaries from the backend and
//! prints the two dashboard sections.
//!
//! Usage: BACKEND_URL=http://localhost:8000 cargo run --bin pano

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pano_client::{DashboardSummary, SummaryClient};
use pano_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pano=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");
    info!(base_url = %config.backend.base_url, "Fetching dashboard summaries");

    let client = SummaryClient::from_config(&config.backend);
    let dashboard = client.fetch_dashboard().await?;

    render(&dashboard);

    Ok(())
}

/// Prints the two dashboard sections.
fn render(dashboard: &DashboardSummary) {
    println!("Dashboard");
    println!();

    println!("Financial Summary");
    println!("  Cash balance: {}", dashboard.financial.cash_balance);
    let transactions = dashboard.financial.transactions();
    if !transactions.is_empty() {
        println!("  Last transactions:");
        for entry in transactions {
            println!("    {}: {}", entry.description, entry.amount);
        }
    }
    println!();

    println!("Operational Summary");
    println!(
        "  In-progress jobs: {}",
        dashboard.operational.in_progress_jobs
    );
    println!(
        "  Last completed order: {}",
        dashboard.operational.last_completed_order
    );
}
