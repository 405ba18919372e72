//! Bibliotheca client - account overview CLI
//!
//! Signs in with credentials from the environment and prints the account's
//! loans, penalties and notifications with their derived state.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliotheca_client::{
    models::user::Credentials,
    rules,
    ClientConfig,
    Client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ClientConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bibliotheca_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Bibliotheca client v{}", env!("CARGO_PKG_VERSION"));

    let client = Client::new(config)?;

    if !client.session.is_authenticated() {
        let credentials = Credentials {
            email: std::env::var("BIBLIOTHECA_EMAIL")?,
            password: std::env::var("BIBLIOTHECA_PASSWORD")?,
        };
        let user = client.session.sign_in(&credentials).await?;
        tracing::info!("Signed in as {} ({})", user.full_name(), user.role);
    } else {
        tracing::info!("Restored persisted session");
    }

    let today = Utc::now().date_naive();

    let mine = client.loans.my_loans().await?;
    println!("Loans ({} of quota {}):", mine.total, mine.quota);
    for loan in &mine.loans {
        let remaining = rules::days_remaining(loan, today)?;
        let marker = if rules::is_overdue(loan, today)? {
            format!("OVERDUE by {} days", rules::days_overdue(loan, today)?)
        } else {
            format!("{} days left", remaining)
        };
        println!(
            "  #{} {} - {} [{}] ({} extensions left)",
            loan.id,
            loan.book.title,
            loan.status,
            marker,
            rules::extensions_remaining(loan)
        );
    }

    if let Some(reader) = client.session.current_principal().and_then(|u| u.reader) {
        let remaining = rules::quota_remaining(mine.quota, mine.total);
        println!(
            "Card {}: {} loan slots remaining, {} unpaid penalties",
            reader.card_number,
            remaining,
            reader.unpaid_penalties.unwrap_or(0)
        );
        if remaining < 0 {
            tracing::warn!("account is over quota by {} loans", -remaining);
        }
    }

    let stats = rules::LoanStatistics::compute(&mine.loans, today)?;
    println!(
        "Active: {}, overdue: {}, completed: {}",
        stats.active, stats.overdue, stats.completed
    );

    Ok(())
}
