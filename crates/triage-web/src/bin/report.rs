//! Operator report CLI for the triage backend.
//!
//! Terminal counterpart of the dashboard: read-only summaries of the review
//! queue and category counts, fetched from the same backend API. Any fetch
//! failure aborts with a nonzero exit, mirroring the page's no-partial-view
//! policy.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use triage_core::{Config, Result, Stats, Ticket};
use triage_web::ApiClient;

/// Triage report tool
#[derive(Debug, Parser)]
#[command(name = "triage-report", version, about)]
struct Cli {
    /// Base URL of the triage API (overrides configuration)
    #[arg(long, env = "TRIAGE_API_BASE")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tickets flagged for human review
    Queue,
    /// Print ticket counts per category
    Categories,
}

/// At most this many flagged tickets are listed
const QUEUE_LIMIT: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    let base_url = cli.base_url.unwrap_or(config.backend.base_url);
    let client = ApiClient::new(base_url);

    match cli.command {
        Command::Queue => {
            let tickets = client.get_tickets().await?;
            let (flagged_total, lines) = queue_lines(tickets.items);
            println!("Needs human review: {flagged_total}");
            for line in lines {
                println!("{line}");
            }
        }
        Command::Categories => {
            let stats = client.get_stats().await?;
            for line in category_lines(&stats) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Derive the review queue from the ticket list.
///
/// Returns the count of every flagged ticket together with listing lines for
/// the first [`QUEUE_LIMIT`] of them, ordered by ticket id.
fn queue_lines(items: Vec<Ticket>) -> (usize, Vec<String>) {
    let mut flagged: Vec<_> = items
        .into_iter()
        .filter(|t| t.review_status().is_needs_review())
        .collect();
    flagged.sort_by_key(|t| t.ticket_id);

    let lines = flagged
        .iter()
        .take(QUEUE_LIMIT)
        .map(|t| format!("- #{} [{}] {}", t.ticket_id, t.category, t.summary))
        .collect();

    (flagged.len(), lines)
}

/// Format one `category  n` line per category, in the backend's order
/// (descending by count), category left-aligned to width 15.
fn category_lines(stats: &Stats) -> Vec<String> {
    stats
        .categories
        .iter()
        .map(|c| format!("{:<15} {}", c.category, c.n))
        .collect()
}
