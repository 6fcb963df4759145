//! Page handlers

use crate::handlers::error::PageError;
use crate::state::AppState;
use crate::views::{DashboardTemplate, StatsSummary, TicketRow};
use askama::Template;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use tracing::debug;
use triage_core::Error;

/// The dashboard page.
///
/// Issues the two independent backend fetches concurrently and waits for
/// both (a barrier, not a race), then renders the page in fixed order:
/// header, stats summary, ticket table. If either fetch fails the whole
/// composition fails; there is no partial "stats only" or "tickets only"
/// page.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, PageError> {
    let (stats, tickets) = tokio::try_join!(
        state.api_client.get_stats(),
        state.api_client.get_tickets()
    )?;

    debug!(
        total = stats.total,
        tickets = tickets.items.len(),
        "rendering dashboard"
    );

    let page = DashboardTemplate {
        stats: StatsSummary::from(stats),
        rows: tickets.items.into_iter().map(TicketRow::from).collect(),
    };

    let html = page.render().map_err(|e| {
        PageError::from(Error::Render {
            message: e.to_string(),
        })
    })?;

    Ok(Html(html))
}
