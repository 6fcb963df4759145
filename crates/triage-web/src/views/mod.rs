//! View models and page template for the dashboard.
//!
//! The view models carry exactly the fields the page renders; anything the
//! backend sends beyond that (notably `redacted_text`) is dropped at
//! construction so it cannot leak into the output.

use askama::Template;
use triage_core::{CategoryCount, ReviewStatus, Stats, Ticket};

/// Number of category rows shown in the summary's top-categories cell
pub const TOP_CATEGORIES: usize = 4;

/// Summary block derived from [`Stats`].
///
/// `top_categories` is the first [`TOP_CATEGORIES`] entries of the backend's
/// category list in the order given; the producer sorts, this view only
/// truncates.
#[derive(Debug, Clone)]
pub struct StatsSummary {
    /// Count of all tickets
    pub total: u64,
    /// Count of tickets flagged for human review
    pub needs_review: u64,
    /// Leading category counts, backend order preserved
    pub top_categories: Vec<CategoryCount>,
}

impl From<Stats> for StatsSummary {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            needs_review: stats.needs_review,
            top_categories: stats
                .categories
                .into_iter()
                .take(TOP_CATEGORIES)
                .collect(),
        }
    }
}

/// One rendered table row.
///
/// `redacted_text`, `created_at` and `source` are intentionally absent:
/// the table never shows them.
#[derive(Debug, Clone)]
pub struct TicketRow {
    /// Ticket identifier, rendered prefixed ("#42")
    pub ticket_id: i64,
    /// Severity tier, rendered as a pill
    pub priority: String,
    /// Triage classification
    pub category: String,
    /// Derived review status badge
    pub review: ReviewStatus,
    /// Customer identifier or name
    pub customer: String,
    /// Short synopsis
    pub summary: String,
}

impl From<Ticket> for TicketRow {
    fn from(ticket: Ticket) -> Self {
        let review = ticket.review_status();
        Self {
            ticket_id: ticket.ticket_id,
            priority: ticket.priority,
            category: ticket.category,
            review,
            customer: ticket.customer,
            summary: ticket.summary,
        }
    }
}

/// The full dashboard page: header, stats summary, ticket table.
#[derive(Debug, Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Aggregate summary block
    pub stats: StatsSummary,
    /// Ticket rows in backend order
    pub rows: Vec<TicketRow>,
}
