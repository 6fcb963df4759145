//! Wire types for the triage backend API
//!
//! Field names match the backend's JSON contract exactly. Decoding is the
//! only validation performed; a missing field fails the decode and with it
//! the whole render.

use serde::{Deserialize, Serialize};

/// Aggregate snapshot returned by `GET /stats`.
///
/// `categories` arrives ordered by descending count; consumers only ever
/// truncate it, never re-sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    /// Count of all tickets
    pub total: u64,

    /// Count of tickets flagged for human review (never exceeds `total`)
    pub needs_review: u64,

    /// Per-category counts, descending by `n`
    pub categories: Vec<CategoryCount>,
}

/// One category with its ticket count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label produced by the upstream triage
    pub category: String,

    /// Number of tickets in this category
    pub n: u64,
}

/// One triaged support ticket, as returned by `GET /tickets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier
    pub ticket_id: i64,

    /// Creation timestamp, kept as the backend's text form (never parsed here)
    pub created_at: String,

    /// Origin channel
    pub source: String,

    /// Customer identifier or name
    pub customer: String,

    /// Severity tier label
    pub priority: String,

    /// Classification produced by the upstream triage
    pub category: String,

    /// Integer review flag; `1` means flagged, anything else auto-resolved
    pub needs_human_review: i64,

    /// Short human-readable synopsis
    pub summary: String,

    /// Full ticket body with sensitive content removed. Present in the
    /// payload for future views but never rendered in the table.
    pub redacted_text: String,
}

impl Ticket {
    /// Derive the review status from the integer flag
    #[must_use]
    pub const fn review_status(&self) -> ReviewStatus {
        ReviewStatus::from_flag(self.needs_human_review)
    }
}

/// Envelope of `GET /tickets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketList {
    /// Tickets in backend order
    pub items: Vec<Ticket>,
}

/// Two-state review classification of a ticket.
///
/// The derivation is a strict equality check against the literal flag value
/// `1`, preserved verbatim from the source behavior: `0`, `-1`, `2` and any
/// other encoding all mean [`Self::AutoOk`]. If the backend ever switches to
/// a boolean or another truthy encoding this silently misclassifies, which
/// is a known, accepted risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// Flagged for human review
    NeedsReview,
    /// Auto-resolved by the triage pipeline
    AutoOk,
}

impl ReviewStatus {
    /// Classify an integer review flag
    #[must_use]
    pub const fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Self::NeedsReview
        } else {
            Self::AutoOk
        }
    }

    /// True when the ticket is flagged for human review
    #[must_use]
    pub const fn is_needs_review(self) -> bool {
        matches!(self, Self::NeedsReview)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedsReview => write!(f, "Needs review"),
            Self::AutoOk => write!(f, "Auto ok"),
        }
    }
}
