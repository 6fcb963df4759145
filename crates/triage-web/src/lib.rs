//! Web dashboard for the ticket triage pipeline.
//!
//! A read-only viewer over the triage backend API: one page that fetches
//! `/stats` and `/tickets` fresh on every request and renders them as a
//! summary block plus a ticket table. No persistence, no mutation.

#![forbid(unsafe_code)]

pub mod api_client;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use api_client::ApiClient;
pub use server::build_app;
