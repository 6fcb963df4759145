//! HTTP handlers for the dashboard

pub mod error;
pub mod health;
pub mod pages;
