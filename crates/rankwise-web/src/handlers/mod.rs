//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod ranker;
