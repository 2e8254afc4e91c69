//! rankwise-web — Web front end for the rankwise decision engine.
//! Provides:
//!   - Dataset overview with per-feature optimisation direction
//!   - On-demand calculation of additive and maximax rankings
//!   - JSON API over the same pipeline

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
