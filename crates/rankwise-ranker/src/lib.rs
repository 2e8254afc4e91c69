//! rankwise-ranker — Multi-criteria ranking engine.
//! Normalises raw feature values and scores alternatives under the
//! additive and maximax rules.

pub mod normalise;
pub mod scorer;
pub mod weights;
pub mod pipeline;

pub use normalise::normalize;
pub use pipeline::{evaluate, rank};
pub use scorer::{find_best, score_additive, score_maximax};
