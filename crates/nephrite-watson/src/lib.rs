//! nephrite-watson
//!
//! Client for a hosted Watson ML deployment: IAM token exchange and
//! scoring calls against the deployed model, plus the [`client::Predictor`]
//! seam the HTTP layer consumes. Retry and backoff are deliberately not
//! implemented here; a failed call surfaces as an error and the caller
//! decides whether to resubmit.

pub mod client;
pub mod config;
pub mod error;
pub mod token;
