//! nephrite-core
//!
//! Pure domain types: clinic records, feature vectors, and prediction
//! outcomes. No HTTP or database dependency — this is the shared
//! vocabulary of the Nephrite system.

pub mod models;
