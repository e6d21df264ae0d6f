//! nephrite-auth
//!
//! Client for the hosted identity service (GoTrue-compatible REST API)
//! and validation of the session tokens it issues.

pub mod client;
pub mod error;
pub mod flows;
pub mod jwt;
