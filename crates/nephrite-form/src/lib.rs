//! nephrite-form
//!
//! The urinalysis entry form engine: field rules, input sanitizing,
//! validation verdicts, sample profiles, and the submission gate. Pure
//! state, no UI toolkit; the controller models UI events as explicit
//! method calls so the transition table is testable on its own.

pub mod controller;
pub mod error;
pub mod profiles;
pub mod registry;
pub mod sanitize;
pub mod validate;
