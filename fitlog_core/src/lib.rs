#![forbid(unsafe_code)]

//! Core domain model for Fitlog.
//!
//! This crate provides:
//! - Domain types (exercise kinds and records, profiles, reports)
//! - Calorie accounting policy
//! - Live profile registry
//! - Roster of profiles for a console session
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod policy;
pub mod profile;
pub mod registry;
pub mod roster;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use profile::Profile;
pub use registry::{live_profiles, Registry};
pub use roster::Roster;
pub use report::ReportFormat;
pub use config::Config;
