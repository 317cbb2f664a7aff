//! Core domain types for Fitlog.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise kinds and logged exercise records
//! - Profile tiers and the details a profile is created from
//! - Progress reports produced by profiles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Exercise Types
// ============================================================================

/// Kind of logged activity
///
/// Closed set: each kind has a fixed calorie-per-minute rate, see
/// [`crate::policy::rate`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Cardio,
    Strength,
}

/// One logged exercise and its calorie yield
///
/// Calories are computed once, when the record is created, and cannot be
/// changed afterwards.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ExerciseRecord {
    pub(crate) kind: ExerciseKind,
    pub(crate) duration_minutes: i32,
    pub(crate) calories_burned: f64,
    pub(crate) logged_at: DateTime<Utc>,
}

impl ExerciseRecord {
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn calories_burned(&self) -> f64 {
        self.calories_burned
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

/// A `kind:minutes` pair supplied on the command line (e.g. `cardio:30`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub kind: ExerciseKind,
    pub duration_minutes: i32,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Profile tier
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Standard,
    /// Totals are multiplied by [`crate::policy::PREMIUM_MULTIPLIER`]
    Premium,
}

/// User-supplied fields a profile is created from
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileDetails {
    pub name: String,
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: f64,
}

// ============================================================================
// Report Types
// ============================================================================

/// One line of a progress report
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReportLine {
    pub kind: ExerciseKind,
    pub duration_minutes: i32,
    pub calories_burned: f64,
}

/// Snapshot of a profile's progress, as produced by `Profile::describe`
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProgressReport {
    pub tier: Tier,
    pub name: String,
    pub total_calories: f64,
    pub records: Vec<ReportLine>,
}

/// Reports for every profile in a session, plus the live count afterwards
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SessionSummary {
    pub profiles: Vec<ProgressReport>,
    pub live_profiles: usize,
}
