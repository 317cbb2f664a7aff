//! Calorie accounting policy.
//!
//! Maps an exercise kind and duration to calories burned:
//! - Cardio: 8.0 kcal per minute
//! - Strength: 5.0 kcal per minute
//! - Premium profiles: 1.5x the base total
//!
//! Durations are not validated. Zero and negative minutes are accepted and
//! produce zero or negative calories.

use crate::{Error, ExerciseEntry, ExerciseKind, ExerciseRecord, Result, Tier};
use chrono::Utc;
use std::fmt;
use std::str::FromStr;

/// Calories burned per minute of cardio
pub const CARDIO_RATE: f64 = 8.0;

/// Calories burned per minute of strength training
pub const STRENGTH_RATE: f64 = 5.0;

/// Multiplier applied to a premium profile's total
pub const PREMIUM_MULTIPLIER: f64 = 1.5;

/// Calorie-per-minute rate for an exercise kind
pub const fn rate(kind: ExerciseKind) -> f64 {
    match kind {
        ExerciseKind::Cardio => CARDIO_RATE,
        ExerciseKind::Strength => STRENGTH_RATE,
    }
}

/// Calories burned by `duration_minutes` of `kind`
pub fn calories_for(kind: ExerciseKind, duration_minutes: i32) -> f64 {
    f64::from(duration_minutes) * rate(kind)
}

impl ExerciseKind {
    /// Map the console menu selector (1 = Cardio, 2 = Strength)
    ///
    /// Any other value selects nothing.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(ExerciseKind::Cardio),
            2 => Some(ExerciseKind::Strength),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Cardio => "Cardio",
            ExerciseKind::Strength => "Strength",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(ExerciseKind::Cardio),
            "strength" => Ok(ExerciseKind::Strength),
            other => Err(Error::InvalidInput(format!(
                "unknown exercise kind '{}' (expected cardio or strength)",
                other
            ))),
        }
    }
}

impl FromStr for ExerciseEntry {
    type Err = Error;

    /// Parse `kind:minutes`, e.g. `cardio:30` or `strength:-5`
    fn from_str(s: &str) -> Result<Self> {
        let (kind, minutes) = s.split_once(':').ok_or_else(|| {
            Error::InvalidInput(format!("expected kind:minutes, got '{}'", s))
        })?;

        let kind = kind.parse()?;
        let duration_minutes = minutes.trim().parse::<i32>().map_err(|e| {
            Error::InvalidInput(format!("invalid duration '{}': {}", minutes.trim(), e))
        })?;

        Ok(ExerciseEntry {
            kind,
            duration_minutes,
        })
    }
}

impl ExerciseRecord {
    /// Create a record, computing its calories immediately
    pub fn new(kind: ExerciseKind, duration_minutes: i32) -> Self {
        let calories_burned = calories_for(kind, duration_minutes);
        tracing::debug!(
            "Created {} record: {} min, {} kcal",
            kind,
            duration_minutes,
            calories_burned
        );

        Self {
            kind,
            duration_minutes,
            calories_burned,
            logged_at: Utc::now(),
        }
    }
}

impl From<ExerciseEntry> for ExerciseRecord {
    fn from(entry: ExerciseEntry) -> Self {
        ExerciseRecord::new(entry.kind, entry.duration_minutes)
    }
}

impl Tier {
    /// Factor applied to the base calorie total
    pub const fn multiplier(self) -> f64 {
        match self {
            Tier::Standard => 1.0,
            Tier::Premium => PREMIUM_MULTIPLIER,
        }
    }

    pub fn is_premium(self) -> bool {
        self == Tier::Premium
    }
}
