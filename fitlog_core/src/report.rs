//! Progress report rendering.
//!
//! Reports render as the plain console text (premium profiles get a marker
//! line first) or as JSON.

use crate::policy::PREMIUM_MULTIPLIER;
use crate::{Error, ProgressReport, Result, SessionSummary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for reports
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::InvalidInput(format!(
                "unknown report format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl ProgressReport {
    /// Render in the requested format, without a trailing newline
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string().trim_end().to_string()),
            ReportFormat::Json => self.to_json(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tier.is_premium() {
            writeln!(
                f,
                "Premium User: {} ({}x calorie burn benefit)",
                self.name, PREMIUM_MULTIPLIER
            )?;
        }

        writeln!(f, "User: {}", self.name)?;
        writeln!(f, "Total Calories Burned: {}", self.total_calories)?;
        for line in &self.records {
            writeln!(
                f,
                "Exercise: {}, Duration: {} minutes, Calories Burned: {}",
                line.kind, line.duration_minutes, line.calories_burned
            )?;
        }
        Ok(())
    }
}
