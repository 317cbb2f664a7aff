//! Profiles: a person and the exercises they have logged.
//!
//! A profile owns its exercise records and computes totals from them.
//! Premium profiles are the same shape with [`Tier::Premium`], which
//! multiplies the calorie total by [`crate::policy::PREMIUM_MULTIPLIER`].
//!
//! Every profile is registered with a [`Registry`] for as long as it lives.

use crate::registry::{self, Registration, Registry};
use crate::{ExerciseKind, ExerciseRecord, ProfileDetails, ProgressReport, ReportLine, Tier};
use uuid::Uuid;

/// A tracked individual with accumulated exercise records
#[derive(Debug)]
pub struct Profile {
    id: Uuid,
    name: String,
    age: i32,
    weight_kg: f64,
    height_cm: f64,
    tier: Tier,
    records: Vec<ExerciseRecord>,
    registration: Registration,
}

impl Profile {
    /// Create a standard profile registered with the global registry
    pub fn new(details: ProfileDetails) -> Self {
        Self::with_tier(details, Tier::Standard)
    }

    /// Create a premium profile registered with the global registry
    pub fn premium(details: ProfileDetails) -> Self {
        Self::with_tier(details, Tier::Premium)
    }

    pub fn with_tier(details: ProfileDetails, tier: Tier) -> Self {
        Self::registered_with(details, tier, registry::global())
    }

    /// Create a profile counted by `registry` instead of the global one
    pub fn registered_with(details: ProfileDetails, tier: Tier, registry: &'static Registry) -> Self {
        let ProfileDetails {
            name,
            age,
            weight_kg,
            height_cm,
        } = details;

        let id = Uuid::new_v4();
        tracing::debug!("Creating {:?} profile {} ({})", tier, name, id);

        Self {
            id,
            name,
            age,
            weight_kg,
            height_cm,
            tier,
            records: Vec::new(),
            registration: registry.register(),
        }
    }

    // ------------------------------------------------------------------------
    // Fluent updates
    // ------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_age(&mut self, age: i32) -> &mut Self {
        self.age = age;
        self
    }

    pub fn set_weight(&mut self, weight_kg: f64) -> &mut Self {
        self.weight_kg = weight_kg;
        self
    }

    pub fn set_height(&mut self, height_cm: f64) -> &mut Self {
        self.height_cm = height_cm;
        self
    }

    // ------------------------------------------------------------------------
    // Exercise accounting
    // ------------------------------------------------------------------------

    /// Log an exercise, computing its calories now
    pub fn add_exercise(&mut self, kind: ExerciseKind, duration_minutes: i32) -> &ExerciseRecord {
        self.push_record(ExerciseRecord::new(kind, duration_minutes))
    }

    /// Append an already-built record
    pub fn push_record(&mut self, record: ExerciseRecord) -> &ExerciseRecord {
        self.records.push(record);
        let index = self.records.len() - 1;
        &self.records[index]
    }

    /// Sum of record calories, before any tier multiplier
    pub fn base_calories_burned(&self) -> f64 {
        self.records.iter().map(ExerciseRecord::calories_burned).sum()
    }

    /// Total calories burned, including the tier multiplier
    pub fn total_calories_burned(&self) -> f64 {
        self.base_calories_burned() * self.tier.multiplier()
    }

    /// Snapshot of this profile's progress, records in logging order
    pub fn describe(&self) -> ProgressReport {
        ProgressReport {
            tier: self.tier,
            name: self.name.clone(),
            total_calories: self.total_calories_burned(),
            records: self
                .records
                .iter()
                .map(|r| ReportLine {
                    kind: r.kind(),
                    duration_minutes: r.duration_minutes(),
                    calories_burned: r.calories_burned(),
                })
                .collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn is_premium(&self) -> bool {
        self.tier.is_premium()
    }

    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    /// Registry this profile is counted in
    pub fn registry(&self) -> &'static Registry {
        self.registration.registry()
    }
}
