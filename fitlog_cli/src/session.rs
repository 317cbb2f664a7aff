//! Interactive logging sessions.
//!
//! `run_track` walks several users through profile creation and exercise
//! logging, prints a report for each, then the live profile count.
//! `run_solo` does the same for one user without the registry line.
//!
//! Prompts go through the [`Prompter`]; reports are written to a separate
//! `out` writer so a JSON report can stay on its own stream.

use crate::prompt::Prompter;
use fitlog_core::registry::{self, Registry};
use fitlog_core::{
    ExerciseKind, Profile, ProfileDetails, ReportFormat, Result, Roster, SessionSummary, Tier,
};
use std::io::{BufRead, Write};

/// Knobs for an interactive session
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    pub format: ReportFormat,
    pub ask_premium: bool,
    pub show_live_count: bool,
    pub registry: &'static Registry,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            ask_premium: true,
            show_live_count: true,
            registry: registry::global(),
        }
    }
}

/// Multi-user session
pub fn run_track<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    out: &mut O,
    options: &SessionOptions,
) -> Result<()> {
    let requested = prompter.number::<i64>("Enter the number of users: ")?;
    let requested = usize::try_from(requested).unwrap_or(0);

    let mut roster = Roster::new();
    for i in 1..=requested {
        if prompter.is_exhausted() {
            tracing::warn!(
                "Input ended after {} of {} users",
                roster.len(),
                requested
            );
            break;
        }

        prompter.say("")?;
        prompter.say(&format!("Enter details for User {}", i))?;
        let name = prompter.word("Enter your name: ")?;
        let details = read_body_details(prompter, name)?;

        let tier = if options.ask_premium && prompter.yes("Is this user premium? (y/n): ")? {
            Tier::Premium
        } else {
            Tier::Standard
        };

        let profile = roster.enroll(Profile::registered_with(details, tier, options.registry));
        log_exercises(prompter, profile)?;
    }

    match options.format {
        ReportFormat::Text => {
            for (i, profile) in roster.drain().enumerate() {
                writeln!(out)?;
                writeln!(out, "Progress for User {}", i + 1)?;
                writeln!(out, "{}", profile.describe().render(ReportFormat::Text)?)?;
            }

            if options.show_live_count {
                writeln!(out)?;
                writeln!(
                    out,
                    "Total number of users at the end: {}",
                    options.registry.count()
                )?;
            }
        }
        ReportFormat::Json => {
            let profiles = roster.drain().map(|p| p.describe()).collect();
            let summary = SessionSummary {
                profiles,
                live_profiles: options.registry.count(),
            };
            writeln!(out, "{}", summary.to_json()?)?;
        }
    }

    Ok(())
}

/// Single-user session
pub fn run_solo<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    out: &mut O,
    options: &SessionOptions,
) -> Result<()> {
    let name = prompter.text("Enter your name: ")?;
    let details = read_body_details(prompter, name)?;

    let mut profile = Profile::registered_with(details, Tier::Standard, options.registry);
    log_exercises(prompter, &mut profile)?;

    writeln!(out, "{}", profile.describe().render(options.format)?)?;
    Ok(())
}

fn read_body_details<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: String,
) -> Result<ProfileDetails> {
    let age = prompter.number("Enter your age: ")?;
    let weight_kg = prompter.number("Enter your weight (in kg): ")?;
    let height_cm = prompter.number("Enter your height (in cm): ")?;

    Ok(ProfileDetails {
        name,
        age,
        weight_kg,
        height_cm,
    })
}

/// Exercise loop: selector, duration, then "another?" until the answer is not yes
fn log_exercises<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    profile: &mut Profile,
) -> Result<()> {
    loop {
        let selector = prompter.number::<i64>("Log an exercise (1 for Cardio, 2 for Strength): ")?;
        let duration = prompter.number::<i32>("Enter duration (in minutes): ")?;

        match ExerciseKind::from_selector(selector) {
            Some(kind) => {
                profile.add_exercise(kind, duration);
            }
            None => tracing::warn!("Unknown exercise type {}, nothing logged", selector),
        }

        if !prompter.yes("Do you want to log another exercise? (y/n): ")? {
            return Ok(());
        }
    }
}
