mod prompt;
mod session;

use clap::{Parser, Subcommand};
use fitlog_core::*;
use prompt::Prompter;
use session::SessionOptions;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(about = "Exercise log and calorie tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Report format (text, json); overrides the config file.
    /// With json, interactive prompts go to stderr so stdout holds only JSON
    #[arg(long, global = true)]
    format: Option<ReportFormat>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log exercises for several users and report their totals (default)
    Track {
        /// Do not ask whether each user is premium
        #[arg(long)]
        no_premium_prompt: bool,
    },

    /// Log exercises for a single user
    Solo,

    /// Report on exercises given as arguments, without prompting
    Quick {
        /// Display name
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        age: i32,

        /// Weight in kg
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        weight: f64,

        /// Height in cm
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        height: f64,

        /// Apply the premium calorie multiplier
        #[arg(long)]
        premium: bool,

        /// Exercise as kind:minutes (e.g. cardio:30), repeatable
        #[arg(short, long = "exercise", value_name = "KIND:MINUTES")]
        exercises: Vec<ExerciseEntry>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitlog_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.report.format);

    match cli.command {
        Some(Commands::Track { no_premium_prompt }) => {
            cmd_track(&config, format, !no_premium_prompt)
        }
        Some(Commands::Solo) => cmd_solo(format),
        Some(Commands::Quick {
            name,
            age,
            weight,
            height,
            premium,
            exercises,
        }) => {
            let details = ProfileDetails {
                name,
                age,
                weight_kg: weight,
                height_cm: height,
            };
            let tier = if premium { Tier::Premium } else { Tier::Standard };
            cmd_quick(details, tier, &exercises, format)
        }
        None => {
            // Default to "track" command
            cmd_track(&config, format, true)
        }
    }
}

fn cmd_track(config: &Config, format: ReportFormat, ask_premium: bool) -> Result<()> {
    let options = SessionOptions {
        format,
        ask_premium: ask_premium && config.prompt.ask_premium,
        show_live_count: config.report.show_live_count,
        ..SessionOptions::default()
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), prompt_writer(format));
    session::run_track(&mut prompter, &mut io::stdout(), &options)
}

fn cmd_solo(format: ReportFormat) -> Result<()> {
    let options = SessionOptions {
        format,
        ..SessionOptions::default()
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), prompt_writer(format));
    session::run_solo(&mut prompter, &mut io::stdout(), &options)
}

/// Where interactive prompts are written for a given report format
fn prompt_writer(format: ReportFormat) -> Box<dyn Write> {
    match format {
        ReportFormat::Text => Box::new(io::stdout()),
        ReportFormat::Json => Box::new(io::stderr()),
    }
}

fn cmd_quick(
    details: ProfileDetails,
    tier: Tier,
    exercises: &[ExerciseEntry],
    format: ReportFormat,
) -> Result<()> {
    let mut profile = Profile::with_tier(details, tier);
    for entry in exercises {
        profile.push_record(ExerciseRecord::from(*entry));
    }

    println!("{}", profile.describe().render(format)?);
    Ok(())
}
