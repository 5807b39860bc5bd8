// ABOUTME: nutriplan CLI - generate and audit multi-day Indian nutrition plans
// ABOUTME: Builds a profile from flags or a JSON file and prints the plan as JSON or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
//!
//! Usage:
//! ```bash
//! # Full 75-day plan as JSON
//! nutriplan generate --preference jain --gender female --weight 58 --goal weight-loss --region north
//!
//! # One day, human readable
//! nutriplan generate --preference vegan --gender male --weight 72 --goal muscle-gain \
//!     --allergies "dairy, peanuts" --format text --day 16
//!
//! # Profile from a file
//! nutriplan generate --profile profile.json
//!
//! # Same-day repeat and variety report
//! nutriplan audit --preference non-vegetarian --gender male --weight 80 --goal endurance
//! ```

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nutriplan::config::PlannerConfig;
use nutriplan::diet::{DietPlanGenerator, PlanAudit};
use nutriplan::errors::{AppError, AppResult};
use nutriplan::logging::{LoggingConfig, PlanLogger};
use nutriplan::models::{
    DayPlan, DietaryPreference, ExerciseFrequency, FitnessGoal, Gender, Region, UserProfile,
    WellnessGoal,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "nutriplan",
    about = "Deterministic multi-day Indian nutrition plan generator",
    long_about = "Generates a five-meal-per-day nutrition plan from a user profile and audits it for same-day food repeats."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a plan and print it
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Print only this day (1-based)
        #[arg(long)]
        day: Option<u32>,
    },

    /// Generate a plan and report same-day repeats and variety
    Audit {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
struct ProfileArgs {
    /// Read the profile from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["preference", "gender", "weight", "goal"])]
    profile: Option<PathBuf>,

    /// Dietary preference (vegetarian, eggetarian, non-vegetarian, vegan, jain)
    #[arg(long)]
    preference: Option<String>,

    /// Gender (male, female)
    #[arg(long)]
    gender: Option<String>,

    /// Body weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Fitness goal (weight-loss, muscle-gain, endurance, maintenance)
    #[arg(long)]
    goal: Option<String>,

    /// Regional cuisine (north, south, east, west)
    #[arg(long)]
    region: Option<String>,

    /// Comma-separated allergy terms
    #[arg(long, default_value = "")]
    allergies: String,

    /// Comma-separated wellness goals
    #[arg(long, value_delimiter = ',')]
    wellness: Vec<String>,

    /// Exercise frequency (sedentary, light, moderate, active)
    #[arg(long)]
    exercise: Option<String>,

    /// First plan day as YYYY-MM-DD
    #[arg(long)]
    start_date: Option<String>,
}

impl ProfileArgs {
    fn into_profile(mut self) -> AppResult<UserProfile> {
        let profile = match self.profile.take() {
            Some(path) => read_profile(&path)?,
            None => self.profile_from_flags()?,
        };
        profile.validate()?;
        Ok(profile)
    }

    fn profile_from_flags(self) -> AppResult<UserProfile> {
        let preference: DietaryPreference = required(self.preference, "preference")?.parse()?;
        let gender: Gender = required(self.gender, "gender")?.parse()?;
        let weight = self.weight.ok_or_else(|| AppError::missing_field("weight"))?;
        let goal: FitnessGoal = required(self.goal, "goal")?.parse()?;

        let mut profile =
            UserProfile::new(preference, gender, weight, goal).with_allergies(&self.allergies);
        if let Some(region) = self.region {
            profile = profile.with_region(region.parse::<Region>()?);
        }
        let wellness = self
            .wellness
            .iter()
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.parse::<WellnessGoal>())
            .collect::<AppResult<Vec<_>>>()?;
        profile = profile.with_wellness_goals(wellness);
        if let Some(exercise) = self.exercise {
            profile = profile.with_exercise_frequency(exercise.parse::<ExerciseFrequency>()?);
        }
        if let Some(start) = self.start_date {
            let date = NaiveDate::parse_from_str(&start, "%Y-%m-%d").map_err(|e| {
                AppError::invalid_input(format!("Invalid start date '{start}': {e}")).with_source(e)
            })?;
            profile = profile.with_start_date(date);
        }
        Ok(profile)
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::missing_field(field))
}

fn read_profile(path: &Path) -> AppResult<UserProfile> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read profile {}: {e}", path.display()))
            .with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e);
            eprintln!("error: {e}");
            ExitCode::from(e.code.exit_code() as u8)
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = PlannerConfig::load()?;
    info!(
        plan_days = config.plan_days,
        cycle_days = config.cycle_days,
        "Planner configuration loaded"
    );
    let generator = DietPlanGenerator::new(config);

    match command {
        Command::Generate {
            profile,
            format,
            day,
        } => {
            let profile = profile.into_profile()?;
            let plan = generate(&generator, &profile);
            let selected = select_days(&plan, day)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(selected)?),
                OutputFormat::Text => selected.iter().for_each(print_day),
            }
        }
        Command::Audit { profile } => {
            let profile = profile.into_profile()?;
            let plan = generate(&generator, &profile);
            let audit = PlanAudit::run(generator.index(), &plan);
            PlanLogger::log_audit(
                audit.days,
                audit.same_day_repeats.len(),
                audit.distinct_identities,
            );
            println!("{}", serde_json::to_string_pretty(&audit)?);
        }
    }
    Ok(())
}

fn generate(generator: &DietPlanGenerator, profile: &UserProfile) -> Vec<DayPlan> {
    let started = Instant::now();
    let plan = generator.generate(profile);
    PlanLogger::log_plan_generated(profile, plan.len(), started.elapsed().as_millis() as u64);
    plan
}

fn select_days(plan: &[DayPlan], day: Option<u32>) -> AppResult<&[DayPlan]> {
    let Some(day) = day else {
        return Ok(plan);
    };
    (day as usize)
        .checked_sub(1)
        .and_then(|i| plan.get(i..=i))
        .ok_or_else(|| {
            AppError::out_of_range(format!("Day {day} is outside 1..={}", plan.len()))
        })
}

fn print_day(day: &DayPlan) {
    let date = day.date.map(|d| format!(" ({d})")).unwrap_or_default();
    println!(
        "Day {}{date}: ~{} kcal, {:.2} L water",
        day.day, day.calories_kcal, day.water_liters
    );
    for (slot, meal) in day.meals() {
        println!("  {slot}: {meal}");
    }
    for note in &day.wellness_notes {
        println!("  - {note}");
    }
    println!();
}
