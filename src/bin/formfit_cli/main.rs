// ABOUTME: FormFit CLI - progressive overload tracker, diet planner, and image studio
// ABOUTME: Parses commands, loads configuration, and dispatches to command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Save your profile
//! formfit onboard --name Sam --height-cm 178 --weight-kg 80 --experience-years 2
//!
//! # Today's plan with per-exercise targets
//! formfit dashboard
//!
//! # Log a set and get a form tip if it was a grind
//! formfit log squat --weight 62.5 --reps 8 --rpe 9
//!
//! # Generate today's meals
//! formfit diet --goal fat-loss
//!
//! # Check storage and the Gemini connection
//! formfit status
//!
//! # Edit a progress photo
//! formfit edit-image before.jpg --prompt "add a retro filter" --output after.png
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use formfit::config::{AppConfig, StorageBackend};
use formfit::context::FormFitContext;
use formfit::logging::LoggingConfig;
use formfit::services::FormIssue;
use formfit_core::errors::AppResult;
use formfit_core::models::{Allergy, DietGoal, DietType, MuscleGroup, TrainingDay};
use tracing::error;

use commands::profile::OnboardArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "formfit",
    version,
    about = "Progressive overload training tracker",
    long_about = "Computes per-exercise workout targets from your last session, tracks progress, and generates diet plans, form tips and photo edits with Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (`memory` for a throwaway session)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create or update your profile
    Onboard {
        /// Display name
        #[arg(long)]
        name: String,

        /// Height in centimeters
        #[arg(long, default_value = "180")]
        height_cm: f64,

        /// Body weight in kilograms
        #[arg(long, default_value = "75")]
        weight_kg: f64,

        /// Years of lifting experience
        #[arg(long, default_value = "0")]
        experience_years: f64,

        /// Diet: vegetarian, non-vegetarian or vegan
        #[arg(long, default_value = "vegetarian")]
        diet: DietType,

        /// Allergy: none, peanuts, dairy or gluten
        #[arg(long, default_value = "none")]
        allergy: Allergy,
    },

    /// Level, protein goal, and today's plan with targets
    Dashboard,

    /// List the exercise catalog
    Exercises {
        /// Only this muscle group: legs, push or pull
        #[arg(long)]
        group: Option<MuscleGroup>,
    },

    /// Show the next target for an exercise
    Target {
        /// Exercise id (see `formfit exercises`)
        exercise_id: String,
    },

    /// Record a completed set
    Log {
        /// Exercise id
        exercise_id: String,

        /// Load used in kilograms
        #[arg(long)]
        weight: f64,

        /// Reps completed
        #[arg(long)]
        reps: u32,

        /// Rating of perceived exertion (1-10)
        #[arg(long)]
        rpe: f64,
    },

    /// Show logged sessions for an exercise, newest first
    History {
        /// Exercise id
        exercise_id: String,
    },

    /// Show the load progression for an exercise
    Progress {
        /// Exercise id
        exercise_id: String,
    },

    /// Workout plan management
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Generate a daily diet plan
    Diet {
        /// Goal: muscle-gain, fat-loss or maintenance
        #[arg(long, default_value = "muscle-gain")]
        goal: DietGoal,
    },

    /// Get a corrective form tip
    Tip {
        /// Exercise id
        exercise_id: String,

        /// Issue: failed-reps or high-rpe
        #[arg(long)]
        issue: FormIssue,
    },

    /// Edit an image with a text prompt
    EditImage {
        /// Input image (png, jpg, webp, gif or heic)
        input: PathBuf,

        /// Edit instruction, e.g. "add a retro filter"
        #[arg(long)]
        prompt: String,

        /// Output path (defaults to `<input>-edited.<ext>`)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show storage location and AI provider status
    Status,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// List saved plans (defaults if none were saved)
    List,

    /// Create or replace a plan
    Save {
        /// Plan id (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Display name
        #[arg(long)]
        name: String,

        /// Scheduled day, e.g. monday
        #[arg(long)]
        day: Option<TrainingDay>,

        /// Comma-separated exercise ids in session order
        #[arg(long, value_delimiter = ',', required = true)]
        exercises: Vec<String>,
    },

    /// Delete a plan
    Delete {
        /// Plan id
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(location) = cli.data_dir.as_deref() {
        config = config.with_storage(StorageBackend::parse_url(location)?);
    }
    let ctx = FormFitContext::from_config(&config)?;

    match cli.command {
        Command::Onboard {
            name,
            height_cm,
            weight_kg,
            experience_years,
            diet,
            allergy,
        } => commands::profile::onboard(
            &ctx,
            OnboardArgs {
                name,
                height_cm,
                weight_kg,
                experience_years,
                diet,
                allergy,
            },
        ),
        Command::Dashboard => commands::profile::dashboard(&ctx),
        Command::Exercises { group } => {
            commands::training::exercises(group);
            Ok(())
        }
        Command::Target { exercise_id } => commands::training::target(&ctx, &exercise_id),
        Command::Log {
            exercise_id,
            weight,
            reps,
            rpe,
        } => commands::training::log(&ctx, &exercise_id, weight, reps, rpe).await,
        Command::History { exercise_id } => commands::training::history(&ctx, &exercise_id),
        Command::Progress { exercise_id } => commands::training::progress(&ctx, &exercise_id),
        Command::Plan { action } => match action {
            PlanCommand::List => commands::plans::list(&ctx),
            PlanCommand::Save {
                id,
                name,
                day,
                exercises,
            } => commands::plans::save(&ctx, id, name, day, exercises),
            PlanCommand::Delete { id } => commands::plans::delete(&ctx, &id),
        },
        Command::Diet { goal } => commands::diet::daily_plan(&ctx, goal).await,
        Command::Tip { exercise_id, issue } => {
            commands::training::tip(&ctx, &exercise_id, issue).await
        }
        Command::EditImage {
            input,
            prompt,
            output,
        } => commands::image::edit(&ctx, &input, &prompt, output).await,
        Command::Status => commands::status::status(&ctx, &config).await,
    }
}
