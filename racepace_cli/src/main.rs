use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use racepace_core::units::{format_distance, format_duration};
use racepace_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "racepace")]
#[command(about = "Marathon training plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dated training plan
    Generate {
        /// Race date (YYYY-MM-DD)
        #[arg(long)]
        race_date: Option<NaiveDate>,

        /// First day of training (YYYY-MM-DD); defaults to the configured plan length
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Goal finish time (H:MM:SS)
        #[arg(long)]
        goal: Option<String>,

        /// Training days, Monday = 1 (e.g. 1,3,6)
        #[arg(long, value_delimiter = ',')]
        days: Vec<DayOfWeek>,

        /// Preferred rest days, Monday = 1
        #[arg(long, value_delimiter = ',')]
        rest_days: Option<Vec<DayOfWeek>>,

        /// Treat preferred rest days as hard constraints
        #[arg(long)]
        enforce_rest_days: bool,

        /// Display distance unit
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,

        /// Display pace format
        #[arg(long, value_enum)]
        pace_format: Option<PaceFormatArg>,

        /// Read the plan configuration from a JSON or TOML file
        #[arg(long, conflicts_with_all = ["race_date", "start_date", "goal", "days"])]
        plan_file: Option<PathBuf>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show training paces for a goal time
    Paces {
        /// Goal finish time (H:MM:SS)
        #[arg(long)]
        goal: String,

        /// Display distance unit
        #[arg(long, value_enum)]
        unit: Option<UnitArg>,

        /// Display pace format
        #[arg(long, value_enum)]
        pace_format: Option<PaceFormatArg>,
    },

    /// Check training days against preferred rest days
    RestDays {
        /// Training days, Monday = 1
        #[arg(long, value_delimiter = ',', required = true)]
        days: Vec<DayOfWeek>,

        /// Preferred rest days, Monday = 1
        #[arg(long, value_delimiter = ',', required = true)]
        rest_days: Vec<DayOfWeek>,

        /// Treat rest days as hard constraints
        #[arg(long)]
        enforce: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Km,
    Miles,
}

impl From<UnitArg> for DistanceUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Km => DistanceUnit::Kilometers,
            UnitArg::Miles => DistanceUnit::Miles,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PaceFormatArg {
    MinSec,
    Decimal,
}

impl From<PaceFormatArg> for PaceFormat {
    fn from(format: PaceFormatArg) -> Self {
        match format {
            PaceFormatArg::MinSec => PaceFormat::MinSec,
            PaceFormatArg::Decimal => PaceFormat::Decimal,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        racepace_core::logging::init_with_level("debug");
    } else {
        racepace_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Generate {
            race_date,
            start_date,
            goal,
            days,
            rest_days,
            enforce_rest_days,
            unit,
            pace_format,
            plan_file,
            json,
        } => {
            let mut plan_config = match plan_file {
                Some(path) => load_plan_file(&path)?,
                None => plan_config_from_args(race_date, start_date, goal, days, &config)?,
            };

            // Command-line preferences override both the file and the config defaults
            let prefs = &mut plan_config.preferences;
            if let Some(unit) = unit {
                prefs.distance_unit = unit.into();
            }
            if let Some(format) = pace_format {
                prefs.pace_format = format.into();
            }
            if rest_days.is_some() {
                prefs.preferred_rest_days = rest_days;
            }
            if enforce_rest_days {
                prefs.enforce_rest_days = Some(true);
            }

            cmd_generate(&plan_config, &config, json)
        }
        Commands::Paces {
            goal,
            unit,
            pace_format,
        } => {
            let unit = unit.map(Into::into).unwrap_or(config.preferences.distance_unit);
            let format = pace_format
                .map(Into::into)
                .unwrap_or(config.preferences.pace_format);
            cmd_paces(&goal, unit, format)
        }
        Commands::RestDays {
            days,
            rest_days,
            enforce,
        } => cmd_rest_days(&days, &rest_days, enforce),
    }
}

fn plan_config_from_args(
    race_date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
    goal: Option<String>,
    days: Vec<DayOfWeek>,
    config: &Config,
) -> Result<TrainingPlanConfig> {
    let race_date = race_date
        .ok_or_else(|| Error::Config("--race-date is required without --plan-file".into()))?;
    let goal_finish_time =
        goal.ok_or_else(|| Error::Config("--goal is required without --plan-file".into()))?;
    if days.is_empty() {
        return Err(Error::Config(
            "--days is required without --plan-file".into(),
        ));
    }

    Ok(TrainingPlanConfig {
        start_date,
        race_date,
        goal_finish_time,
        workout_days_of_week: days,
        preferences: config.preferences.to_preferences(),
    })
}

fn load_plan_file(path: &Path) -> Result<TrainingPlanConfig> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let plan_config = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    tracing::info!("Loaded plan configuration from {:?}", path);
    Ok(plan_config)
}

fn cmd_generate(plan_config: &TrainingPlanConfig, config: &Config, json: bool) -> Result<()> {
    let scheduler = TrainingScheduler::new(config.scheduler_settings());
    let plan = scheduler.generate(plan_config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    display_plan(&plan, plan_config);
    Ok(())
}

fn display_plan(plan: &ScheduledTrainingPlan, plan_config: &TrainingPlanConfig) {
    let unit = plan_config.preferences.distance_unit;
    let format = plan_config.preferences.pace_format;
    let planner = PeriodizationPlanner::new(plan.total_weeks);
    let weekly = plan.weekly_distance_km();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  MARATHON PLAN · {} WEEKS", plan.total_weeks);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} → {}", plan.start_date, plan.end_date);
    println!("  Goal: {}", plan_config.goal_finish_time);
    println!(
        "  Total: {}",
        format_distance(plan.total_distance_km(), unit)
    );

    for week in 1..=plan.total_weeks {
        let volume = weekly.get(week as usize - 1).copied().unwrap_or(0.0);
        println!();
        println!(
            "  Week {} ({}) · {}",
            week,
            planner.phase_for(week),
            format_distance(volume, unit)
        );

        for workout in plan.workouts_for_week(week) {
            println!(
                "    {}  {:<13} {:>8}  {:>7}  {}",
                workout.scheduled_date.format("%a %Y-%m-%d"),
                workout.name,
                format_distance(workout.distance_km, unit),
                format_duration(workout.duration_minutes),
                workout.target_pace.format(unit, format)
            );
        }
    }

    println!();
}

fn cmd_paces(goal: &str, unit: DistanceUnit, format: PaceFormat) -> Result<()> {
    let paces = PaceTable::from_goal_time(goal)?;

    println!("Training paces for a {} marathon", goal);
    println!("  Interval  {}", paces.interval.format(unit, format));
    println!("  Tempo     {}", paces.tempo.format(unit, format));
    println!("  Marathon  {}", paces.marathon.format(unit, format));
    println!("  Long run  {}", paces.long_run().format(unit, format));
    println!("  Easy      {}", paces.easy.format(unit, format));
    println!("  Recovery  {}", paces.recovery.format(unit, format));
    Ok(())
}

fn cmd_rest_days(days: &[DayOfWeek], rest_days: &[DayOfWeek], enforce: bool) -> Result<()> {
    racepace_core::scheduler::validate_days(days, rest_days)?;
    let analysis = racepace_core::rest_days::validate(days, rest_days, enforce);

    if analysis.conflicts.is_empty() {
        println!("✓ No conflicts between training days {:?} and rest days {:?}", days, rest_days);
        return Ok(());
    }

    if analysis.is_valid {
        println!("⚠ Training on preferred rest days: {:?}", analysis.conflicts);
    } else {
        println!("✗ Conflicts with enforced rest days: {:?}", analysis.conflicts);
    }

    if analysis.suggestions.is_empty() {
        println!("  No alternative day set available.");
    } else {
        println!("  Suggested alternatives:");
        for suggestion in &analysis.suggestions {
            println!("    {:?}", suggestion);
        }
    }

    Ok(())
}
