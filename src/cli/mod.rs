//! CLI subcommands: init, validate, detect, plan, catalog, schema, show.

use crate::core::{catalog, normalizer, parser, planner, state, types};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new gym profile
    Init {
        /// Directory to initialize (default: current)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate gym.yaml
    Validate {
        /// Path to gym.yaml
        #[arg(short, long, default_value = "gym.yaml")]
        file: PathBuf,
    },

    /// Decode an equipment detection response into canonical ids
    Detect {
        /// Detection response JSON
        file: PathBuf,
    },

    /// Build a workout plan (templates, or a validated external plan)
    Plan {
        /// Path to gym.yaml
        #[arg(short, long, default_value = "gym.yaml")]
        file: PathBuf,

        /// External plan generator response JSON
        #[arg(short, long)]
        external: Option<PathBuf>,

        /// Override the profile goal
        #[arg(short, long)]
        goal: Option<types::Goal>,

        /// Override the profile training context
        #[arg(short, long)]
        context: Option<types::TrainingContext>,

        /// Use the sample commercial gym instead of the profile equipment
        #[arg(long)]
        sample_gym: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Save the plan as the current session
        #[arg(long)]
        save: bool,

        /// State directory
        #[arg(long, default_value = "state")]
        state_dir: PathBuf,
    },

    /// List canonical equipment ids and their aliases
    Catalog,

    /// Print the JSON Schema external responses must satisfy
    Schema {
        /// Print the detection schema instead of the plan schema
        #[arg(long)]
        detection: bool,
    },

    /// Show the saved session
    Show {
        /// State directory
        #[arg(long, default_value = "state")]
        state_dir: PathBuf,

        /// Remove the saved session instead of printing it
        #[arg(long)]
        clear: bool,
    },
}

/// Options for `plan`, gathered from the command line.
#[derive(Debug, Clone)]
pub struct PlanArgs<'a> {
    pub file: &'a Path,
    pub external: Option<&'a Path>,
    pub goal: Option<types::Goal>,
    pub context: Option<types::TrainingContext>,
    pub sample_gym: bool,
    pub json: bool,
    pub save: bool,
    pub state_dir: &'a Path,
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Init { path } => cmd_init(&path),
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Detect { file } => cmd_detect(&file),
        Commands::Plan {
            file,
            external,
            goal,
            context,
            sample_gym,
            json,
            save,
            state_dir,
        } => cmd_plan(&PlanArgs {
            file: &file,
            external: external.as_deref(),
            goal,
            context,
            sample_gym,
            json,
            save,
            state_dir: &state_dir,
        }),
        Commands::Catalog => cmd_catalog(),
        Commands::Schema { detection } => cmd_schema(detection),
        Commands::Show { state_dir, clear } => cmd_show(&state_dir, clear),
    }
}

fn cmd_init(path: &Path) -> Result<(), String> {
    let profile_path = path.join("gym.yaml");
    if profile_path.exists() {
        return Err(format!("{} already exists", profile_path.display()));
    }
    std::fs::create_dir_all(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))?;

    let template = r#"version: "1.0"
name: my-gym

# strength | hypertrophy | fatLoss | endurance | mobility
goal: strength

# gym | home
context: gym

# Canonical ids or common names; run `liftplan catalog` for the full list
equipments:
  - barbell
  - squat rack
  - flat bench
  - dumbbells

photo_identifiers: []
"#;
    std::fs::write(&profile_path, template)
        .map_err(|e| format!("cannot write {}: {}", profile_path.display(), e))?;

    println!("Initialized gym profile at {}", path.display());
    println!("  Created: {}", profile_path.display());
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let profile = parser::parse_profile_file(file).map_err(|e| e.to_string())?;
    let findings = parser::validate_profile(&profile);
    let errors = report_findings(&findings);

    if errors == 0 {
        println!(
            "OK: {} ({}, {}, {} equipment)",
            profile.name.as_deref().unwrap_or("unnamed"),
            profile.goal,
            profile.context,
            profile.equipment().len()
        );
        Ok(())
    } else {
        Err(format!("{} validation error(s)", errors))
    }
}

/// Print profile findings to stderr. Returns the number of hard errors.
fn report_findings(findings: &[parser::ValidationError]) -> usize {
    for f in findings {
        let tag = match f.severity {
            parser::Severity::Warning => "WARN",
            parser::Severity::Error => "ERROR",
        };
        eprintln!("  {}: {}", tag, f);
    }
    findings.iter().filter(|f| f.is_error()).count()
}

/// Parse and validate a gym profile. Warnings are printed but do not fail.
fn parse_and_validate(file: &Path) -> Result<types::GymProfile, String> {
    let profile = parser::parse_profile_file(file).map_err(|e| e.to_string())?;
    let findings = parser::validate_profile(&profile);
    if report_findings(&findings) == 0 {
        return Ok(profile);
    }
    Err("validation failed".to_string())
}

fn cmd_detect(file: &Path) -> Result<(), String> {
    let equipment = parser::parse_detection_file(file).map_err(|e| e.to_string())?;
    if equipment.is_empty() {
        println!("No recognized equipment.");
        return Ok(());
    }
    for eq in &equipment {
        println!("{}", eq);
    }
    Ok(())
}

fn cmd_plan(args: &PlanArgs<'_>) -> Result<(), String> {
    let profile = parse_and_validate(args.file)?;
    let goal = args.goal.unwrap_or(profile.goal);
    let context = args.context.unwrap_or(profile.context);
    let equipment: types::EquipmentSet = if args.sample_gym {
        catalog::sample_gym().into_iter().collect()
    } else {
        profile.equipment()
    };

    let body = match args.external {
        Some(path) => Some(
            std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?,
        ),
        None => None,
    };

    let resolution = planner::resolve_plan(goal, context, &equipment, body.as_deref())
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&resolution.plan)
            .map_err(|e| format!("serialize error: {}", e))?;
        println!("{}", json);
    } else {
        print_plan(&resolution);
    }

    if args.save {
        let session = state::new_session(&resolution.plan, context, &equipment);
        let path = state::save_session(args.state_dir, &session).map_err(|e| e.to_string())?;
        eprintln!("Saved session to {}", path.display());
    }
    Ok(())
}

/// Display a resolved plan to stdout.
fn print_plan(resolution: &planner::Resolution) {
    println!("Plan: {} [{}]", resolution.plan.goal, resolution.source);
    println!();
    print_workouts(&resolution.plan.workouts);
    println!("{}", planner::describe(resolution));
}

fn print_workouts(workouts: &[types::Workout]) {
    for w in workouts {
        println!("{} (~{} min)", w.title, w.est_minutes);
        if w.blocks.is_empty() {
            println!("  (no movements available)");
        }
        for (i, block) in w.blocks.iter().enumerate() {
            for (j, m) in block.movements().iter().enumerate() {
                let label = if block.is_superset() {
                    format!("{}{}", i + 1, (b'a' + (j % 26) as u8) as char)
                } else {
                    format!("{}", i + 1)
                };
                println!("  {:>3}. {}", label, format_movement(m));
            }
        }
        println!();
    }
}

fn format_movement(m: &types::Movement) -> String {
    let mut line = m.name.clone();
    match (m.sets, m.reps) {
        (Some(s), Some(r)) => line.push_str(&format!(" {}x{}", s, r)),
        (Some(s), None) => line.push_str(&format!(" {} sets", s)),
        (None, Some(r)) => line.push_str(&format!(" {} reps", r)),
        (None, None) => {}
    }
    if let Some(tempo) = &m.tempo {
        line.push_str(&format!(" @{}", tempo));
    }
    let equipment = m
        .equipment
        .map(|e| e.to_string())
        .unwrap_or_else(|| "bodyweight".to_string());
    line.push_str(&format!(" [{}; {}]", m.primary, equipment));
    line
}

fn cmd_catalog() -> Result<(), String> {
    for eq in catalog::Equipment::ALL {
        let aliases: Vec<_> = normalizer::aliases_for(eq)
            .into_iter()
            .filter(|a| *a != eq.as_str().to_lowercase())
            .collect();
        println!("{:<16} {}", eq.as_str(), aliases.join(", "));
    }
    Ok(())
}

fn cmd_schema(detection: bool) -> Result<(), String> {
    let schema = if detection {
        parser::detection_response_schema()
    } else {
        parser::plan_response_schema()
    };
    let json =
        serde_json::to_string_pretty(&schema).map_err(|e| format!("serialize error: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn cmd_show(state_dir: &Path, clear: bool) -> Result<(), String> {
    if clear {
        state::clear_session(state_dir).map_err(|e| e.to_string())?;
        println!("Cleared saved session.");
        return Ok(());
    }

    match state::load_session(state_dir).map_err(|e| e.to_string())? {
        Some(session) => {
            println!("Session: {} [{}]", session.goal, session.context);
            println!("  Saved: {}", session.saved_at.to_rfc3339());
            let equipment: Vec<String> = session.equipments.iter().map(|e| e.to_string()).collect();
            println!("  Equipment: {}", equipment.join(", "));
            println!();
            print_workouts(&session.workouts);
        }
        None => println!("No saved session in {}.", state_dir.display()),
    }
    Ok(())
}
