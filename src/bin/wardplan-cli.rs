#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use wardplan::{
    io,
    model::{AcuityCounts, PlanRequest, SkillLevel, DEFAULT_TASKS},
    planner::{PlanError, PlanOptions, Planner},
    render::{ReportRenderer, TextReport},
    report::summarize,
    storage::{RosterStorage, TextRosterStorage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Minimal ward shift planning CLI (no database)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Enable logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Roster file, one `name,skill` line per nurse
    #[arg(long, global = true, default_value = "roster.txt")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a nurse to the roster
    AddNurse {
        #[arg(long)]
        name: String,
        /// Senior, Intermediate or Junior (anything else becomes Intermediate)
        #[arg(long, default_value = "Intermediate")]
        skill: String,
    },

    /// Replace the roster with nurses from a line-oriented file
    ImportNurses {
        #[arg(long)]
        file: String,
    },

    /// Print the roster, one `name,skill` line per nurse
    ListNurses,

    /// Remove every nurse from the roster
    ClearNurses,

    /// Export the roster to a separate file
    SaveNurses {
        #[arg(long)]
        out: String,
    },

    /// Show the 20/50/30 acuity split for a patient total
    Distribute {
        #[arg(long)]
        total: u32,
    },

    /// Check the staffing ratio without planning
    Check {
        #[arg(long)]
        patients: u32,
        #[arg(long, default_value_t = 6)]
        ratio: u32,
    },

    /// Generate the shift allocation and print the report
    Plan {
        #[arg(long)]
        patients: u32,
        #[arg(long, default_value_t = 6)]
        ratio: u32,
        /// High-acuity count; omit all three to auto-calculate from the total
        #[arg(long)]
        high: Option<u32>,
        #[arg(long)]
        moderate: Option<u32>,
        #[arg(long)]
        low: Option<u32>,
        /// Comma-separated task names (defaults to the standard task list)
        #[arg(long)]
        tasks: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Proceed even when the staffing ratio is unsafe
        #[arg(long)]
        force: bool,
        #[arg(long)]
        out_txt: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = TextRosterStorage::open(&cli.roster)?;
    let mut planner = Planner::new();
    if let Ok(roster) = storage.load() {
        *planner.roster_mut() = roster;
    }

    let code = match cli.cmd {
        Commands::AddNurse { name, skill } => {
            planner.add_nurse(&name, SkillLevel::parse_lossy(&skill))?;
            storage.save(planner.roster())?;
            0
        }
        Commands::ImportNurses { file } => {
            let nurses = io::import_nurses(file)?;
            planner.clear();
            planner.add_nurses(nurses)?;
            storage.save(planner.roster())?;
            println!("Loaded {} nurses", planner.roster().len());
            0
        }
        Commands::ListNurses => {
            for nurse in &planner.roster().nurses {
                println!("{},{}", nurse.name, nurse.skill);
            }
            0
        }
        Commands::ClearNurses => {
            planner.clear();
            storage.save(planner.roster())?;
            0
        }
        Commands::SaveNurses { out } => {
            io::export_nurses(out, &planner.roster().nurses)?;
            0
        }
        Commands::Distribute { total } => {
            let counts = wardplan::distribute_acuity(total);
            println!("High: {}", counts.high);
            println!("Moderate: {}", counts.moderate);
            println!("Low: {}", counts.low);
            0
        }
        Commands::Check { patients, ratio } => {
            let check = wardplan::validate_ratio(patients, ratio, planner.roster().len())?;
            if check.ok {
                println!(
                    "OK: staffing ratio is safe ({} nurses required, {} on duty)",
                    check.required_nurses,
                    planner.roster().len()
                );
                0
            } else {
                eprintln!(
                    "Unsafe staffing: you need at least {} nurses for a 1:{} ratio ({} on duty).",
                    check.required_nurses,
                    ratio,
                    planner.roster().len()
                );
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Plan {
            patients,
            ratio,
            high,
            moderate,
            low,
            tasks,
            notes,
            force,
            out_txt,
            out_csv,
            out_json,
        } => {
            let acuity = match (high, moderate, low) {
                (None, None, None) => wardplan::distribute_acuity(patients),
                (h, m, l) => AcuityCounts::new(h.unwrap_or(0), m.unwrap_or(0), l.unwrap_or(0)),
            };
            let tasks: Vec<String> = match tasks {
                Some(list) => list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                None => DEFAULT_TASKS.iter().map(|t| t.to_string()).collect(),
            };
            let request = PlanRequest {
                total_patients: patients,
                ratio,
                acuity,
                tasks,
                notes: notes.unwrap_or_default(),
            };

            match planner.plan(&request, PlanOptions { allow_unsafe: force }) {
                Ok(outcome) => {
                    if let Some(mismatch) = outcome.mismatch {
                        eprintln!(
                            "Warning: acuity counts sum to {} but {} patients were requested; adjusted.",
                            mismatch.declared, mismatch.requested
                        );
                    }
                    if !outcome.ratio.ok {
                        eprintln!(
                            "Warning: planning with unsafe staffing ({} nurses required).",
                            outcome.ratio.required_nurses
                        );
                    }
                    let report = summarize(&outcome.allocation, &request.notes, Utc::now());
                    let text = TextReport.render(&report);
                    print!("{text}");
                    if let Some(path) = out_txt {
                        std::fs::write(&path, &text)?;
                    }
                    if let Some(path) = out_csv {
                        io::export_report_csv(path, &report)?;
                    }
                    if let Some(path) = out_json {
                        io::export_report_json(path, &report)?;
                    }
                    0
                }
                Err(PlanError::UnsafeStaffing {
                    required,
                    ratio,
                    available,
                }) => {
                    eprintln!(
                        "Unsafe staffing: you need at least {required} nurses for a 1:{ratio} ratio ({available} on duty)."
                    );
                    eprintln!("Re-run with --force to proceed anyway.");
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    std::process::exit(code);
}
