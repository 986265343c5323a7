//! Goal Tracker - Main Entry Point
//!
//! Command line front end for the goal tracker. The actual implementation
//! is in the `goal_tracker` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use goal_tracker::{
    GoalDraft, HttpBackend, MilestonePatch, Notification, SessionStore, TrackerConfig,
    TrackerHandler, TrackerResult, goal, validation,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Goal Tracker - set goals, break them into milestones, track progress
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend URL (overrides the configuration file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session file (overrides the configuration file)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Log requests and actions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log into it
    Register {
        name: String,
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Summary counts, priority goals and upcoming deadlines
    Dashboard,
    /// List goals
    List {
        /// all, completed, in-progress, not-started, high-priority
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show one goal with its milestones
    Show { goal_id: i64 },
    /// Progress report
    Report,
    /// Add a goal
    AddGoal {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        /// high, medium or low
        #[arg(long, default_value = "medium")]
        priority: String,
        /// YYYY-MM-DD
        #[arg(long)]
        target_date: String,
    },
    /// Edit a goal; omitted fields keep their current value
    EditGoal {
        goal_id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        target_date: Option<String>,
    },
    /// Delete a goal and its milestones
    DeleteGoal { goal_id: i64 },
    /// Add a milestone to a goal
    AddMilestone { goal_id: i64, title: String },
    /// Rename a milestone
    RenameMilestone { milestone_id: i64, title: String },
    /// Mark a milestone done, or not done if it already is
    ToggleMilestone { milestone_id: i64 },
    /// Set a milestone's completion explicitly
    SetMilestone {
        milestone_id: i64,
        #[arg(long)]
        done: bool,
    },
    /// Delete a milestone
    DeleteMilestone { milestone_id: i64 },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<TrackerConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => dirs::config_dir()
            .map(|dir| dir.join("goal-tracker").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("goal-tracker.toml")),
    };
    let config = TrackerConfig::load(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    Ok(config.with_overrides(args.base_url.clone(), args.session_file.clone())?)
}

async fn run(handler: &TrackerHandler, command: Command) -> TrackerResult<String> {
    let notification = match command {
        Command::Login { email, password } => handler.login(&email, &password).await?,
        Command::Register {
            name,
            email,
            password,
        } => handler.register(&name, &email, &password).await?,
        Command::Logout => handler.logout()?,
        Command::Whoami => {
            return Ok(match handler.current_user() {
                Some(user) => format!("{} <{}> (id {})", user.name, user.email, user.id),
                None => "Not logged in".to_string(),
            });
        }
        Command::Dashboard => return handler.dashboard_view(goal::deadline_reference_now()),
        Command::List { filter } => {
            let filter = filter
                .as_deref()
                .map(validation::parse_goal_filter)
                .transpose()?;
            return handler.list_view(filter);
        }
        Command::Show { goal_id } => return handler.goal_view(goal_id),
        Command::Report => return handler.report_view(),
        Command::AddGoal {
            title,
            description,
            category,
            priority,
            target_date,
        } => {
            let draft = GoalDraft {
                title,
                description,
                category,
                priority: validation::parse_priority(&priority)?,
                target_date: Some(validation::parse_target_date(&target_date)?),
            };
            handler.create_goal(draft).await?
        }
        Command::EditGoal {
            goal_id,
            title,
            description,
            category,
            priority,
            target_date,
        } => {
            let mut draft = handler.goal_draft(goal_id)?;
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(priority) = priority {
                draft.priority = validation::parse_priority(&priority)?;
            }
            if let Some(date) = target_date {
                draft.target_date = Some(validation::parse_target_date(&date)?);
            }
            handler.update_goal(goal_id, draft).await?
        }
        Command::DeleteGoal { goal_id } => handler.delete_goal(goal_id).await?,
        Command::AddMilestone { goal_id, title } => handler.add_milestone(goal_id, &title).await?,
        Command::RenameMilestone {
            milestone_id,
            title,
        } => handler.rename_milestone(milestone_id, &title).await?,
        Command::ToggleMilestone { milestone_id } => {
            handler.toggle_milestone(milestone_id).await?
        }
        Command::SetMilestone { milestone_id, done } => {
            let patch = MilestonePatch {
                title: None,
                status: Some(done),
            };
            handler.update_milestone(milestone_id, patch).await?
        }
        Command::DeleteMilestone { milestone_id } => handler.delete_milestone(milestone_id).await?,
    };
    Ok(notification.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let backend = Arc::new(HttpBackend::from_config(&config)?);
    let handler = TrackerHandler::start(backend, SessionStore::new(&config.session_file)).await;

    match run(&handler, args.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", Notification::from(&e));
            std::process::exit(1);
        }
    }
}
