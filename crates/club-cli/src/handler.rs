//! Command dispatch
//!
//! Every command prints a JSON document to stdout. Commands that touch the
//! database load configuration and open a pool first.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use club_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig,
};
use club_db::{create_pool, run_migrations, PoolConfig, DEFAULT_MIGRATIONS_DIR};
use club_service::dto::{
    ApiResponse, ComputeSummaryResponse, ComputeWeeklyRequest, WeekResponse, WeeklyDeltasQuery,
    WeeklyReportResponse,
};
use club_service::{BadgeService, ServiceContext, WeeklyAggregationService};

use crate::cli::{Cli, Command};

/// Run a parsed command line
pub async fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Badges { id } => badges(id.as_deref()),
        command => {
            let config = AppConfig::from_env()?;
            init_tracing(&config, cli.verbose);
            info!(app = %config.app.name, env = ?config.app.env, "Configuration loaded");
            run_with_database(command, config).await
        }
    }
}

fn badges(id: Option<&str>) -> AppResult<()> {
    let service = BadgeService::new();
    match id {
        Some(id) => print_json(&ApiResponse::new(service.get(id))),
        None => print_json(&ApiResponse::new(service.list())),
    }
}

async fn run_with_database(command: Command, config: AppConfig) -> AppResult<()> {
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    match command {
        Command::Migrate { dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_DIR));
            run_migrations(&pool, &dir)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!(dir = %dir.display(), "Migrations applied");
            print_json(&ApiResponse::new(serde_json::json!({ "migrated": true })))
        }
        Command::Compute {
            guild,
            week,
            dry_run,
        } => {
            let params = ComputeWeeklyRequest {
                guild_id: guild,
                week_start: week,
                save: !dry_run,
            }
            .parse()?;

            let ctx = ServiceContext::from_pool(pool, config.analytics);
            let outcome = WeeklyAggregationService::new(&ctx)
                .compute_weekly_deltas(params.guild_id, params.week_start, params.save)
                .await?;

            if outcome.is_partial() {
                warn!(failed = outcome.failed.len(), "Some members were not saved");
            }
            print_json(&ApiResponse::new(ComputeSummaryResponse::from(&outcome)))
        }
        Command::Show { guild, week } => {
            let (guild_id, week_start) = WeeklyDeltasQuery {
                guild_id: guild,
                week_start: week,
            }
            .parse()?;

            let ctx = ServiceContext::from_pool(pool, config.analytics);
            let rows = WeeklyAggregationService::new(&ctx)
                .get_weekly_deltas(guild_id, week_start)
                .await?;
            print_json(&ApiResponse::new(WeeklyReportResponse::new(guild_id, &rows)))
        }
        Command::Weeks { guild } => {
            let (guild_id, _) = WeeklyDeltasQuery {
                guild_id: guild,
                week_start: None,
            }
            .parse()?;

            let ctx = ServiceContext::from_pool(pool, config.analytics);
            let weeks = WeeklyAggregationService::new(&ctx).list_weeks(guild_id).await?;
            let weeks: Vec<WeekResponse> = weeks.into_iter().map(WeekResponse::from).collect();
            print_json(&ApiResponse::new(weeks))
        }
        Command::Badges { id } => badges(id.as_deref()),
    }
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let mut tracing_config = TracingConfig::for_environment(config.app.env);
    if verbose {
        tracing_config.level = tracing::Level::DEBUG;
    }
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(AppError::internal)?;
    writeln!(stdout).map_err(AppError::internal)?;
    Ok(())
}
