use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use hotel_reservation::config::Config;
use hotel_reservation::db;
use hotel_reservation::seeders::Seeder;

/// Database seeder for populating initial data
#[derive(Debug, Parser)]
#[command(name = "seeder", version)]
struct Args {
    /// Comma-separated list of model names to seed (e.g. 'Policy,Role')
    #[arg(long, value_delimiter = ',')]
    model: Vec<String>,

    /// Run without committing changes to database
    #[arg(long)]
    dry_run: bool,

    /// Folder holding the JSON fixture files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let args = Args::parse();

    let cfg = match Config::init() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let default_level = if cfg.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let models: Vec<String> = args
        .model
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();
    let models = (!models.is_empty()).then_some(models);

    tracing::info!(
        "{} v{}: starting seeder for models: {}",
        cfg.app_name,
        cfg.app_version,
        models.as_ref().map(|m| m.join(", ")).unwrap_or_else(|| "all".to_string())
    );

    let data_dir = args.data_dir.unwrap_or_else(|| cfg.seed_data_dir.clone());
    let seeder = match Seeder::new(data_dir, models, args.dry_run) {
        Ok(seeder) => seeder,
        Err(e) => {
            tracing::error!("Fatal error during seeding: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let conn = match db::connect(&cfg).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = seeder.run(&conn).await;
    if let Err(e) = conn.close().await {
        tracing::warn!("Error closing database connection: {}", e);
    }

    match result {
        Ok(report) => {
            tracing::info!(
                "Seeding process completed ({} tables seeded, {} failed)",
                report.succeeded,
                report.failed
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal error during seeding: {}", e);
            ExitCode::FAILURE
        }
    }
}
