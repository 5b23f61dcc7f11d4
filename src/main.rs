//! ArtHub server — digital artwork marketplace.
//!
//! CLI entry point that wires configuration, logging, the database pool,
//! and the HTTP server together.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arthub_auth::jwt::TokenEncoder;
use arthub_auth::password::{PasswordHasher, PasswordPolicy};
use arthub_core::config::AppConfig;
use arthub_core::error::AppError;
use arthub_database::DatabasePool;
use arthub_database::repositories::UserRepository;
use arthub_service::AuthService;

/// ArtHub command line interface.
#[derive(Debug, Parser)]
#[command(name = "arthub", about = "Server-rendered marketplace for digital artworks")]
struct Cli {
    /// Configuration overlay to load (config/<env>.toml).
    #[arg(long, global = true, default_value = "development")]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Manage database migrations.
    Migrate(MigrateArgs),
    /// Create an admin account (admins cannot self-register).
    CreateAdmin(CreateAdminArgs),
}

/// Arguments for the serve command.
#[derive(Debug, Args)]
struct ServeArgs {
    /// Override the server port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the server host.
    #[arg(long)]
    host: Option<String>,

    /// Run database migrations on startup.
    #[arg(long, default_value = "true")]
    auto_migrate: bool,
}

/// Arguments for the migrate command.
#[derive(Debug, Args)]
struct MigrateArgs {
    #[command(subcommand)]
    command: MigrateCommand,
}

#[derive(Debug, Subcommand)]
enum MigrateCommand {
    /// Run all pending migrations.
    Run,
    /// Drop all tables and re-run every migration.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the create-admin command.
#[derive(Debug, Args)]
struct CreateAdminArgs {
    /// Admin username.
    #[arg(long)]
    username: String,

    /// Admin email address.
    #[arg(long)]
    email: String,

    /// Admin password.
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(cli, config).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli, mut config: AppConfig) -> Result<(), AppError> {
    match cli.command {
        Command::Serve(args) => {
            if let Some(port) = args.port {
                config.server.port = port;
            }
            if let Some(host) = args.host {
                config.server.host = host;
            }

            let pool = DatabasePool::connect(&config.database).await?.into_pool();

            if args.auto_migrate {
                arthub_database::migration::run_migrations(&pool).await?;
            }

            arthub_api::run_server(config, pool).await
        }
        Command::Migrate(args) => {
            let pool = DatabasePool::connect(&config.database).await?.into_pool();

            match args.command {
                MigrateCommand::Run => {
                    arthub_database::migration::run_migrations(&pool).await?;
                    println!("All migrations applied successfully.");
                }
                MigrateCommand::Reset { force } => {
                    if !force {
                        let confirm = dialoguer::Confirm::new()
                            .with_prompt(
                                "This will DROP all tables and re-run migrations. Continue?",
                            )
                            .default(false)
                            .interact()
                            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                        if !confirm {
                            println!("Cancelled.");
                            return Ok(());
                        }
                    }

                    reset_schema(&pool).await?;
                    arthub_database::migration::run_migrations(&pool).await?;
                    println!("Database reset complete.");
                }
            }

            Ok(())
        }
        Command::CreateAdmin(args) => {
            let pool = DatabasePool::connect(&config.database).await?.into_pool();
            arthub_database::migration::run_migrations(&pool).await?;

            let users = Arc::new(UserRepository::new(pool));
            let auth_service = AuthService::new(
                users,
                PasswordHasher::new(),
                PasswordPolicy::new(&config.auth),
                TokenEncoder::new(&config.auth),
            );

            let admin = auth_service
                .create_admin(args.username, args.email, args.password)
                .await?;

            println!("Admin '{}' created (id {}).", admin.username, admin.id);
            Ok(())
        }
    }
}

/// Drop the public schema so migrations can start from scratch.
async fn reset_schema(pool: &sqlx::PgPool) -> Result<(), AppError> {
    for statement in ["DROP SCHEMA public CASCADE", "CREATE SCHEMA public"] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::database(format!("Reset failed: {e}")))?;
    }
    Ok(())
}
