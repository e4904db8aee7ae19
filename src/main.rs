use std::path::PathBuf;

use anyhow::Result;
use branchrep::config::{ConfigOverrides, ServerConfig};
use branchrep::database::entities::users::UserRole;
use branchrep::errors::AuthError;
use branchrep::database::{get_database_url, establish_connection, seed_data, setup_database};
use branchrep::server;
use branchrep::services::{AuthorizationService, DirectoryService};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// YAML file with server settings
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    User {
        #[clap(subcommand)]
        command: UserCommands,
    },
    Branch {
        #[clap(subcommand)]
        command: BranchCommands,
    },
    Session {
        #[clap(subcommand)]
        command: SessionCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long)]
        database: Option<String>,
    },
    Migrate {
        #[clap(subcommand)]
        direction: server::MigrateDirection,
        #[clap(short, long)]
        database: Option<String>,
    },
    /// Insert example users and branches
    Seed {
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    Create {
        #[clap(long)]
        email: String,
        #[clap(long)]
        name: String,
        /// ADMIN or USER
        #[clap(long, default_value = "USER")]
        role: String,
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BranchCommands {
    Create {
        #[clap(long)]
        name: String,
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommands {
    /// Open a session for a user and print its token
    Issue {
        #[clap(long)]
        user_id: i32,
        #[clap(long, default_value = "24")]
        hours: i64,
        #[clap(short, long)]
        database: Option<String>,
    },
    Revoke {
        #[clap(long)]
        token: String,
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = ServerConfig::load(args.config.as_deref())?.with_overrides(ConfigOverrides {
        log_level: args.log_level.clone(),
        ..Default::default()
    });
    setup_logging(&config.log_level);

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
        } => {
            let config = config.with_overrides(ConfigOverrides {
                port,
                database,
                cors_origin,
                log_level: None,
            });
            info!("Starting server on port {}", config.port);
            server::start_server(&config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                let database = database.unwrap_or(config.database);
                info!("Initializing database: {}", database);
                server::migrate_database(&database, server::MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database.unwrap_or(config.database), direction).await?;
            }
            DbCommands::Seed { database } => {
                let db = open_database(&database.unwrap_or(config.database)).await?;
                match seed_data::create_example_data(&db).await? {
                    Some(data) => println!("{}", data.admin_session),
                    None => info!("Nothing to seed"),
                }
            }
        },
        Commands::User { command } => match command {
            UserCommands::Create {
                email,
                name,
                role,
                database,
            } => {
                let role: UserRole = role
                    .to_uppercase()
                    .parse()
                    .map_err(|_| AuthError::InvalidRole(role.clone()))?;
                let db = open_database(&database.unwrap_or(config.database)).await?;
                let user = DirectoryService::new(db)
                    .create_user(&email, &name, role)
                    .await?;
                info!("Created user {} ({})", user.id, user.role);
                println!("{}", user.id);
            }
        },
        Commands::Branch { command } => match command {
            BranchCommands::Create { name, database } => {
                let db = open_database(&database.unwrap_or(config.database)).await?;
                let branch = DirectoryService::new(db).create_branch(&name).await?;
                info!("Created branch {}", branch.id);
                println!("{}", branch.id);
            }
        },
        Commands::Session { command } => match command {
            SessionCommands::Issue {
                user_id,
                hours,
                database,
            } => {
                let db = open_database(&database.unwrap_or(config.database)).await?;
                let session = AuthorizationService::new(db)
                    .issue_session(user_id, hours)
                    .await?;
                info!("Session expires at {}", session.expires_at);
                println!("{}", session.session_id);
            }
            SessionCommands::Revoke { token, database } => {
                let db = open_database(&database.unwrap_or(config.database)).await?;
                if AuthorizationService::new(db).revoke_session(&token).await? {
                    info!("Session revoked");
                } else {
                    info!("No session with that token");
                }
            }
        },
    }

    Ok(())
}

async fn open_database(database: &str) -> Result<DatabaseConnection> {
    let db = establish_connection(&get_database_url(Some(database))).await?;
    setup_database(&db).await?;
    Ok(db)
}

fn setup_logging(log_level: &str) {
    let log_level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
