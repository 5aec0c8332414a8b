//! Notes CLI (`notes`)
//!
//! Notes 백엔드에 로그인하고 프로필과 노트를 관리하는 도구입니다.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::OutputFormat;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about = "Notes CLI - client for the Notes backend", long_about = None)]
struct Cli {
    /// API base URL (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Auth
    // ─────────────────────────────────────────────────────────────────────────
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "NOTES_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Login and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NOTES_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Remove the stored session token
    Logout,

    /// Show the dashboard greeting for the current user
    Whoami,

    // ─────────────────────────────────────────────────────────────────────────
    // Profile & Notes
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Config
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage CLI config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show profile
    Show,
    /// Update profile (password unchanged unless given)
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    /// List notes
    List,
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Update a note
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a note
    Delete {
        #[arg(long)]
        id: String,
        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set config values
    Set {
        /// API base URL to store
        #[arg(long)]
        url: Option<String>,
    },
    /// Show current config
    Show,
    /// Clear config
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stderr)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes=warn,notes_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 설정 로드
    let config_path = CliConfig::config_path()?;
    let config = load_config_for(&cli.command, &config_path)?;
    let api_url = cli.api_url.as_deref();
    let format = cli.format;

    // 명령 실행
    match cli.command {
        Commands::Signup { name, email, password } => {
            commands::auth::signup(&config, api_url, format, &name, &email, &password).await
        }
        Commands::Login { email, password } => {
            commands::auth::login(&config, api_url, format, &email, &password).await
        }
        Commands::Logout => commands::auth::logout(&config, api_url),
        Commands::Whoami => commands::auth::whoami(&config, api_url, format).await,

        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&config, api_url, format).await,
            ProfileAction::Update { name, email, bio, password } => {
                commands::profile::update(
                    &config,
                    api_url,
                    format,
                    &name,
                    &email,
                    bio.as_deref(),
                    password.as_deref(),
                )
                .await
            }
        },

        Commands::Notes { action } => match action {
            NotesAction::List => commands::notes::list(&config, api_url, format).await,
            NotesAction::Create { title, content } => {
                commands::notes::create(&config, api_url, format, &title, &content).await
            }
            NotesAction::Update { id, title, content } => {
                commands::notes::update(&config, api_url, format, &id, &title, &content).await
            }
            NotesAction::Delete { id, yes } => {
                commands::notes::delete(&config, api_url, format, &id, yes).await
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Set { url } => commands::config::set(&config_path, url),
            ConfigAction::Show => commands::config::show(&config_path),
            ConfigAction::Clear => commands::config::clear(&config_path),
        },
    }
}

/// `config` 명령은 설정 파일을 직접 다루므로 여기서 읽지 않음
fn load_config_for(command: &Commands, path: &Path) -> anyhow::Result<CliConfig> {
    match command {
        Commands::Config { .. } => Ok(CliConfig::default()),
        _ => CliConfig::load_from(path),
    }
}
