//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mojang_client` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process;

use mojang_client::api::is_server_blocked;
use mojang_client::initialization::init_logger_with;
use mojang_client::{
    Authenticator, Collapsed, Config, Dispatcher, LogFormat, LogLevel, LoginOutcome, LoginRequest,
    MojangApi, ProfileRecord,
};

#[derive(Debug, Parser)]
#[command(name = "mojang_client", version, about = "Query the Mojang account API")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    timeout_seconds: u64,

    /// Azure application (client) id for `login`
    #[arg(long, env = "MOJANG_CLIENT_ID", global = true)]
    client_id: Option<String>,

    /// Redirect URI registered for the Azure application
    #[arg(long, env = "MOJANG_REDIRECT_URI", default_value = "https://localhost", global = true)]
    redirect_uri: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a username to its account id
    Uuid {
        /// Username to resolve
        name: String,
    },
    /// Show profiles for usernames and/or ids
    Profile {
        /// Usernames or ids
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List blocked server hashes, or check one address
    Blocked {
        /// Address to check against the list
        #[arg(long)]
        check: Option<String>,
    },
    /// Show sales statistics
    Stats {
        /// Metric keys (e.g. item_sold_minecraft)
        metrics: Vec<String>,
    },
    /// Log in with a Microsoft account
    Login {
        /// Authorization code from the OAuth redirect
        #[arg(long)]
        code: Option<String>,
        /// Existing Minecraft services access token
        #[arg(long, env = "MINECRAFT_ACCESS_TOKEN")]
        access_token: Option<String>,
        /// Anti-forgery state for the authorization URL
        #[arg(long)]
        state: Option<String>,
    },
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout_seconds,
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            ..Default::default()
        }
    }
}

fn print_profile(profile: &ProfileRecord) {
    println!("{} ({})", profile.username, profile.uuid.hyphenated());
    println!("  default skin: {}", profile.default_skin);
    if let Some(skin) = &profile.skin {
        println!("  skin: {}", skin.url);
    }
    if let Some(cape) = &profile.cape {
        println!("  cape: {}", cape.url);
    }
}

async fn run(command: Command, config: Config) -> Result<()> {
    let dispatcher = Dispatcher::new(config).context("Failed to initialize HTTP client")?;
    let api = MojangApi::with_dispatcher(dispatcher.clone());

    match command {
        Command::Uuid { name } => match api.resolve_uuid(&name).await? {
            Some(uuid) => println!("{}", uuid.hyphenated()),
            None => println!("{name} not found"),
        },
        Command::Profile { names } => match api.get_profile(names).await? {
            Collapsed::Empty => println!("No profiles found"),
            Collapsed::Single(profile) => print_profile(&profile),
            Collapsed::Many(profiles) => profiles.iter().for_each(print_profile),
        },
        Command::Blocked { check } => {
            let hashes = api.get_blocked_servers().await?;
            match check {
                Some(address) if is_server_blocked(&hashes, &address) => {
                    println!("{address} is blocked")
                }
                Some(address) => println!("{address} is not blocked"),
                None => hashes.iter().for_each(|h| println!("{h}")),
            }
        }
        Command::Stats { metrics } => {
            let stats = api.get_statistics(&metrics).await?;
            println!(
                "total: {}, last 24h: {}, per second: {:.4}",
                stats.total, stats.last_24h, stats.sale_velocity
            );
        }
        Command::Login {
            code,
            access_token,
            state,
        } => {
            let auth = Authenticator::with_dispatcher(dispatcher);
            let request = LoginRequest {
                access_token,
                code,
                state,
            };
            match auth.login(request).await? {
                LoginOutcome::AuthorizationUrl(url) => {
                    println!("Open this URL and pass the returned code with --code:");
                    println!("{url}");
                }
                LoginOutcome::Authenticated(session) => {
                    let account = session.account();
                    println!("Logged in as {} ({})", account.name, account.id.hyphenated());
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let cli = Cli::parse();
    let config = cli.to_config();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(cli.command, config).await {
        eprintln!("mojang_client error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
