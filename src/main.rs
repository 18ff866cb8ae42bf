use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use twaccount::account::{AccountAction, AccountType};
use twaccount::config::Config;
use twaccount::query::QueryExpression;
use twaccount::twitter::client::TwitterClient;
use twaccount::twitter::http::format_api_error;

/// Query Twitter account endpoints
#[derive(Parser, Debug)]
#[command(name = "twaccount", version = twaccount::VERSION, about, long_about = None)]
struct Args {
    /// Account call to make (defaults to the last queried type)
    #[command(subcommand)]
    command: Option<Command>,

    /// API base URL (defaults to the saved one, then https://api.twitter.com/1/)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the request instead of sending it
    #[arg(long, global = true)]
    dry_run: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the authenticated user's profile
    VerifyCredentials {
        /// Include tweet entities in the embedded status
        #[arg(long)]
        include_entities: bool,

        /// Leave out the embedded status
        #[arg(long)]
        skip_status: bool,
    },
    /// Show the remaining hourly request budget
    RateLimitStatus,
    /// Show tweet, friend, favorite and follower totals
    Totals,
    /// Show account settings
    Settings,
    /// End the current session
    EndSession,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

impl Command {
    /// Plain query command for a saved type
    fn for_type(account_type: AccountType) -> Self {
        match account_type {
            AccountType::VerifyCredentials => Command::VerifyCredentials {
                include_entities: false,
                skip_status: false,
            },
            AccountType::RateLimitStatus => Command::RateLimitStatus,
            AccountType::Totals => Command::Totals,
            AccountType::Settings => Command::Settings,
            AccountType::EndSession => Command::EndSession,
        }
    }

    /// Query expression for query commands; `None` for actions
    fn expression(&self) -> Option<QueryExpression> {
        let account_type = match self {
            Command::VerifyCredentials { .. } => AccountType::VerifyCredentials,
            Command::RateLimitStatus => AccountType::RateLimitStatus,
            Command::Totals => AccountType::Totals,
            Command::Settings => AccountType::Settings,
            Command::EndSession => return None,
        };

        let mut expr = QueryExpression::eq("Type", account_type);
        if let Command::VerifyCredentials {
            include_entities,
            skip_status,
        } = self
        {
            if *include_entities {
                expr = expr.and(QueryExpression::eq("IncludeEntities", true));
            }
            if *skip_status {
                expr = expr.and(QueryExpression::eq("SkipStatus", true));
            }
        }
        Some(expr)
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled, cannot open {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("twaccount started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("twaccount").join("twaccount.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".twaccount").join("twaccount.log");
    }
    PathBuf::from("twaccount.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut config = Config::load();
    let base_url = config.effective_base_url(args.base_url.as_deref());
    let client = TwitterClient::new(&base_url, Config::bearer_token())?;

    if let Err(err) = run(&args, &client, &mut config).await {
        tracing::error!("{:?}", err);
        eprintln!("Error: {}", format_api_error(&err));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: &Args, client: &TwitterClient, config: &mut Config) -> Result<()> {
    let fallback;
    let command = match &args.command {
        Some(command) => command,
        None => {
            fallback = Command::for_type(config.effective_type());
            tracing::info!("no command given, repeating {}", config.effective_type());
            &fallback
        }
    };

    let Some(expr) = command.expression() else {
        let action = AccountAction::EndSession;
        if args.dry_run {
            let request = client.processor(action.account_type())?.build_action_url(action);
            println!("{}", request);
            return Ok(());
        }
        let account = client.perform(action).await?;
        println!("{}", serde_json::to_string_pretty(&account)?);
        return Ok(());
    };

    if args.dry_run {
        let (_, request) = client.prepare(&expr)?;
        println!("{}", request);
        return Ok(());
    }

    let accounts = client.query(&expr).await?;
    if let Some(account) = accounts.first() {
        if let Err(e) = config.set_last_type(account.account_type()) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    println!("{}", serde_json::to_string_pretty(&accounts)?);
    Ok(())
}
