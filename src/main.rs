use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;

use spark_bot::application::context::BotContext;
use spark_bot::application::errors::ConfigError;
use spark_bot::application::messaging::Controller;
use spark_bot::domain::traits::Bot;
use spark_bot::infrastructure::adapters::ConsoleAdapter;
use spark_bot::infrastructure::config::Config;
use spark_bot::infrastructure::server::{self, AppState};
use spark_bot::{load_skills, skills};

#[derive(Parser)]
#[command(name = "spark-bot")]
#[command(about = "Webhook server for a Webex chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Optional YAML config file, overridden by environment variables
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server (default)
    Run,
    /// Show version
    Version,
    /// List the built-in skills
    Skills,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot(cli.config),
        Commands::Version => {
            println!("spark-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Skills => {
            for skill in skills::catalog().iter() {
                println!(
                    "{:<10} {}",
                    skill.name,
                    skill.description.as_deref().unwrap_or("")
                );
            }
        }
    }
}

fn run_bot(config_path: Option<String>) {
    let base = match config_path {
        Some(path) => Config::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }),
        None => Config::default(),
    };

    let config = match base.load_env() {
        Ok(config) => config,
        Err(e) => exit_with_usage(&e),
    };
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => exit_with_usage(&e),
    };

    tracing::info!(
        "Starting spark-bot ({}), webhook '{}'",
        config.bot.environment,
        credentials.webhook_name
    );
    if credentials.secret.is_none() {
        tracing::warn!("SECRET is not set, webhook payload origin will not be checked");
    }

    let context = Arc::new(BotContext::from_config(&config, chrono::Utc::now()));

    let mut controller = Controller::new();
    let catalog = skills::catalog();
    load_skills(&catalog, &config.skills, &mut controller);
    let controller = Arc::new(controller);

    let bot = Arc::new(ConsoleAdapter::new(context.mention_name()));
    let info = bot.bot_info();
    tracing::info!("Replies go through the {} adapter as {}", info.platform, info.name);
    let state = AppState::new(context.clone(), controller, bot);
    let app = server::router(state, &config.server.webhook_path);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            process::exit(1);
        }
    };

    rt.block_on(async {
        let addr = format!("0.0.0.0:{}", config.server.port);
        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Failed to bind {}: {}", addr, e);
                process::exit(1);
            }
        };

        tracing::info!("Webhook endpoint: {}{}", credentials.public_url, config.server.webhook_path);
        tracing::info!("Healthcheck available at: {}", context.commons().healthcheck);

        if let Err(e) = server::serve(listener, app, server::shutdown_signal()).await {
            tracing::error!("Server error: {}", e);
        }
    });
}

/// Print why startup is impossible and exit with status 1
fn exit_with_usage(err: &ConfigError) -> ! {
    tracing::error!("{}", err);
    match err {
        ConfigError::MissingVar { var, hint } => {
            eprintln!("Could not start as {}.", hint);
            eprintln!("Please add env variable {} on the command line or to the config file", var);
        }
        other => eprintln!("Could not start: {}", other),
    }
    eprintln!("Example: ");
    eprintln!("> SPARK_TOKEN=XXXXXXXXXXXX PUBLIC_URL=YYYYYYYYYYYYY spark-bot run");
    process::exit(1);
}
