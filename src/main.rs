use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use learning_projects::config::Config;
use learning_projects::logging::{init_tracing, LOG_ENV_VAR};
use learning_projects::ui::screens::Screen;
use learning_projects::{ui, AppContext};

#[derive(Parser)]
#[command(
    name = "learning-projects",
    version,
    about = "Eight small UI exercises in one terminal app"
)]
struct Cli {
    /// Screen shown at startup
    #[arg(short, long, value_enum, default_value_t = Screen::Counter)]
    screen: Screen,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding persisted favorites
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }

    if let Some(Commands::Config) = cli.command {
        print_config(&config_path, &config)?;
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let today = Local::now().date_naive();
    let context = AppContext::from_config(&config, today)?;
    ui::run(context, cli.screen, today, runtime.handle().clone())?;

    runtime.shutdown_background();
    Ok(())
}

fn print_config(path: &std::path::Path, config: &Config) -> Result<()> {
    println!("Config file: {}", path.display());
    println!("Data dir:    {}", config.storage.resolved_data_dir().display());
    println!("Log file:    set {LOG_ENV_VAR} to enable");
    println!();
    print!("{}", toml::to_string_pretty(config).context("rendering config")?);
    Ok(())
}
