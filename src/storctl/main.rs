use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use stencil::FormatSpec;
use storctl::api::StorctlApi;
use storctl::config::{self, StorctlConfig, CONFIG_DIR_ENV, DATA_ENV, KEYS};
use storctl::error::Result;
use storctl::formatter::{self, Formattable};
use storctl::model::{Namespace, Node, Policy, User, Volume};
use storctl::store::fs::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands, ResourceAction};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StorctlApi<FileStore>,
    config: StorctlConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config::resolve_config_dir(cli.config_dir.clone(), env_path(CONFIG_DIR_ENV))?;

    let Cli { command, data, .. } = cli;
    match command {
        Commands::Config { key, value } => handle_config(&config_dir, key, value),
        Commands::Node { action } => {
            handle_resource::<Node>(&init_context(data, &config_dir)?, action)
        }
        Commands::Volume { action } => {
            handle_resource::<Volume>(&init_context(data, &config_dir)?, action)
        }
        Commands::Policy { action } => {
            handle_resource::<Policy>(&init_context(data, &config_dir)?, action)
        }
        Commands::User { action } => {
            handle_resource::<User>(&init_context(data, &config_dir)?, action)
        }
        Commands::Namespace { action } => {
            handle_resource::<Namespace>(&init_context(data, &config_dir)?, action)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn init_context(data: Option<PathBuf>, config_dir: &Path) -> Result<AppContext> {
    let data_path = config::resolve_data_path(data, env_path(DATA_ENV), config_dir);
    debug!(data = %data_path.display(), config_dir = %config_dir.display(), "resolved paths");

    let config = StorctlConfig::load(config_dir)?;
    let api = StorctlApi::new(FileStore::new(data_path));
    Ok(AppContext { api, config })
}

fn handle_resource<R: Formattable>(ctx: &AppContext, action: ResourceAction) -> Result<()> {
    match action {
        ResourceAction::Ls { quiet, format } => handle_list::<R>(ctx, quiet, format),
        ResourceAction::Inspect { format, refs } => handle_inspect::<R>(ctx, format, refs),
    }
}

fn handle_list<R: Formattable>(ctx: &AppContext, quiet: bool, format: Option<String>) -> Result<()> {
    let items = ctx.api.list::<R>()?;
    let selector = config::list_format(format.as_deref(), ctx.config.format_for(R::KIND), quiet);

    let stdout = io::stdout();
    formatter::write(stdout.lock(), FormatSpec::resolve(&selector, quiet), items)
}

fn handle_inspect<R: Formattable>(
    ctx: &AppContext,
    format: Option<String>,
    refs: Vec<String>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    stencil::inspect(&mut out, refs.as_slice(), format.as_deref().unwrap_or(""), |reference| {
        ctx.api.fetch::<R>(reference)
    })?;
    out.flush()?;
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = StorctlConfig::load(config_dir)?;

    match (key, value) {
        (None, _) => {
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?.unwrap_or(""));
            }
        }
        (Some(key), None) => {
            println!("{}", config.get(&key)?.unwrap_or(""));
        }
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let message = if value.is_empty() {
                format!("{} cleared", key)
            } else {
                format!("{} set to {}", key, value)
            };
            println!("{}", message.green());
        }
    }
    Ok(())
}
