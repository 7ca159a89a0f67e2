mod cli;
mod commands;
mod format;
mod interactive;
mod output;
mod spinner;

use clap::Parser;
use commands::{AppContext, SharedAuth};
use firehose::auth::{AuthContext, FileTokenStore, TokenStore};
use firehose::{config, error::Result};
use format::OutputFormat;
use std::cell::RefCell;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; --debug wins over RUST_LOG
    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };
    log::debug!("API base URL: {}", cfg.base_url());

    let store: Box<dyn TokenStore> = Box::new(FileTokenStore::in_data_dir());
    let mut auth = AuthContext::new(store);
    auth.load()?;
    let auth: SharedAuth = RefCell::new(auth);

    let ctx = AppContext {
        config: &cfg,
        auth: &auth,
        format: OutputFormat::resolve(args.format.as_deref(), args.nc),
    };

    cli::handle_args(args.command, &ctx)
}
