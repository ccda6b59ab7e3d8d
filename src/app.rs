use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{RepoError, Result};

/// Shared state resolved once at startup and passed to every command.
pub struct AppContext {
    /// Repository root all target directories are resolved against.
    pub root: PathBuf,
    pub config: Config,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()
                .map_err(|err| RepoError::Config(format!("resolve working directory: {err}")))?,
        };
        let config = Config::load(cli.config.as_deref(), &root)?;

        Ok(Self {
            root,
            config,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }
}
