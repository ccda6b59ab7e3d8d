//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod generate;
pub mod list;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => generate::run(ctx, args),
        Commands::List => list::run(ctx),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate addons.xml and addons.xml.md5 for each release target
    Generate(generate::GenerateArgs),

    /// List the configured release targets
    List,
}
