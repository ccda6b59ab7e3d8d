//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "repogen",
    version,
    about = "Generate addons.xml and addons.xml.md5 repository index files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file path (otherwise repogen.toml under the root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_accepts_repeated_release_flags() {
        let cli = Cli::parse_from(["repogen", "generate", "-r", "Matrix", "-r", "Leia"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.release, ["Matrix", "Leia"]);
    }
}
