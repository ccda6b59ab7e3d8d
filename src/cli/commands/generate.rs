//! repogen generate - rebuild the aggregate manifest for each release

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::{RepoError, Result};
use crate::generator::{self, ReleaseStatus, ReleaseTarget};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Release names to process (defaults to every configured release)
    #[arg(long, short, value_name = "NAME")]
    pub release: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &GenerateArgs) -> Result<()> {
    let targets = select_releases(&ctx.config.releases, &args.release)?;

    if ctx.robot_mode {
        generate_robot(ctx, &targets)
    } else {
        generate_human(ctx, &targets)
    }
}

fn select_releases<'a>(
    configured: &'a [ReleaseTarget],
    requested: &[String],
) -> Result<Vec<&'a ReleaseTarget>> {
    if requested.is_empty() {
        return Ok(configured.iter().collect());
    }

    let mut selected = Vec::new();
    for name in requested {
        let target = configured
            .iter()
            .find(|t| t.release.eq_ignore_ascii_case(name))
            .ok_or_else(|| RepoError::Config(format!("unknown release: {name}")))?;
        selected.push(target);
    }
    Ok(selected)
}

fn generate_human(ctx: &AppContext, targets: &[&ReleaseTarget]) -> Result<()> {
    for release in targets {
        println!(
            "{} {}",
            "Running generator for release:".bold(),
            release.release
        );

        let outcome = match generator::generate(&ctx.root, release) {
            Ok(outcome) => outcome,
            Err(e) => {
                // One broken release never blocks the next.
                println!("{} {}: {}", "✗".red(), release.release, e);
                continue;
            }
        };

        for exclusion in &outcome.excluded {
            println!(
                "{} excluding {} - {}",
                "✗".red(),
                exclusion.path,
                exclusion.error
            );
        }

        match outcome.status {
            ReleaseStatus::Updated => println!(
                "{} {}: updated addons.xml and addons.xml.md5 ({} addons)",
                "✓".green().bold(),
                release.release,
                outcome.merged
            ),
            ReleaseStatus::Empty => println!(
                "{} {}: no addons found, nothing written",
                "!".yellow(),
                release.release
            ),
            ReleaseStatus::WriteFailed => println!(
                "{} {}: could not save addons.xml",
                "✗".red(),
                release.release
            ),
        }
    }

    Ok(())
}

fn generate_robot(ctx: &AppContext, targets: &[&ReleaseTarget]) -> Result<()> {
    let mut releases: Vec<serde_json::Value> = Vec::new();
    let mut clean = true;

    for release in targets {
        match generator::generate(&ctx.root, release) {
            Ok(outcome) => {
                if outcome.status == ReleaseStatus::WriteFailed || !outcome.excluded.is_empty() {
                    clean = false;
                }
                releases.push(serde_json::json!({
                    "release": outcome.release,
                    "status": outcome.status,
                    "merged": outcome.merged,
                    "excluded": outcome.excluded,
                }));
            }
            Err(e) => {
                clean = false;
                releases.push(serde_json::json!({
                    "release": release.release,
                    "status": "failed",
                    "error": e.to_string(),
                }));
            }
        }
    }

    println!(
        "{}",
        serde_json::json!({
            "status": if clean { "ok" } else { "partial" },
            "releases": releases,
        })
    );

    Ok(())
}
