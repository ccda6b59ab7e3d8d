//! repogen list - show the configured release targets

use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    if ctx.robot_mode {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "releases": ctx.config.releases,
            })
        );
        return Ok(());
    }

    for release in &ctx.config.releases {
        let target = ctx.root.join(&release.target_dir);
        let marker = if target.is_dir() {
            "✓".green()
        } else {
            "✗".red()
        };
        let runtime = release.runtime_version.as_deref().unwrap_or("-");
        println!(
            "{} {:<12} {:<12} runtime {}",
            marker, release.release, release.target_dir, runtime
        );
    }

    Ok(())
}
