//! Aggregate manifest generation.
//!
//! One pass per release target: collect addon directories under the
//! release's target directory, merge each addon's manifest fragment into a
//! single body, wrap it, then write `addons.xml` and its `addons.xml.md5`
//! digest. Only handles a single-depth folder structure.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RepoError, Result};

pub mod manifest;

/// One configured release channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseTarget {
    /// Human-readable release name.
    pub release: String,
    /// Directory under the repository root holding this release's addons.
    pub target_dir: String,
    /// Runtime version shipped with the release. Metadata only; the
    /// generator does not act on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<String>,
}

/// What happened to one release during a run.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseOutcome {
    pub release: String,
    pub status: ReleaseStatus,
    /// Number of addon manifests merged into the aggregate.
    pub merged: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<AddonExclusion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    /// Aggregate and checksum were rewritten.
    Updated,
    /// No readable addon manifests; nothing was touched.
    Empty,
    /// Addons merged but the aggregate could not be saved.
    WriteFailed,
}

/// An addon skipped during aggregation, with the manifest path that failed.
#[derive(Debug, Clone, Serialize)]
pub struct AddonExclusion {
    pub path: String,
    pub error: String,
}

/// Merge every addon manifest under `root/<target_dir>` and write the
/// aggregate plus its checksum.
///
/// A single unreadable addon never aborts the run: it is recorded in the
/// outcome and skipped. Output files are only touched when at least one
/// manifest merged. Write failures are downgraded to the outcome status and
/// logs so a multi-release run always continues.
pub fn generate(root: &Path, release: &ReleaseTarget) -> Result<ReleaseOutcome> {
    let target_path = root.join(&release.target_dir);
    let addons_xml = target_path.join("addons.xml");
    let addons_xml_md5 = target_path.join("addons.xml.md5");

    let mut body = String::new();
    let mut merged = 0usize;
    let mut excluded = Vec::new();

    for dir in addon_dirs(&target_path)? {
        let manifest_path = dir.join("addon.xml");
        match manifest::read_fragment(&manifest_path) {
            Ok(fragment) => {
                body.push_str(&fragment);
                body.push_str("\n\n");
                merged += 1;
                debug!(path = %manifest_path.display(), "merged addon manifest");
            }
            Err(err) => {
                warn!(path = %manifest_path.display(), %err, "excluding addon");
                excluded.push(AddonExclusion {
                    path: manifest_path.display().to_string(),
                    error: err.to_string(),
                });
            }
        }
    }

    if merged == 0 {
        debug!(dir = %target_path.display(), "no addon manifests found");
        return Ok(ReleaseOutcome {
            release: release.release.clone(),
            status: ReleaseStatus::Empty,
            merged,
            excluded,
        });
    }

    let document = manifest::wrap(&body);

    let status = match save_file(&document, &addons_xml) {
        Ok(()) => {
            if let Err(err) = write_checksum(&addons_xml, &addons_xml_md5) {
                // The aggregate is on disk without a matching checksum; the
                // operator has to notice this through the logs.
                warn!(path = %addons_xml_md5.display(), %err, "checksum not written");
            }
            ReleaseStatus::Updated
        }
        Err(err) => {
            warn!(path = %addons_xml.display(), %err, "aggregate not written");
            ReleaseStatus::WriteFailed
        }
    };

    Ok(ReleaseOutcome {
        release: release.release.clone(),
        status,
        merged,
        excluded,
    })
}

/// Immediate subdirectories of the target, sorted by name for stable
/// aggregate ordering.
///
/// `.svn` is a legacy version-control artifact and the one directory name
/// excluded outright; nothing else is filtered.
fn addon_dirs(target: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(target)
        .map_err(|err| RepoError::TargetUnreadable(format!("{}: {err}", target.display())))?
    {
        let entry = entry
            .map_err(|err| RepoError::TargetUnreadable(format!("{}: {err}", target.display())))?;
        let path = entry.path();
        if !path.is_dir() || entry.file_name() == ".svn" {
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

fn save_file(data: &str, path: &Path) -> Result<()> {
    fs::write(path, data)
        .map_err(|err| RepoError::WriteFailed(format!("{}: {err}", path.display())))
}

/// Digest the aggregate as re-read from disk, so the checksum always
/// matches the bytes a consumer will fetch.
fn write_checksum(addons_xml: &Path, md5_path: &Path) -> Result<()> {
    let content = fs::read_to_string(addons_xml)?;
    let digest = format!("{:x}", md5::compute(content.as_bytes()));
    save_file(&digest, md5_path)
}
