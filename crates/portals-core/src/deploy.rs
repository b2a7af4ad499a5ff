//! Deploy orchestration.
//!
//! Preconditions for every target are verified before any deploy command
//! runs. The loop itself is partial-failure tolerant: targets are
//! independent external destinations, so one failed publish must not stop
//! the remaining ones. The report distinguishes the two outcomes so the
//! caller can exit non-zero when anything failed.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::paths;
use crate::runner;
use crate::variant::Variant;

#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub variant: Variant,
    pub output_dir: PathBuf,
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeployFailure {
    pub variant: Variant,
    pub detail: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeployReport {
    pub deployed: Vec<Variant>,
    pub failed: Vec<DeployFailure>,
}

impl DeployReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Verify the output directory and deployment config for every deployable
/// variant. The first missing path is fatal — nothing gets deployed from a
/// partially staged tree.
///
/// Target paths come back canonicalized: the deploy command runs with its
/// cwd inside the output directory, so a root-relative config path would
/// resolve against the wrong base there.
pub fn preflight(root: &Path, config: &Config) -> Result<Vec<DeployTarget>> {
    let mut targets = Vec::new();
    for &variant in Variant::deployable() {
        let output_dir = paths::output_path(root, config, variant);
        if !output_dir.is_dir() {
            return Err(PortalError::MissingOutputDir {
                variant: variant.to_string(),
                path: output_dir,
            });
        }
        let config_file = paths::deploy_config_path(root, variant);
        if !config_file.is_file() {
            return Err(PortalError::MissingDeployConfig {
                variant: variant.to_string(),
                path: config_file,
            });
        }
        targets.push(DeployTarget {
            variant,
            output_dir: std::fs::canonicalize(&output_dir)?,
            config_file: std::fs::canonicalize(&config_file)?,
        });
    }
    Ok(targets)
}

/// Deploy every target in order. A failing deploy command is recorded and
/// the loop continues; only precondition failures and a missing deploy
/// program abort up front.
pub fn deploy_all(root: &Path, config: &Config) -> Result<DeployReport> {
    let targets = preflight(root, config)?;
    runner::resolve_program(&config.deploy.program)?;

    let mut report = DeployReport::default();
    for target in targets {
        let args = config.deploy.args_for(&target.config_file);
        match runner::run(&config.deploy.program, &args, &target.output_dir, &[]) {
            Ok(status) if status.success() => report.deployed.push(target.variant),
            Ok(status) => report.failed.push(DeployFailure {
                variant: target.variant,
                detail: status.to_string(),
            }),
            Err(e) => report.failed.push(DeployFailure {
                variant: target.variant,
                detail: e.to_string(),
            }),
        }
    }
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
