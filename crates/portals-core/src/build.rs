//! Build orchestration: single-variant builds and the batch build that
//! produces one relocated output directory per variant.

use std::path::Path;

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::paths;
use crate::runner;
use crate::variant::Variant;

/// Run the external build command for one variant. The variant travels to
/// the build tool two ways: the `{script}` expansion in the command args and
/// the configured env var on the child process.
pub fn build_variant(root: &Path, config: &Config, variant: Variant) -> Result<()> {
    let args = config.build.args_for(variant);
    let envs = [(config.build.env_var.as_str(), variant.as_str())];
    let status = runner::run(&config.build.program, &args, root, &envs)?;

    if !status.success() {
        return Err(PortalError::BuildFailed {
            program: config.build.program.clone(),
            status: status.to_string(),
            variant: variant.to_string(),
        });
    }
    Ok(())
}

/// Build every buildable variant in order, relocating the build tool's
/// conventional output directory to its variant-qualified name after each
/// build. Sequential; the first failure halts the batch.
pub fn build_all(root: &Path, config: &Config) -> Result<()> {
    for &variant in Variant::buildable() {
        build_variant(root, config, variant)?;
        relocate_output(root, config, variant)?;
    }
    Ok(())
}

/// Move `dist/` to `dist-<variant>/`, replacing any stale directory of that
/// name so re-runs are safe.
fn relocate_output(root: &Path, config: &Config, variant: Variant) -> Result<()> {
    let dist = paths::dist_path(root, config);
    let target = paths::output_path(root, config, variant);

    if !dist.is_dir() {
        return Err(PortalError::MissingBuildOutput {
            variant: variant.to_string(),
            path: dist,
        });
    }
    if target.is_dir() {
        std::fs::remove_dir_all(&target)?;
    }
    std::fs::rename(&dist, &target)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
