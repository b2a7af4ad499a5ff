use crate::output::{print_json, print_kv};
use anyhow::Context;
use portals_core::config::Config;
use portals_core::deploy;
use portals_core::Variant;
use std::path::Path;

/// Deploy every variant. Preconditions are checked for all targets before
/// anything is published; deploy command failures are tolerated per target
/// but surface in the exit code once the loop finishes.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let report = deploy::deploy_all(root, &config).context("deploy aborted")?;

    if json {
        print_json(&report)?;
    } else {
        for v in &report.deployed {
            println!("deployed '{v}'");
        }
        for f in &report.failed {
            tracing::warn!("deploy failed for '{}': {}", f.variant, f.detail);
        }
        if report.all_succeeded() {
            print_domain_guidance(&config);
        }
    }

    if !report.all_succeeded() {
        anyhow::bail!(
            "{} of {} targets failed to deploy",
            report.failed.len(),
            report.deployed.len() + report.failed.len()
        );
    }
    Ok(())
}

/// Each deployment starts on a generated URL; custom domains are assigned
/// manually in the Vercel dashboard afterwards.
fn print_domain_guidance(config: &Config) {
    println!("\nAll variants deployed. Assign a custom domain to each deployment:");
    let pairs: Vec<(String, String)> = Variant::deployable()
        .iter()
        .map(|v| {
            (
                format!("  {v}"),
                format!(
                    "{}/ (config: {})",
                    v.output_dir(&config.dist_dir),
                    v.deploy_config()
                ),
            )
        })
        .collect();
    print_kv(&pairs);
}
