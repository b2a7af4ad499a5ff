use anyhow::Context;
use portals_core::build;
use portals_core::config::Config;
use portals_core::detect::{detect, Signals};
use portals_core::Variant;
use std::path::Path;

/// Single-variant build. Without `--variant` the detector picks one from
/// the ambient deployment environment.
pub fn run(root: &Path, variant: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let variant = match variant {
        Some(s) => s.parse::<Variant>()?,
        None => {
            let signals = Signals::from_env();
            let detected = detect(&signals);
            tracing::debug!(
                "detected '{detected}' from url='{}' project='{}' branch='{}'",
                signals.url,
                signals.project,
                signals.branch
            );
            detected
        }
    };

    println!("Building '{variant}'...");
    build::build_variant(root, &config, variant)
        .with_context(|| format!("build failed for '{variant}'"))?;
    println!("Built '{variant}'.");
    Ok(())
}

/// Batch build: every buildable variant in order, each output relocated to
/// its variant-qualified directory. First failure halts.
pub fn run_all(root: &Path) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let variants: Vec<String> = Variant::buildable().iter().map(|v| v.to_string()).collect();
    println!("Building variants: {}", variants.join(", "));

    build::build_all(root, &config).context("batch build failed")?;

    for &v in Variant::buildable() {
        println!("  {v} → {}/", v.output_dir(&config.dist_dir));
    }
    println!("All variants built.");
    Ok(())
}
