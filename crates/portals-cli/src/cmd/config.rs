use crate::output::{print_json, print_kv};
use anyhow::Context;
use clap::Subcommand;
use portals_core::config::{Config, WarnLevel};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (defaults merged with portals.yaml)
    Show,

    /// Validate the config for common mistakes
    Check,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Check => check(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    if json {
        return print_json(&config);
    }

    let pairs = vec![
        (
            "build".to_string(),
            format!("{} {}", config.build.program, config.build.args.join(" ")),
        ),
        ("build env var".to_string(), config.build.env_var.clone()),
        (
            "deploy".to_string(),
            format!("{} {}", config.deploy.program, config.deploy.args.join(" ")),
        ),
        ("dist dir".to_string(), config.dist_dir.clone()),
    ];
    print_kv(&pairs);
    Ok(())
}

fn check(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    let has_errors = warnings.iter().any(|w| w.level == WarnLevel::Error);
    if has_errors {
        anyhow::bail!("config validation found errors");
    }

    Ok(())
}
