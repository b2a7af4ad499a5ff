use crate::output::print_json;
use portals_core::detect::{detect, Signals};

/// Print the variant the ambient deployment environment resolves to.
/// Explicit overrides replace individual signals, which keeps the detector
/// testable without faking the whole environment.
pub fn run(
    url: Option<String>,
    project: Option<String>,
    branch: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut signals = Signals::from_env();
    if let Some(url) = url {
        signals.url = url;
    }
    if let Some(project) = project {
        signals.project = project;
    }
    if let Some(branch) = branch {
        signals.branch = branch;
    }

    let variant = detect(&signals);

    if json {
        let value = serde_json::json!({
            "variant": variant,
            "signals": {
                "url": signals.url,
                "project": signals.project,
                "branch": signals.branch,
            },
        });
        return print_json(&value);
    }

    println!("{variant}");
    Ok(())
}
