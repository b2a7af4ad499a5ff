use crate::config::Config;
use crate::variant::Variant;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "portals.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// The build tool's conventional output directory, before relocation.
pub fn dist_path(root: &Path, config: &Config) -> PathBuf {
    root.join(&config.dist_dir)
}

/// The variant-qualified output directory the deployer consumes.
pub fn output_path(root: &Path, config: &Config, variant: Variant) -> PathBuf {
    root.join(variant.output_dir(&config.dist_dir))
}

/// The per-variant deployment config file.
pub fn deploy_config_path(root: &Path, variant: Variant) -> PathBuf {
    root.join(variant.deploy_config())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        let config = Config::default();
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/portals.yaml"));
        assert_eq!(dist_path(root, &config), PathBuf::from("/tmp/proj/dist"));
        assert_eq!(
            output_path(root, &config, Variant::Admin),
            PathBuf::from("/tmp/proj/dist-admin")
        );
        assert_eq!(
            output_path(root, &config, Variant::Base),
            PathBuf::from("/tmp/proj/dist")
        );
        assert_eq!(
            deploy_config_path(root, Variant::Tenant),
            PathBuf::from("/tmp/proj/vercel-tenant.json")
        );
        assert_eq!(
            deploy_config_path(root, Variant::Base),
            PathBuf::from("/tmp/proj/vercel.json")
        );
    }
}
