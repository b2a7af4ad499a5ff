use crate::error::Result;
use crate::paths;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// BuildConfig
// ---------------------------------------------------------------------------

/// How to invoke the external build tool. `{script}` in `args` expands to
/// the variant's package.json script name (`build:<variant>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_program")]
    pub program: String,
    #[serde(default = "default_build_args")]
    pub args: Vec<String>,
    /// Environment variable the build tool reads to pick variant-specific
    /// configuration. Set on the child process only.
    #[serde(default = "default_env_var")]
    pub env_var: String,
}

fn default_build_program() -> String {
    "npm".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["run".to_string(), "{script}".to_string()]
}

fn default_env_var() -> String {
    "APP_VARIANT".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_build_program(),
            args: default_build_args(),
            env_var: default_env_var(),
        }
    }
}

impl BuildConfig {
    pub fn args_for(&self, variant: Variant) -> Vec<String> {
        let script = variant.build_script();
        self.args
            .iter()
            .map(|a| a.replace("{script}", &script))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// DeployConfig
// ---------------------------------------------------------------------------

/// How to invoke the external deployment command. `{config}` in `args`
/// expands to the variant's deployment config file path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_deploy_program")]
    pub program: String,
    #[serde(default = "default_deploy_args")]
    pub args: Vec<String>,
}

fn default_deploy_program() -> String {
    "vercel".to_string()
}

fn default_deploy_args() -> Vec<String> {
    vec![
        "deploy".to_string(),
        "--prebuilt".to_string(),
        "--local-config".to_string(),
        "{config}".to_string(),
        "--prod".to_string(),
        "--yes".to_string(),
    ]
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            program: default_deploy_program(),
            args: default_deploy_args(),
        }
    }
}

impl DeployConfig {
    pub fn args_for(&self, config_file: &Path) -> Vec<String> {
        let config_str = config_file.to_string_lossy();
        self.args
            .iter()
            .map(|a| a.replace("{config}", &config_str))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub deploy: DeployConfig,
    /// The build tool's conventional output directory name.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            deploy: DeployConfig::default(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Config {
    /// Load `portals.yaml` from the project root. A missing file is not an
    /// error: the defaults (npm build scripts, vercel deploys) apply.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Config::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.build.program.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "build.program is empty".to_string(),
            });
        }
        if self.deploy.program.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "deploy.program is empty".to_string(),
            });
        }
        if self.dist_dir.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "dist_dir is empty".to_string(),
            });
        }

        if !self.build.args.iter().any(|a| a.contains("{script}")) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "build.args has no {script} placeholder — every variant will run \
                          the same build command"
                    .to_string(),
            });
        }
        if !self.deploy.args.iter().any(|a| a.contains("{config}")) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "deploy.args has no {config} placeholder — every variant will \
                          deploy with the same config"
                    .to_string(),
            });
        }
        if self.build.env_var.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "build.env_var is empty — the build tool will not know which \
                          variant it is compiling"
                    .to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.dist_dir, "dist");
        assert_eq!(parsed.build.program, "npm");
        assert_eq!(parsed.deploy.program, "vercel");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("portals.yaml"),
            "build:\n  program: pnpm\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.build.program, "pnpm");
        assert_eq!(cfg.build.args, vec!["run", "{script}"]);
        assert_eq!(cfg.deploy.program, "vercel");
        assert_eq!(cfg.dist_dir, "dist");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("portals.yaml"), "build: [not, a, map]\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn build_args_expand_script() {
        let cfg = BuildConfig::default();
        assert_eq!(
            cfg.args_for(Variant::Tenant),
            vec!["run", "build:tenant"]
        );
    }

    #[test]
    fn deploy_args_expand_config() {
        let cfg = DeployConfig::default();
        let args = cfg.args_for(Path::new("vercel-admin.json"));
        assert!(args.contains(&"vercel-admin.json".to_string()));
        assert!(args.contains(&"--prebuilt".to_string()));
    }

    #[test]
    fn validate_default_config_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_empty_build_program() {
        let mut cfg = Config::default();
        cfg.build.program = "  ".to_string();
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("build.program")));
    }

    #[test]
    fn validate_missing_script_placeholder() {
        let mut cfg = Config::default();
        cfg.build.args = vec!["run".to_string(), "build".to_string()];
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("{script}")));
    }

    #[test]
    fn validate_missing_config_placeholder() {
        let mut cfg = Config::default();
        cfg.deploy.args = vec!["deploy".to_string()];
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("{config}")));
    }
}
