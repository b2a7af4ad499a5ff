use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("'{0}' not found on PATH: install it or point the config at another program")]
    ProgramNotFound(String),

    #[error("failed to spawn {program}: {detail}")]
    SpawnFailed { program: String, detail: String },

    #[error("{program} exited with {status} while building '{variant}'")]
    BuildFailed {
        program: String,
        status: String,
        variant: String,
    },

    #[error("build output directory not found: {path} (expected after building '{variant}')")]
    MissingBuildOutput { variant: String, path: PathBuf },

    #[error("output directory missing for '{variant}': {path} (run 'portals build-all' first)")]
    MissingOutputDir { variant: String, path: PathBuf },

    #[error("deploy config missing for '{variant}': {path}")]
    MissingDeployConfig { variant: String, path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PortalError>;
