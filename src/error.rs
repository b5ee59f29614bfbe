use crate::domain::models::AbortReport;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("failed to read suite table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid suite table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate suite selector: {0}")]
    DuplicateSelector(u32),
    #[error("suite selectors start at 1, got 0 for {0:?}")]
    ZeroSelector(String),
    #[error("suite {0} has an empty name")]
    EmptyName(u32),
    #[error("suite alias {0:?} is used more than once")]
    DuplicateAlias(String),
    #[error("suite alias {0:?} clashes with a command token or selector")]
    ReservedAlias(String),
}

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failed to run `{program} {arg}`: {source}")]
    Spawn {
        program: String,
        arg: String,
        source: std::io::Error,
    },
    #[error("failed to collect output of `{program} {arg}`: {source}")]
    Capture {
        program: String,
        arg: String,
        source: std::io::Error,
    },
}

/// Early termination of a whole invocation. Returned up through the
/// executor and dispatcher so the caller decides how to exit.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Abort {
    #[error("errors encountered in compilation")]
    BuildFailed { output: String },
    #[error("check {check_id} failed in debug mode")]
    CheckFailed { check_id: String, raw_output: String },
}

impl Abort {
    pub fn report(&self) -> AbortReport {
        match self {
            Abort::BuildFailed { output } => AbortReport {
                kind: "build_failed".to_string(),
                check_id: None,
                output: output.clone(),
            },
            Abort::CheckFailed {
                check_id,
                raw_output,
            } => AbortReport {
                kind: "check_failed".to_string(),
                check_id: Some(check_id.clone()),
                output: raw_output.clone(),
            },
        }
    }
}

/// Anything that stops a dispatch early: a deliberate abort or a harness
/// fault such as the build tool not being runnable or stdout being closed.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Abort(#[from] Abort),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
