use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_MAKE: &str = "make";

#[derive(Parser, Debug)]
#[command(
    name = "pintgrade",
    version,
    about = "Pintos grader: builds the kernel, runs test suites and summarizes results",
    after_help = "Tokens are processed left to right, e.g. `pintgrade all 1 2` or `pintgrade debug 3`.\nRun `pintgrade help` for the list of suites."
)]
pub struct Cli {
    #[arg(long, help = "Output a machine-readable JSON run report")]
    pub json: bool,
    #[arg(long, help = "Disable ANSI colors (also honored via NO_COLOR)")]
    pub no_color: bool,
    #[arg(long, help = "Exit with status 1 when any check failed")]
    pub strict: bool,
    #[arg(long, default_value = ".", help = "Directory the build runs in")]
    pub dir: PathBuf,
    #[arg(long, default_value = DEFAULT_MAKE, help = "Build tool to invoke")]
    pub make: String,
    #[arg(long, value_enum, default_value_t = Profile::Threads)]
    pub profile: Profile,
    #[arg(long, help = "Load suites from a TOML table instead of --profile")]
    pub registry: Option<PathBuf>,
    #[arg(
        value_name = "TOKEN",
        help = "help | clean | make | all | d | v | verbose | debug | <suite selector or alias>"
    )]
    pub tokens: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Profile {
    Threads,
    Userprog,
}
