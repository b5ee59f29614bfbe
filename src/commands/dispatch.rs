use crate::commands::help::print_help;
use crate::domain::models::{RunReport, Suite};
use crate::error::{Abort, DispatchError};
use crate::registry::Registry;
use crate::services::build::BuildSystem;
use crate::services::executor::execute;
use crate::services::output::{Console, Tone};

const ERROR_MARKERS: &[&str] = &["error", "Error"];
const WARNING_MARKERS: &[&str] = &["warning", "Warning"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'r> {
    Help,
    Clean,
    Make,
    All,
    Debug,
    Suite(&'r Suite),
    Unknown,
}

pub fn parse_token<'r>(registry: &'r Registry, raw: &str) -> Token<'r> {
    match raw {
        "help" => Token::Help,
        "clean" => Token::Clean,
        "make" => Token::Make,
        "all" => Token::All,
        "d" | "v" | "verbose" | "debug" => Token::Debug,
        other => registry.resolve(other).map_or(Token::Unknown, Token::Suite),
    }
}

pub fn grand_summary(report: &RunReport) -> Option<String> {
    let totals = report.totals;
    if totals.total == 0 {
        return None;
    }
    Some(if totals.all_passed() {
        "Passed ALL Tests!".to_string()
    } else {
        format!("Passed {} out of {} Tests!", totals.passed, totals.total)
    })
}

/// Processes tokens left to right for one invocation, keeping the debug
/// flag and the run totals for that invocation only.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    build: &'a mut dyn BuildSystem,
    console: &'a mut Console,
    report: RunReport,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        registry: &'a Registry,
        build: &'a mut dyn BuildSystem,
        console: &'a mut Console,
    ) -> Self {
        Self {
            registry,
            build,
            console,
            report: RunReport {
                project: registry.project.clone(),
                ..RunReport::default()
            },
        }
    }

    pub fn into_report(self) -> RunReport {
        self.report
    }

    /// Runs every token, then prints the grand summary. An abort stops
    /// processing at once, is recorded in the report and skips the summary.
    pub fn dispatch<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), DispatchError> {
        for raw in tokens {
            if let Err(err) = self.apply(raw.as_ref()) {
                if let DispatchError::Abort(abort) = &err {
                    self.report.aborted = Some(abort.report());
                }
                return Err(err);
            }
        }
        if let Some(summary) = grand_summary(&self.report) {
            self.console.blank()?;
            self.console.rule()?;
            self.console.toned(Tone::Emphasis, &summary)?;
        }
        Ok(())
    }

    fn apply(&mut self, raw: &str) -> Result<(), DispatchError> {
        let registry = self.registry;
        match parse_token(registry, raw) {
            Token::Help => print_help(registry, self.console)?,
            Token::Clean => self.clean()?,
            Token::Make => self.make()?,
            Token::All => {
                self.clean()?;
                self.make()?;
            }
            Token::Debug => {
                tracing::debug!(token = raw, "debug mode on");
                self.report.debug = true;
            }
            Token::Suite(suite) => {
                let suite_report = execute(suite, self.report.debug, self.build, self.console)?;
                self.report.totals.add(suite_report.tally());
                self.report.suites.push(suite_report);
            }
            Token::Unknown => {
                tracing::debug!(token = raw, "unrecognized token, showing help");
                print_help(registry, self.console)?;
            }
        }
        Ok(())
    }

    fn clean(&mut self) -> Result<(), DispatchError> {
        self.console.blank()?;
        self.console.line("Deleting previous build...")?;
        let output = self.build.clean()?;
        tracing::debug!(bytes = output.len(), "clean finished");
        Ok(())
    }

    fn make(&mut self) -> Result<(), DispatchError> {
        self.console
            .line(&format!("Compiling {}...", self.registry.project))?;
        let output = self.build.build_all()?;

        if ERROR_MARKERS.iter().any(|m| output.contains(m)) {
            self.console.block(&output)?;
            self.console.toned(
                Tone::Fail,
                "Errors encountered in compilation. Will now Stop!",
            )?;
            tracing::error!("build reported errors, stopping");
            return Err(Abort::BuildFailed { output }.into());
        }
        if WARNING_MARKERS.iter().any(|m| output.contains(m)) {
            self.console.block(&output)?;
            self.console
                .toned(Tone::Fail, "Warnings encountered in compilation.")?;
            tracing::warn!("build reported warnings");
        }
        Ok(())
    }
}
