use crate::domain::models::{CheckItem, CheckOutcome, Suite, SuiteReport, SuiteTally};
use crate::error::{Abort, DispatchError};
use crate::services::build::BuildSystem;
use crate::services::classifier::{classify, status_line};
use crate::services::output::{Console, Tone};
use crate::services::runner::run_check;

pub fn suite_summary(name: &str, tally: SuiteTally) -> String {
    if tally.passed == tally.total {
        format!("Passed ALL {name} Tests")
    } else {
        format!("Passed {} out of {} {name} Tests", tally.passed, tally.total)
    }
}

/// Runs every check of `suite` in declaration order and prints one status
/// line per check followed by the suite summary.
///
/// In debug mode the first failing check dumps its raw output and the whole
/// invocation stops with [`Abort::CheckFailed`]; later checks never run.
/// A console that can no longer be written to stops the suite as well.
pub fn execute(
    suite: &Suite,
    debug_mode: bool,
    build: &mut dyn BuildSystem,
    console: &mut Console,
) -> Result<SuiteReport, DispatchError> {
    tracing::info!(suite = %suite.name, checks = suite.checks.len(), debug_mode, "running suite");
    let mut report = SuiteReport {
        selector: suite.selector,
        name: suite.name.clone(),
        passed: 0,
        total: 0,
        checks: Vec::with_capacity(suite.checks.len()),
    };

    console.blank()?;
    for check_id in &suite.checks {
        let raw_output = run_check(build, check_id, &suite.location)?;
        let outcome = CheckOutcome {
            check_id: check_id.clone(),
            passed: classify(&raw_output),
            raw_output,
        };
        report.total += 1;
        if outcome.passed {
            report.passed += 1;
        }
        report.checks.push(CheckItem {
            check_id: outcome.check_id.clone(),
            passed: outcome.passed,
        });
        console.line(&status_line(&outcome.check_id, outcome.passed, console.palette()))?;

        if !outcome.passed && debug_mode {
            console.block(&outcome.raw_output)?;
            tracing::warn!(check = %outcome.check_id, "check failed in debug mode, stopping");
            return Err(Abort::CheckFailed {
                check_id: outcome.check_id,
                raw_output: outcome.raw_output,
            }
            .into());
        }
    }

    console.rule()?;
    console.toned(Tone::Emphasis, &suite_summary(&suite.name, report.tally()))?;
    tracing::info!(suite = %suite.name, passed = report.passed, total = report.total, "suite finished");
    Ok(report)
}
