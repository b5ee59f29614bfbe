use crate::services::output::{Palette, Tone};

/// Any occurrence, anywhere, case-sensitive. Deliberately loose: suites are
/// tuned to this and tightening it changes which checks pass.
pub const SUCCESS_MARKER: &str = "pass";
/// Column the pass/fail decoration starts at, counted after `Test `.
pub const STATUS_COLUMN: usize = 65;

pub fn classify(raw_output: &str) -> bool {
    raw_output.contains(SUCCESS_MARKER)
}

pub fn padding(check_id: &str) -> String {
    " ".repeat(STATUS_COLUMN.saturating_sub(check_id.chars().count()))
}

pub fn status_line(check_id: &str, passed: bool, palette: Palette) -> String {
    let decoration = if passed {
        palette.paint(Tone::Pass, " Passed!")
    } else {
        palette.paint(Tone::Fail, " Failed!")
    };
    format!("Test {check_id}{}{decoration}", padding(check_id))
}
