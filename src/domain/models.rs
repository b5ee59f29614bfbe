use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A named, ordered group of checks picked by one selector token.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Suite {
    pub selector: u32,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Directory, relative to the build dir, holding each check's
    /// `<check_id>.result` artifact. Always ends with `/`.
    pub location: String,
    pub checks: Vec<String>,
}

/// Result of running a single check. Never persisted.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check_id: String,
    pub passed: bool,
    pub raw_output: String,
}

/// Running pass counts for one invocation. Only ever grows.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub total: usize,
    pub passed: usize,
}

impl RunTotals {
    pub fn add(&mut self, tally: SuiteTally) {
        self.total += tally.total;
        self.passed += tally.passed;
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteTally {
    pub passed: usize,
    pub total: usize,
}

#[derive(Serialize, Clone, Debug)]
pub struct CheckItem {
    pub check_id: String,
    pub passed: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct SuiteReport {
    pub selector: u32,
    pub name: String,
    pub passed: usize,
    pub total: usize,
    pub checks: Vec<CheckItem>,
}

impl SuiteReport {
    pub fn tally(&self) -> SuiteTally {
        SuiteTally {
            passed: self.passed,
            total: self.total,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct AbortReport {
    /// `build_failed` or `check_failed`.
    pub kind: String,
    pub check_id: Option<String>,
    pub output: String,
}

#[derive(Serialize, Clone, Debug, Default)]
pub struct RunReport {
    pub project: String,
    pub debug: bool,
    pub suites: Vec<SuiteReport>,
    pub totals: RunTotals,
    pub aborted: Option<AbortReport>,
}

impl RunReport {
    pub fn ok(&self) -> bool {
        self.aborted.is_none() && self.totals.all_passed()
    }
}
