// Check reporting - PASSED/FAILED lines on stdout
//
// A failed check is a recorded result, never an error: the run continues,
// the exit code stays zero, and the line format is the contract.

/// A single recorded check outcome.
#[derive(Debug, Clone)]
pub struct Check {
    /// The exact line printed to stdout for this check
    pub line: String,
    pub passed: bool,
}

/// Accumulates check outcomes for one script run, printing each line as it
/// is recorded and retaining it for inspection by tests.
#[derive(Debug, Default)]
pub struct Report {
    checks: Vec<Check>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a named verification, printing
    /// `<name> verification PASSED` or `<name> verification FAILED`.
    pub fn check(&mut self, name: &str, passed: bool) {
        let verdict = if passed { "PASSED" } else { "FAILED" };
        self.push(format!("{name} verification {verdict}"), passed);
    }

    /// Records a free-form check, printing `pass_line` or `fail_line`.
    pub fn note(&mut self, passed: bool, pass_line: &str, fail_line: &str) {
        let line = if passed { pass_line } else { fail_line };
        self.push(line.to_string(), passed);
    }

    fn push(&mut self, line: String, passed: bool) {
        println!("{line}");
        self.checks.push(Check { line, passed });
    }

    /// Lines printed so far, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|check| check.line.as_str())
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|check| check.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}
