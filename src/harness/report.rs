//! Report formatting for harness runs.
//!
//! The console format mirrors the classic justified-table layout, one line per case:
//!
//! ```text
//! Test 1: input=-10          expected=false got=false -> PASS -- Negative numbers are not prime.
//! ```
//!
//! followed by a blank line and the summary (`All tests passed.` or `Some tests failed.`).

use std::io::{self, Write};

use serde_json::json;

use super::{CaseOutcome, RunSummary, TestCase};

/// Trait for reporting harness results.
///
/// Implement this trait to customize output format (JSON, TAP, etc.)
pub trait Reporter {
    /// Called once before the first case, with the table size.
    fn on_collection_complete(&mut self, _case_count: usize) {}

    /// Called after each case, in table order.
    fn on_case_complete(&mut self, case: &TestCase, outcome: &CaseOutcome);

    /// Called once after the last case.
    fn on_run_complete(&mut self, summary: &RunSummary);
}

// ============================================================================
// Console reporter
// ============================================================================

/// Field width for the input column (fits the widest seed value, 2147483647).
const INPUT_WIDTH: usize = 12;
/// Field width for the expected/got columns (`false` is the widest value).
const BOOL_WIDTH: usize = 5;

/// Default text reporter: one aligned line per case plus a summary line.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_case_complete(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        // Pre-render the input: width flags apply to strings, not custom Display impls.
        let input = case.input.to_string();
        let _ = writeln!(
            self.out,
            "Test {}: input={:<iw$} expected={:<bw$} got={:<bw$} -> {} -- {}",
            outcome.index,
            input,
            case.expected,
            outcome.actual,
            status,
            case.justification,
            iw = INPUT_WIDTH,
            bw = BOOL_WIDTH,
        );
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let verdict = if summary.all_passed() {
            "All tests passed."
        } else {
            "Some tests failed."
        };
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "{}", verdict);
    }
}

// ============================================================================
// JSON reporter
// ============================================================================

/// Machine-readable reporter: accumulates per-case records and emits a single JSON
/// document on completion.
pub struct JsonReporter<W: Write> {
    out: W,
    cases: Vec<serde_json::Value>,
}

impl JsonReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cases: Vec::new(),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn on_collection_complete(&mut self, case_count: usize) {
        self.cases.reserve(case_count);
    }

    fn on_case_complete(&mut self, case: &TestCase, outcome: &CaseOutcome) {
        self.cases.push(json!({
            "index": outcome.index,
            "input": case.input.to_string(),
            "expected": case.expected,
            "got": outcome.actual,
            "passed": outcome.passed,
            "justification": case.justification,
        }));
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        let doc = json!({
            "cases": std::mem::take(&mut self.cases),
            "summary": {
                "total": summary.total,
                "passed": summary.passed,
                "failed": summary.failed,
                "all_passed": summary.all_passed(),
            },
        });
        // to_string_pretty only fails on non-string map keys, which json! cannot produce.
        if let Ok(rendered) = serde_json::to_string_pretty(&doc) {
            let _ = writeln!(self.out, "{}", rendered);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::super::{SEED_CASES, run_cases};
    use super::*;

    fn console_report(cases: &[TestCase]) -> String {
        let mut buf = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut buf);
        run_cases(cases, &mut reporter);
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn test_console_line_layout() {
        let report = console_report(SEED_CASES);
        let first = report.lines().next().unwrap_or_default();
        assert_eq!(
            first,
            "Test 1: input=-10          expected=false got=false -> PASS -- Negative numbers are not prime."
        );
    }

    #[test]
    fn test_console_true_columns_stay_aligned() {
        let report = console_report(SEED_CASES);
        let line = report.lines().nth(3).unwrap_or_default();
        // `true` pads to the same width as `false`.
        assert_eq!(
            line,
            "Test 4: input=2            expected=true  got=true  -> PASS -- Smallest prime (even prime)."
        );
    }

    #[test]
    fn test_console_summary_line() {
        let report = console_report(SEED_CASES);
        assert!(report.ends_with("\nAll tests passed.\n"));
    }

    #[test]
    fn test_json_report_shape() {
        let mut buf = Vec::new();
        let mut reporter = JsonReporter::new(&mut buf);
        run_cases(SEED_CASES, &mut reporter);

        let doc: serde_json::Value =
            serde_json::from_slice(&buf).expect("reporter should emit valid JSON");
        let cases = doc["cases"].as_array().expect("cases array");
        assert_eq!(cases.len(), 15);
        assert_eq!(cases[0]["input"], "-10");
        assert_eq!(cases[0]["passed"], true);
        assert_eq!(cases[14]["input"], "2.5");
        assert_eq!(doc["summary"]["total"], 15);
        assert_eq!(doc["summary"]["all_passed"], true);
    }
}
