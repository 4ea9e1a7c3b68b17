//! Verification harness for the primality checker.
//!
//! ## Reporter Trait
//!
//! The harness uses a `Reporter` trait to separate reporting from execution. This allows
//! for custom output formats (JSON, TAP, etc.) by implementing the trait.
//!
//! ## Design
//!
//! The harness owns a fixed, ordered table of justified test cases ([`SEED_CASES`]) and
//! makes a single straight-line pass over it: invoke the checker, compare actual against
//! expected, report the outcome, accumulate the summary. No state machine, no data flowing
//! back into the checker.

pub mod report;

pub use report::{ConsoleReporter, JsonReporter, Reporter};

use primecheck_core::{Candidate, is_prime};

// ============================================================================
// Test cases and outcomes
// ============================================================================

/// An immutable verification case: a candidate, the expected classification, and the
/// human-readable justification for that expectation.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub input: Candidate,
    pub expected: bool,
    pub justification: &'static str,
}

/// Per-case result, derived and ephemeral: it exists only for the duration of a run.
#[derive(Debug, Clone, Copy)]
pub struct CaseOutcome {
    /// 1-based position of the case in the table.
    pub index: usize,
    /// What the checker actually returned.
    pub actual: bool,
    /// Whether actual matched expected.
    pub passed: bool,
}

/// Summary of a harness run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// True when no case mismatched.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// The fixed verification table, built into the binary and never mutated.
///
/// Order matters: reports are emitted in table order with 1-based indices.
pub const SEED_CASES: &[TestCase] = &[
    TestCase {
        input: Candidate::Int(-10),
        expected: false,
        justification: "Negative numbers are not prime.",
    },
    TestCase {
        input: Candidate::Int(0),
        expected: false,
        justification: "Zero is not prime.",
    },
    TestCase {
        input: Candidate::Int(1),
        expected: false,
        justification: "One is not prime by definition.",
    },
    TestCase {
        input: Candidate::Int(2),
        expected: true,
        justification: "Smallest prime (even prime).",
    },
    TestCase {
        input: Candidate::Int(3),
        expected: true,
        justification: "Small odd prime.",
    },
    TestCase {
        input: Candidate::Int(4),
        expected: false,
        justification: "Small composite (even).",
    },
    TestCase {
        input: Candidate::Int(9),
        expected: false,
        justification: "Odd composite (small square).",
    },
    TestCase {
        input: Candidate::Int(17),
        expected: true,
        justification: "Small prime.",
    },
    TestCase {
        input: Candidate::Int(25),
        expected: false,
        justification: "Square of prime (5*5).",
    },
    TestCase {
        input: Candidate::Int(97),
        expected: true,
        justification: "Two-digit prime, near sqrt checks.",
    },
    TestCase {
        input: Candidate::Int(100),
        expected: false,
        justification: "Even composite (multiple of 2,5).",
    },
    TestCase {
        input: Candidate::Int(7919),
        expected: true,
        justification: "Larger prime (prime near 8000).",
    },
    TestCase {
        input: Candidate::Int(7920),
        expected: false,
        justification: "Large composite adjacent to a prime.",
    },
    TestCase {
        input: Candidate::Int(2_147_483_647),
        expected: true,
        justification: "Large known Mersenne prime (2^31-1).",
    },
    TestCase {
        input: Candidate::Float(2.5),
        expected: false,
        justification: "Non-integer input should not be prime.",
    },
];

// ============================================================================
// Runner
// ============================================================================

/// Run the checker over a table of cases, reporting each outcome in order.
///
/// Returns the accumulated summary. The reporter receives one `on_case_complete` call per
/// case (in table order) and a final `on_run_complete`.
pub fn run_cases<R: Reporter>(cases: &[TestCase], reporter: &mut R) -> RunSummary {
    reporter.on_collection_complete(cases.len());

    let mut passed = 0;
    let mut failed = 0;

    for (i, case) in cases.iter().enumerate() {
        let actual = is_prime(case.input);
        let outcome = CaseOutcome {
            index: i + 1,
            actual,
            passed: actual == case.expected,
        };

        tracing::debug!(
            input = %case.input,
            expected = case.expected,
            actual,
            "checked candidate"
        );

        if outcome.passed {
            passed += 1;
        } else {
            failed += 1;
        }

        reporter.on_case_complete(case, &outcome);
    }

    let summary = RunSummary {
        total: cases.len(),
        passed,
        failed,
    };
    reporter.on_run_complete(&summary);
    summary
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Reporter that records outcomes without formatting anything.
    #[derive(Default)]
    struct RecordingReporter {
        outcomes: Vec<CaseOutcome>,
        summary: Option<RunSummary>,
    }

    impl Reporter for RecordingReporter {
        fn on_case_complete(&mut self, _case: &TestCase, outcome: &CaseOutcome) {
            self.outcomes.push(*outcome);
        }

        fn on_run_complete(&mut self, summary: &RunSummary) {
            self.summary = Some(*summary);
        }
    }

    #[test]
    fn test_seed_table_shape() {
        assert_eq!(SEED_CASES.len(), 15);
        // The table opens with the negative case and closes with the float case.
        assert_eq!(SEED_CASES[0].input, Candidate::Int(-10));
        assert_eq!(SEED_CASES[14].input, Candidate::Float(2.5));
        assert_eq!(SEED_CASES.iter().filter(|c| c.expected).count(), 5);
    }

    #[test]
    fn test_seed_table_all_pass() {
        let mut reporter = RecordingReporter::default();
        let summary = run_cases(SEED_CASES, &mut reporter);

        assert!(summary.all_passed());
        assert_eq!(summary.total, 15);
        assert_eq!(summary.passed, 15);
        assert_eq!(summary.failed, 0);
        assert_eq!(reporter.outcomes.len(), 15);
        // Indices are 1-based and in table order.
        assert_eq!(reporter.outcomes[0].index, 1);
        assert_eq!(reporter.outcomes[14].index, 15);
        assert!(reporter.summary.is_some());
    }

    #[test]
    fn test_inverted_expectation_fails_exactly_one_case() {
        let mut cases = SEED_CASES.to_vec();
        cases[7].expected = !cases[7].expected;

        let mut reporter = RecordingReporter::default();
        let summary = run_cases(&cases, &mut reporter);

        assert!(!summary.all_passed());
        assert_eq!(summary.passed, 14);
        assert_eq!(summary.failed, 1);
        for outcome in &reporter.outcomes {
            assert_eq!(outcome.passed, outcome.index != 8);
        }
    }
}
