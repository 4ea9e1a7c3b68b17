//! Provide the shared, pure primality semantics for the primecheck CLI and harness.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both:
//! - the CLI can use to classify a single candidate, and
//! - the verification harness can use to drive the fixed test table.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no CLI-specific types.
//! - Current scope: the candidate value model (integer or float), candidate parsing, and the
//!   trial-division primality kernel with the 6k ± 1 divisor wheel.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Represent a value submitted for primality classification.
///
/// Candidates are semantically integers, but the classifier also accepts float-typed values and
/// classifies them as not prime rather than rejecting them. That policy is type-based: a float
/// never certifies as prime, even when its value is whole (`7.0` is not prime here).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate {
    Int(i64),
    Float(f64),
}

impl Candidate {
    /// Return the integer payload, or `None` for float candidates.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Candidate::Int(n) => Some(*n),
            Candidate::Float(_) => None,
        }
    }
}

impl From<i64> for Candidate {
    fn from(n: i64) -> Self {
        Candidate::Int(n)
    }
}

impl From<f64> for Candidate {
    fn from(f: f64) -> Self {
        Candidate::Float(f)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Int(n) => write!(f, "{}", n),
            Candidate::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Error returned when a string cannot be read as a numeric candidate.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{input}` is not a numeric candidate (expected an integer or a float)")]
pub struct ParseCandidateError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl FromStr for Candidate {
    type Err = ParseCandidateError;

    /// Parse a candidate, preferring the integer reading.
    ///
    /// `"17"` parses as `Int(17)`, `"2.5"` as `Float(2.5)`. Anything that is neither an `i64`
    /// nor an `f64` is rejected. Values outside the `i64` range that still parse as floats
    /// (e.g. `"1e300"`) come back as float candidates and therefore classify as not prime.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Candidate::Int(n));
        }
        if let Ok(x) = s.parse::<f64>() {
            return Ok(Candidate::Float(x));
        }
        Err(ParseCandidateError { input: s.to_string() })
    }
}

/// Classify a candidate value.
///
/// Returns `true` if and only if the candidate is an integer and a mathematical prime. Float
/// candidates always classify as `false`. Never panics; malformed inputs degrade to `false`
/// rather than failing.
pub fn is_prime(candidate: Candidate) -> bool {
    match candidate {
        Candidate::Int(n) => is_prime_i64(n),
        // Type-based policy: floats are not integers, so never prime.
        Candidate::Float(_) => false,
    }
}

/// Integer primality kernel: trial division with the 6k ± 1 divisor wheel.
///
/// ## Algorithm
///
/// 1. `n <= 1` is not prime; 2 and 3 are prime.
/// 2. Multiples of 2 or 3 are composite.
/// 3. Remaining candidates are tested against divisors `i` and `i + 2` for
///    `i = 5, 11, 17, ...` up to `floor(sqrt(n))`. All primes above 3 have the form
///    `6k - 1` or `6k + 1`, so this covers every divisor the mod-2/mod-3 checks left.
///
/// The divisor bound uses the integer-domain `isqrt`, so it is exact for the full `i64`
/// range; a float `sqrt` can round the bound off by one near large squares.
pub fn is_prime_i64(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    // n > 3 here, so the widening cast is lossless.
    let n = n as u64;
    let limit = n.isqrt();
    let mut i = 5u64;
    while i <= limit {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
