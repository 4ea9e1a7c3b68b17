#![forbid(unsafe_code)]
//! Primecheck
//!
//! A deterministic primality checker paired with a self-verifying harness: a fixed,
//! justified table of candidates is driven through the checker and reported case by
//! case. The checker itself lives in `primecheck_core` so it stays a pure,
//! dependency-light function; this crate provides the harness and the CLI around it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;
pub mod version;

pub use primecheck_core::{Candidate, ParseCandidateError, is_prime, is_prime_i64};

pub use harness::{ConsoleReporter, JsonReporter, Reporter, RunSummary, SEED_CASES, TestCase, run_cases};
