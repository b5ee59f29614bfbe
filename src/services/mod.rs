//! Service layer containing the harness logic and its side effects.
//!
//! ## Service map
//! - `build.rs` — `BuildSystem` seam and the `make`-backed implementation.
//! - `runner.rs` — cache invalidation followed by one check run.
//! - `classifier.rs` — pass/fail verdict and the per-check status line.
//! - `executor.rs` — runs a whole suite and prints its summary.
//! - `output.rs` — console writer, colour palette, JSON report printing.
//!
//! ## Conventions
//! - External processes are only started from `build.rs`.
//! - Early termination is returned as a value, never a process exit.
//! - Keep command handlers thin; delegate to services.

pub mod build;
pub mod classifier;
pub mod executor;
pub mod output;
pub mod runner;
