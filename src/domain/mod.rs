//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep suite, outcome and report structs in one place.
//! - Avoid cyclic imports between the registry, services and commands.
//! - Make JSON report changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no process or filesystem side effects.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` output. Keep them in sync
//! with `docs/contracts/run_report.schema.json`.

pub mod models;
