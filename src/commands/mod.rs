//! Command handler layer.
//!
//! This module owns token dispatch and help text.
//!
//! ## Files
//! - `dispatch.rs` — token parsing, lifecycle verbs, run totals.
//! - `help.rs` — usage text built from the suite registry.
//!
//! ## Principles
//! - Interpret tokens here.
//! - Delegate building, running and classifying to `services/*`.
//! - Keep output wording stable; scripts grep it.

pub mod dispatch;
pub mod help;

pub use dispatch::Dispatcher;
