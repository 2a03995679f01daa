//! # primer-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port traits** the outside world must implement:
//!   - `Clock` — read the current wall-clock time
//! - Provide **in-process infrastructure** that doesn't need wiring:
//!   - `SystemClock` — the real `Clock`
//! - Define the use-cases:
//!   - `Demo` — run the full demonstration sequence and report its output
//!
//! ## Dependency rule
//! Depends on `primer-domain` only. The binary depends on *this* crate,
//! not the reverse.

pub mod clock;
pub mod demo;
pub mod ports;
