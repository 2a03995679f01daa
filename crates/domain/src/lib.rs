//! # primer-domain
//!
//! Pure domain model for the primer demonstration tour.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **Animal** record (the one stateful value in the system)
//! - Define the **Calculator** (stateless arithmetic operations)
//! - Provide the everyday helpers: greeting and circle geometry
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary, and it performs
//! no IO — reading the wall clock is the caller's job, expressed as a port
//! in the `app` crate.

pub mod error;
pub mod time;

pub mod animal;
pub mod calculator;
pub mod geometry;
pub mod greeting;
