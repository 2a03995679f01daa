//! Port definitions — traits the outside world implements.
//!
//! Ports are the boundaries between the application core and its
//! environment. The demonstration touches the environment in exactly one
//! place — reading the wall clock — so that read goes through a trait and
//! stays swappable in tests.

use primer_domain::time::Timestamp;

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current time as seen by this clock.
    fn now(&self) -> Timestamp;
}
