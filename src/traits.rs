//! Core domain traits for the delivery planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// A stop is a single delivery destination to be routed.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Delivery coordinates (lat, lng) in decimal degrees.
    fn location(&self) -> (f64, f64);

    /// Priority stops are visited before all normal stops.
    fn is_priority(&self) -> bool;
}

/// Provides the distance in kilometers between two locations.
///
/// Implementations must be symmetric and return zero for identical points.
pub trait DistanceMetric {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

/// Wall-clock capability for timestamping plans.
///
/// Injected so tests can supply a fixed instant.
pub trait Clock {
    /// Current time as unix seconds.
    fn now_unix(&self) -> i64;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}
