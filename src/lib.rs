//! delivery-planner core
//!
//! Orders the delivery stops of a single courier into a visiting sequence
//! using a priority-aware nearest-neighbor heuristic over great-circle
//! distances. Fetching stops and persisting the resulting plan are the
//! caller's concern; this crate is pure computation.

pub mod traits;
pub mod haversine;
pub mod sequencer;
pub mod planner;
pub mod stop;
