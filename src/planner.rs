//! Route planner (priority-aware two-phase nearest-neighbor).

use serde::Serialize;
use tracing::debug;

use crate::sequencer::sequence;
use crate::traits::{Clock, DistanceMetric, Stop};

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Assumed average driving speed in km/h for the travel-time estimate.
    pub speed_kmh: f64,
    /// Fixed handling overhead per stop, in minutes.
    pub handling_minutes: i64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            speed_kmh: 30.0, // urban average
            handling_minutes: 5,
        }
    }
}

/// One entry of the planned route, in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint<I> {
    pub latitude: f64,
    pub longitude: f64,
    pub stop_id: I,
}

/// Route-level metadata captured at planning time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata<I> {
    /// Courier start location (lat, lng).
    pub origin: (f64, f64),
    /// Stop locations and ids in visiting order.
    pub waypoints: Vec<Waypoint<I>>,
    /// Unix timestamp of when the plan was computed.
    pub planned_at: i64,
}

/// The finalized visiting order plus aggregate estimates.
///
/// Immutable once built; the caller persists it (route record plus one
/// sequenced-stop record per entry) and never feeds it back into planning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "S: Serialize, S::Id: Serialize"))]
pub struct RoutePlan<S: Stop> {
    /// Stops in final visiting order, priority stops first.
    pub stops: Vec<S>,
    /// Total great-circle distance in km from origin through every stop,
    /// rounded to 2 decimal places.
    pub total_distance_km: f64,
    /// Estimated completion time in whole minutes.
    pub estimated_minutes: i64,
    /// `None` when the input had no stops.
    pub metadata: Option<RouteMetadata<S::Id>>,
}

/// Plans the visiting order for one courier's stops.
///
/// Priority stops are sequenced first from `origin`; normal stops are then
/// sequenced from the last priority stop (or from `origin` when there are
/// none). Priority deliveries therefore always precede normal ones,
/// regardless of geometric proximity.
pub fn plan<S, M, C>(
    origin: (f64, f64),
    stops: Vec<S>,
    metric: &M,
    clock: &C,
    options: PlanOptions,
) -> RoutePlan<S>
where
    S: Stop,
    M: DistanceMetric,
    C: Clock,
{
    if stops.is_empty() {
        return RoutePlan {
            stops: Vec::new(),
            total_distance_km: 0.0,
            estimated_minutes: 0,
            metadata: None,
        };
    }

    let (priority, normal): (Vec<S>, Vec<S>) = stops.into_iter().partition(|s| s.is_priority());
    debug!(priority = priority.len(), normal = normal.len(), "partitioned stops");

    let ordered_priority = sequence(metric, origin, priority);

    let chain_start = ordered_priority
        .last()
        .map(|stop| stop.location())
        .unwrap_or(origin);
    let ordered_normal = sequence(metric, chain_start, normal);

    let mut ordered = ordered_priority;
    ordered.extend(ordered_normal);

    let mut total_km = 0.0;
    let mut previous = origin;
    for stop in &ordered {
        total_km += metric.distance_km(previous, stop.location());
        previous = stop.location();
    }

    // Travel term is rounded from the raw distance before the per-stop
    // handling overhead is added.
    let travel_minutes = (total_km / options.speed_kmh * 60.0).round() as i64;
    let estimated_minutes = travel_minutes + ordered.len() as i64 * options.handling_minutes;
    let total_distance_km = (total_km * 100.0).round() / 100.0;

    debug!(total_distance_km, estimated_minutes, stops = ordered.len(), "route planned");

    let waypoints = ordered
        .iter()
        .map(|stop| {
            let (latitude, longitude) = stop.location();
            Waypoint {
                latitude,
                longitude,
                stop_id: stop.id().clone(),
            }
        })
        .collect();

    RoutePlan {
        stops: ordered,
        total_distance_km,
        estimated_minutes,
        metadata: Some(RouteMetadata {
            origin,
            waypoints,
            planned_at: clock.now_unix(),
        }),
    }
}
