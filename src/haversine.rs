//! Haversine great-circle distance metric.
//!
//! Straight-line distance over a spherical Earth. Ignores the road network,
//! which is acceptable for courier dispatch at city scale.

use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Haversine {
    /// Calculate haversine distance between two (lat, lng) points in kilometers.
    pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

        // Floating error can push h a hair outside [0, 1] for identical or
        // antipodal points, which would make the sqrt arguments NaN.
        let h = h.clamp(0.0, 1.0);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl DistanceMetric for Haversine {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        Self::distance_km(from, to)
    }
}
