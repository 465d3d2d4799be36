//! Great-circle distance, bounding boxes and straight-line waypoint interpolation.
//!
//! All coordinates are decimal degrees (latitude, longitude). Distances are in
//! nautical miles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// A geographic position as a `(lat, lng)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and within the usual degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Waypoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned latitude/longitude box. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl BoundingBox {
    pub const fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    pub fn contains(&self, point: Waypoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lng_min..=self.lng_max).contains(&point.lng)
    }
}

/// Haversine great-circle distance between two points in nautical miles.
///
/// Returns `0.0` for coincident points and is symmetric in its arguments.
///
/// # Examples
///
/// ```
/// use maritime_lib::geo::{distance_nm, Waypoint};
///
/// let a = Waypoint::new(0.0, 0.0);
/// let b = Waypoint::new(0.0, 1.0);
/// assert!((distance_nm(a, b) - 60.04).abs() < 0.01);
/// assert_eq!(distance_nm(a, a), 0.0);
/// ```
pub fn distance_nm(a: Waypoint, b: Waypoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    // Rounding can push `h` a hair above 1.0 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_NM * c
}

/// Straight-line interpolation from `from` to `to` in `segments` equal steps.
///
/// Produces `segments + 1` points including both endpoints. This is a plotting
/// aid, not a navigable track.
pub fn interpolate(from: Waypoint, to: Waypoint, segments: usize) -> Result<Vec<Waypoint>> {
    if segments == 0 {
        return Err(Error::invalid_input(
            "interpolation requires at least 2 waypoints (segments must be >= 1)",
        ));
    }

    let points = (0..=segments)
        .map(|i| {
            let ratio = i as f64 / segments as f64;
            Waypoint {
                lat: from.lat + (to.lat - from.lat) * ratio,
                lng: from.lng + (to.lng - from.lng) * ratio,
            }
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_degree_is_sixty_nautical_miles() {
        let d = distance_nm(Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0));
        assert!((d - EARTH_RADIUS_NM * 1f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let d = distance_nm(Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_NM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn bounding_box_is_inclusive() {
        let bbox = BoundingBox::new(10.0, 18.0, 42.0, 52.0);
        assert!(bbox.contains(Waypoint::new(10.0, 42.0)));
        assert!(bbox.contains(Waypoint::new(18.0, 52.0)));
        assert!(!bbox.contains(Waypoint::new(18.01, 45.0)));
        assert!(!bbox.contains(Waypoint::new(12.0, 41.99)));
    }

    #[test]
    fn interpolation_includes_both_endpoints() {
        let from = Waypoint::new(0.0, 0.0);
        let to = Waypoint::new(10.0, -20.0);
        let points = interpolate(from, to, 10).expect("valid segments");
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], from);
        assert_eq!(points[10], to);
        assert_eq!(points[5], Waypoint::new(5.0, -10.0));
    }

    #[test]
    fn interpolation_rejects_zero_segments() {
        let err = interpolate(Waypoint::new(0.0, 0.0), Waypoint::new(1.0, 1.0), 0)
            .expect_err("zero segments rejected");
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn waypoint_validation_checks_ranges() {
        assert!(Waypoint::new(45.0, 170.0).is_valid());
        assert!(!Waypoint::new(91.0, 0.0).is_valid());
        assert!(!Waypoint::new(0.0, f64::NAN).is_valid());
    }
}
