//! Uniform sampling of points inside a circle.

use geo::{Distance, Euclidean, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Waypoint;

/// Slack for floating point error when translating a sampled offset.
const CONTAINMENT_EPSILON: f64 = 1e-9;

/// A circle in lat/lng degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center_lat: f64,
    pub center_lng: f64,
    /// Radius in degrees lat/lng.
    pub radius: f64,
}

impl Circle {
    pub const fn new(center_lat: f64, center_lng: f64, radius: f64) -> Self {
        Self {
            center_lat,
            center_lng,
            radius,
        }
    }

    /// A circle of `radius` around an existing waypoint.
    pub fn around(waypoint: &Waypoint, radius: f64) -> Self {
        Self::new(waypoint.lat, waypoint.lng, radius)
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(self.center_lng, self.center_lat)
    }

    /// Returns a uniformly distributed waypoint inside the circle.
    pub fn random_waypoint(&self, rng: &mut impl Rng) -> Waypoint {
        let (lat, lng) = sample_point_in_circle(self.center_lat, self.center_lng, self.radius, rng);
        Waypoint::new(lat, lng)
    }

    /// Euclidean containment in degree space.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let distance = Euclidean.distance(self.center(), Point::new(lng, lat));
        distance <= self.radius.abs() + CONTAINMENT_EPSILON
    }
}

/// Draws a point uniformly from the disk of `radius` around the center.
///
/// Offsets are drawn from the square `[-1, 1)²` and redrawn until they land in
/// the unit disk, then scaled and translated. There is no retry cap; on average
/// fewer than 1.3 draws are needed.
pub fn sample_point_in_circle(
    center_lat: f64,
    center_lng: f64,
    radius: f64,
    rng: &mut impl Rng,
) -> (f64, f64) {
    let (x, y) = loop {
        let x = 2.0 * rng.r#gen::<f64>() - 1.0;
        let y = 2.0 * rng.r#gen::<f64>() - 1.0;
        if x * x + y * y <= 1.0 {
            break (x, y);
        }
    };

    (center_lat + x * radius, center_lng + y * radius)
}
