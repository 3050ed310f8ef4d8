//! Geographic coordinate type and distance utilities.
//!
//! `GeoPoint` stores the document model's raw `x`/`y` pair: longitude and
//! latitude for OSM-derived graphs, synthetic planar coordinates for
//! generated lattices.  Downstream consumers treat the pair as opaque — it
//! only feeds distance computation and routing heuristics.  `f64` throughout:
//! edge weights are persisted as JSON floats, so in-memory precision is
//! output precision.

/// A raw coordinate pair: `x` = longitude, `y` = latitude for geographic
/// graphs; arbitrary planar units for synthetic ones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Haversine great-circle distance in kilometres, treating `y` as
    /// latitude and `x` as longitude (degrees).
    ///
    /// Pure: NaN or out-of-range inputs propagate NaN rather than erroring.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6371.0; // mean Earth radius, km

        let d_lat = (other.y - self.y).to_radians();
        let d_lon = (other.x - self.x).to_radians();

        let lat1 = self.y.to_radians();
        let lat2 = other.y.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Straight-line distance in raw coordinate units.
    ///
    /// Used as the routing heuristic signal — valid for both geographic and
    /// synthetic coordinates, and an underestimate of road distance in both.
    #[inline]
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
