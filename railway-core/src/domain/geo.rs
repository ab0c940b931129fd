//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Conversion factor from kilometers to miles.
pub const MILES_PER_KM: f64 = 0.62137;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,

    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another position, in kilometers.
    ///
    /// Uses the haversine formula on a sphere of mean Earth radius,
    /// which stays numerically stable for very small separations.
    /// Symmetric, and exactly zero for identical coordinates.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

        // h can overshoot 1.0 by a few ulps near antipodal points;
        // clamp so the square root stays a valid sine.
        2.0 * EARTH_RADIUS_KM * h.min(1.0).sqrt().asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_points() {
        let p = Coordinates::new(51.5226, -0.1571);
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn symmetric() {
        let baker_street = Coordinates::new(51.5226, -0.1571);
        let epping = Coordinates::new(51.6937, 0.1139);
        assert_eq!(
            baker_street.distance_km(&epping),
            epping.distance_km(&baker_street)
        );
    }

    #[test]
    fn known_distance() {
        // London (51.5074 N, 0.1278 W) to Paris (48.8566 N, 2.3522 E)
        // is roughly 344 km great-circle.
        let london = Coordinates::new(51.5074, -0.1278);
        let paris = Coordinates::new(48.8566, 2.3522);
        let d = london.distance_km(&paris);
        assert!((d - 344.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude is ~111.19 km on a 6371 km sphere.
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);
        let d = a.distance_km(&b);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_panic() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        let d = a.distance_km(&b);
        // Half the circumference of a 6371 km sphere.
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
        assert!(d.is_finite());
    }

    #[test]
    fn miles_conversion_factor() {
        assert_eq!(MILES_PER_KM, 0.62137);
    }
}
