//! Reference ellipsoid parameters and named presets.

use crate::error::GeoError;

/// Reference ellipsoid parameters.
///
/// Only the defining pair is stored; everything the converters need is
/// derived from it once, when a [`Geocentric`](super::geocentric::Geocentric)
/// frame is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless). Negative for prolate bodies, zero for a sphere.
    pub f: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Build from semi-major axis and inverse flattening (e.g. 298.257223563).
    pub fn from_inverse_flattening(a: f64, inv_f: f64) -> Self {
        Self::new(a, 1.0 / inv_f)
    }

    /// Semi-minor (polar) axis: a * (1 - f).
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// First eccentricity squared: f * (2 - f). Negative for prolate bodies.
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    pub fn is_prolate(&self) -> bool {
        self.f < 0.0
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(s: &str) -> Result<Self, GeoError> {
        match s.to_lowercase().as_str() {
            "wgs84" | "wgs-84" => Ok(WGS84),
            "grs80" | "grs-80" => Ok(GRS80),
            "international" | "intl" | "hayford" => Ok(INTERNATIONAL),
            _ => Err(GeoError::UnknownEllipsoid(s.to_string())),
        }
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);
/// International (Hayford, 1924) ellipsoid.
pub const INTERNATIONAL: Ellipsoid = Ellipsoid::new(6_378_388.0, 1.0 / 297.0);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.a, 6_378_137.0);
        assert_relative_eq!(WGS84.b(), 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(WGS84.e2(), 0.006_694_379_990_141_317, epsilon = 1e-15);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        // WGS84 and GRS80 differ only slightly
        assert_relative_eq!(WGS84.a, GRS80.a);
        assert!((WGS84.f - GRS80.f).abs() < 1e-8);
    }

    #[test]
    fn test_inverse_flattening() {
        let intl = Ellipsoid::from_inverse_flattening(6_378_388.0, 297.0);
        assert_eq!(intl, INTERNATIONAL);
    }

    #[test]
    fn test_prolate_e2_negative() {
        let egg = Ellipsoid::new(6_378_137.0, -1.0 / 50.0);
        assert!(egg.is_prolate());
        assert!(egg.e2() < 0.0);
        assert!(egg.b() > egg.a);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Ellipsoid::from_name("WGS84").unwrap(), WGS84);
        assert_eq!(Ellipsoid::from_name("grs80").unwrap(), GRS80);
        assert_eq!(Ellipsoid::from_name("Hayford").unwrap(), INTERNATIONAL);
        assert!(matches!(
            Ellipsoid::from_name("bessel"),
            Err(GeoError::UnknownEllipsoid(_))
        ));
    }
}
