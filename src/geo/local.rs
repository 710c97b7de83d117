//! Local east-north-up Cartesian frame anchored at a geodetic origin.

use crate::geo::geocentric::{normalize_lon, Geocentric};
use crate::geo::point::{CartesianPoint, GeodeticPoint};
use crate::geo::rotation::OrientationMatrix;
use crate::geo::Conversion;

/// Topocentric frame: x east, y north, z up, origin at `origin`.
#[derive(Clone, Copy, Debug)]
pub struct LocalCartesian {
    frame: Geocentric,
    origin: GeodeticPoint,
    origin_ecef: CartesianPoint,
    rotation: OrientationMatrix,
}

impl LocalCartesian {
    pub fn new(frame: Geocentric, origin: GeodeticPoint) -> Self {
        let (origin_ecef, rotation) = frame.to_cartesian_with_matrix(origin);
        Self {
            frame,
            origin: GeodeticPoint::new(origin.lat, normalize_lon(origin.lon), origin.h),
            origin_ecef,
            rotation,
        }
    }

    /// Re-anchor the frame at a new origin on the same ellipsoid.
    pub fn reset(&mut self, origin: GeodeticPoint) {
        *self = Self::new(self.frame, origin);
    }

    pub fn origin(&self) -> GeodeticPoint {
        self.origin
    }

    pub fn frame(&self) -> &Geocentric {
        &self.frame
    }

    /// Geodetic → local `[east, north, up]` in metres.
    pub fn to_local(&self, p: GeodeticPoint) -> [f64; 3] {
        let c = self.frame.to_cartesian(p);
        self.rotation.to_local(self.offset(c))
    }

    /// Also returns the point's own east/north/up axes expressed in the local frame.
    pub fn to_local_with_matrix(&self, p: GeodeticPoint) -> ([f64; 3], OrientationMatrix) {
        let (c, m) = self.frame.to_cartesian_with_matrix(p);
        let enu = self.rotation.to_local(self.offset(c));
        (enu, self.rotation.transpose().product(&m))
    }

    /// Local `[east, north, up]` → geodetic.
    pub fn to_geodetic(&self, enu: [f64; 3]) -> GeodeticPoint {
        self.frame.to_geodetic(self.ecef(enu))
    }

    pub fn to_geodetic_with_matrix(&self, enu: [f64; 3]) -> (GeodeticPoint, OrientationMatrix) {
        let (g, m) = self.frame.to_geodetic_with_matrix(self.ecef(enu));
        (g, self.rotation.transpose().product(&m))
    }

    fn offset(&self, c: CartesianPoint) -> [f64; 3] {
        [
            c.x - self.origin_ecef.x,
            c.y - self.origin_ecef.y,
            c.z - self.origin_ecef.z,
        ]
    }

    fn ecef(&self, enu: [f64; 3]) -> CartesianPoint {
        let d = self.rotation.to_global(enu);
        CartesianPoint::new(
            self.origin_ecef.x + d[0],
            self.origin_ecef.y + d[1],
            self.origin_ecef.z + d[2],
        )
    }
}

impl Conversion for LocalCartesian {
    /// `[lat, lon, h]` → `[east, north, up]`
    fn forward(&self, v: [f64; 3]) -> [f64; 3] {
        self.to_local(GeodeticPoint::from_array(v))
    }

    /// `[east, north, up]` → `[lat, lon, h]`
    fn reverse(&self, v: [f64; 3]) -> [f64; 3] {
        self.to_geodetic(v).to_array()
    }
}
