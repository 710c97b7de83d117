//! Geocentric (ECEF) ⇄ geodetic conversion on an ellipsoid of revolution.
//!
//! Forward is closed form. Reverse reduces the quartic for the latitude to a
//! depressed cubic which is solved directly, with each step arranged so that
//! no subtraction of nearly equal quantities occurs. Inputs that would make
//! the general formulas misbehave are peeled off first, in this order:
//!
//!   1. points so far away that squaring the radius could overflow
//!      (treated as seen from a point mass),
//!   2. the sphere (`e² = 0`), where the cubic is unnecessary,
//!   3. oblate points on the equatorial plane / prolate points on the axis
//!      that lie inside the evolute, where the cubic yields 0/0,
//!   4. everything else: the cubic.
//!
//! Prolate bodies reuse the oblate algebra with the roles of the axial and
//! equatorial radii swapped.

use tracing::{debug, trace, warn};

use crate::error::GeoError;
use crate::geo::ellipsoid::{self, Ellipsoid};
use crate::geo::point::{CartesianPoint, GeodeticPoint};
use crate::geo::rotation::OrientationMatrix;
use crate::geo::Conversion;

/// An ellipsoid prepared for coordinate conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geocentric {
    a: f64,
    f: f64,
    e2: f64,
    // (1 - f)^2 = 1 - e2
    e2m: f64,
    e2a: f64,
    e4a: f64,
    maxrad: f64,
}

/// Sines and cosines of latitude and longitude at a solved point.
#[derive(Clone, Copy, Debug)]
struct Trig {
    sphi: f64,
    cphi: f64,
    slam: f64,
    clam: f64,
}

impl Trig {
    fn rotation(&self) -> OrientationMatrix {
        OrientationMatrix::from_trig(self.sphi, self.cphi, self.slam, self.clam)
    }
}

/// Region of input space handled by one branch of the reverse solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ReverseBranch {
    PointMass,
    Sphere,
    AxisLimit { p: f64 },
    Cubic { p: f64, q: f64, r: f64 },
}

/// WGS84, ready to use.
pub const WGS84: Geocentric = Geocentric::from_parts(ellipsoid::WGS84.a, ellipsoid::WGS84.f);

impl Geocentric {
    /// Build a frame from semi-major axis `a` (metres) and flattening `f`.
    ///
    /// Values of `f` greater than 1 are taken as inverse flattening.
    pub fn new(a: f64, f: f64) -> Result<Self, GeoError> {
        if !(a.is_finite() && a > 0.0) {
            warn!(a, "rejected ellipsoid");
            return Err(GeoError::InvalidParameter(format!(
                "Major radius is not positive: {a}"
            )));
        }
        let flattening = if f <= 1.0 { f } else { 1.0 / f };
        if !(f.is_finite() && flattening < 1.0) {
            warn!(f, "rejected ellipsoid");
            return Err(GeoError::InvalidParameter(format!(
                "Minor radius is not positive: f = {f}"
            )));
        }
        debug!(a, f = flattening, "geocentric frame");
        Ok(Self::from_parts(a, flattening))
    }

    pub fn from_ellipsoid(ellipsoid: &Ellipsoid) -> Result<Self, GeoError> {
        Self::new(ellipsoid.a, ellipsoid.f)
    }

    const fn from_parts(a: f64, f: f64) -> Self {
        let e2 = f * (2.0 - f);
        Self {
            a,
            f,
            e2,
            e2m: (1.0 - f) * (1.0 - f),
            e2a: if e2 < 0.0 { -e2 } else { e2 },
            e4a: e2 * e2,
            maxrad: 2.0 * a / f64::EPSILON,
        }
    }

    pub fn major_radius(&self) -> f64 {
        self.a
    }

    pub fn flattening(&self) -> f64 {
        self.f
    }

    pub fn ellipsoid(&self) -> Ellipsoid {
        Ellipsoid::new(self.a, self.f)
    }

    /// Geodetic → geocentric.
    pub fn to_cartesian(&self, p: GeodeticPoint) -> CartesianPoint {
        self.int_forward(p).0
    }

    /// Geodetic → geocentric, also returning the local east/north/up matrix.
    pub fn to_cartesian_with_matrix(
        &self,
        p: GeodeticPoint,
    ) -> (CartesianPoint, OrientationMatrix) {
        let (c, trig) = self.int_forward(p);
        (c, trig.rotation())
    }

    /// Geocentric → geodetic. Total over finite input; NaN propagates.
    pub fn to_geodetic(&self, p: CartesianPoint) -> GeodeticPoint {
        self.int_reverse(p).0
    }

    /// Geocentric → geodetic, also returning the local east/north/up matrix.
    pub fn to_geodetic_with_matrix(
        &self,
        p: CartesianPoint,
    ) -> (GeodeticPoint, OrientationMatrix) {
        let (g, trig) = self.int_reverse(p);
        (g, trig.rotation())
    }

    fn int_forward(&self, p: GeodeticPoint) -> (CartesianPoint, Trig) {
        let lon = normalize_lon(p.lon);
        let phi = p.lat.to_radians();
        let lam = lon.to_radians();
        // Exact zeros at the poles and on the quarter meridians, otherwise
        // sin/cos of the rounded radians leak ~1e-17 residuals.
        let sphi = phi.sin();
        let cphi = if p.lat.abs() == 90.0 { 0.0 } else { phi.cos() };
        let slam = if lon == -180.0 { 0.0 } else { lam.sin() };
        let clam = if lon.abs() == 90.0 { 0.0 } else { lam.cos() };

        // Prime vertical radius of curvature
        let n = self.a / (1.0 - self.e2 * sphi * sphi).sqrt();
        let z = (self.e2m * n + p.h) * sphi;
        let xy = (n + p.h) * cphi;

        let trig = Trig {
            sphi,
            cphi,
            slam,
            clam,
        };
        (CartesianPoint::new(xy * clam, xy * slam, z), trig)
    }

    /// Pick the branch of the reverse solver for a point at cylindrical
    /// radius `r`, height `z` and distance `dist` from the center.
    pub(crate) fn classify(&self, r: f64, z: f64, dist: f64) -> ReverseBranch {
        if dist > self.maxrad {
            return ReverseBranch::PointMass;
        }
        if self.e4a == 0.0 {
            return ReverseBranch::Sphere;
        }
        let mut p = (r / self.a).powi(2);
        let mut q = self.e2m * (z / self.a).powi(2);
        let rr = (p + q - self.e4a) / 6.0;
        if self.f < 0.0 {
            std::mem::swap(&mut p, &mut q);
        }
        if self.e4a * q == 0.0 && rr <= 0.0 {
            ReverseBranch::AxisLimit { p }
        } else {
            ReverseBranch::Cubic { p, q, r: rr }
        }
    }

    fn int_reverse(&self, c: CartesianPoint) -> (GeodeticPoint, Trig) {
        let CartesianPoint { x, y, z } = c;
        let r = x.hypot(y);
        let (slam, clam) = lon_trig(x, y, r);
        let dist = r.hypot(z);

        let ((sphi, cphi), (slam, clam), h) = match self.classify(r, z, dist) {
            ReverseBranch::PointMass => {
                trace!(dist, "reverse: point-mass approximation");
                let (lat, lon) = point_mass(x, y, z);
                (lat, lon, dist)
            }
            ReverseBranch::Sphere => {
                let (lat, h) = self.sphere(r, z, dist);
                (lat, (slam, clam), h)
            }
            ReverseBranch::AxisLimit { p } => {
                let (lat, h) = self.axis_limit(p, z);
                (lat, (slam, clam), h)
            }
            ReverseBranch::Cubic { p, q, r: rr } => {
                let (lat, h) = self.cubic(r, z, p, q, rr);
                (lat, (slam, clam), h)
            }
        };

        let trig = Trig {
            sphi,
            cphi,
            slam,
            clam,
        };
        let lat = sphi.atan2(cphi).to_degrees();
        let lon = normalize_lon(-(-slam).atan2(clam).to_degrees());
        (GeodeticPoint::new(lat, lon, h), trig)
    }

    /// The origin maps to the north pole, as on the ellipsoid.
    fn sphere(&self, r: f64, z: f64, dist: f64) -> ((f64, f64), f64) {
        let zz = if dist == 0.0 { 1.0 } else { z };
        let hyp = zz.hypot(r);
        ((zz / hyp, r / hyp), dist - self.a)
    }

    /// Limit of the cubic solution as k → 0 (oblate, equatorial plane) or
    /// k + e² → 0 (prolate, rotation axis).
    fn axis_limit(&self, p: f64, z: f64) -> ((f64, f64), f64) {
        let oblate = self.f >= 0.0;
        let zz = ((if oblate { self.e4a - p } else { p }) / self.e2m).sqrt();
        let xx = (if oblate { p } else { self.e4a - p }).sqrt();
        let hyp = zz.hypot(xx);
        let mut sphi = zz / hyp;
        let cphi = xx / hyp;
        // tiny negative z whose square underflowed
        if z < 0.0 {
            sphi = -sphi;
        }
        let h = -self.a * (if oblate { self.e2m } else { 1.0 }) * hyp / self.e2a;
        ((sphi, cphi), h)
    }

    fn cubic(&self, r: f64, z: f64, p: f64, q: f64, rr: f64) -> ((f64, f64), f64) {
        // s and t are carried multiplied by r^3 and r so that r = 0 never divides.
        let s = self.e4a * p * q / 4.0;
        let r2 = rr * rr;
        let r3 = rr * r2;
        let disc = s * (2.0 * r3 + s);
        let mut u = rr;
        if disc >= 0.0 {
            let mut t3 = s + r3;
            // Sign of the root maximizes |t3|; u does not depend on the choice.
            t3 += if t3 < 0.0 { -disc.sqrt() } else { disc.sqrt() };
            let t = t3.cbrt();
            u += t + if t != 0.0 { r2 / t } else { 0.0 };
        } else {
            // Three real roots (disc < 0 implies rr < 0); take the one free of cancellation.
            let ang = (-disc).sqrt().atan2(-(s + r3));
            u += 2.0 * rr * (ang / 3.0).cos();
        }
        let v = (u * u + self.e4a * q).sqrt();
        // u + v, without cancellation when u < 0
        let uv = if u < 0.0 {
            self.e4a * q / (v - u)
        } else {
            u + v
        };
        let w = (self.e2a * (uv - q) / (2.0 * v)).max(0.0);
        let k = uv / ((uv + w * w).sqrt() + w);
        let (k1, k2) = if self.f >= 0.0 {
            (k, k + self.e2)
        } else {
            (k - self.e2, k)
        };
        let d = k1 * r / k2;
        let hyp = (z / k1).hypot(r / k2);
        let h = (1.0 - self.e2m / k1) * d.hypot(z);
        (((z / k1) / hyp, (r / k2) / hyp), h)
    }
}

impl Conversion for Geocentric {
    /// `[lat, lon, h]` → `[x, y, z]`
    fn forward(&self, v: [f64; 3]) -> [f64; 3] {
        self.to_cartesian(GeodeticPoint::from_array(v)).to_array()
    }

    /// `[x, y, z]` → `[lat, lon, h]`
    fn reverse(&self, v: [f64; 3]) -> [f64; 3] {
        self.to_geodetic(CartesianPoint::from_array(v)).to_array()
    }
}

/// Longitude sine and cosine from the equatorial components; the axis gets λ = 0.
fn lon_trig(x: f64, y: f64, r: f64) -> (f64, f64) {
    if r != 0.0 {
        (y / r, x / r)
    } else {
        (0.0, 1.0)
    }
}

/// Direction only: curvature is irrelevant at this range. Halving keeps the
/// hypotenuses finite when the components are near `f64::MAX`.
fn point_mass(x: f64, y: f64, z: f64) -> ((f64, f64), (f64, f64)) {
    let (x, y, z) = (x / 2.0, y / 2.0, z / 2.0);
    let r = x.hypot(y);
    let lon = lon_trig(x, y, r);
    let hyp = z.hypot(r);
    ((z / hyp, r / hyp), lon)
}

/// Reduce a longitude in degrees to [-180, 180). In-range values pass through untouched.
pub fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    let l = lon.rem_euclid(360.0);
    if l >= 180.0 {
        l - 360.0
    } else {
        l
    }
}
