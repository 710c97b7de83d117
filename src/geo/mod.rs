pub mod ellipsoid;
pub mod geocentric;
pub mod local;
pub mod point;
pub mod rotation;

/// Trait for coordinate conversions between two 3-component systems.
///
/// `forward` goes from geodetic `[lat, lon, h]` (degrees, metres) to the
/// implementor's Cartesian system; `reverse` goes back.
pub trait Conversion: Send + Sync {
    fn forward(&self, v: [f64; 3]) -> [f64; 3];

    fn reverse(&self, v: [f64; 3]) -> [f64; 3];

    /// Batch forward conversion, in place.
    fn forward_batch(&self, coords: &mut [[f64; 3]]) {
        for c in coords.iter_mut() {
            *c = self.forward(*c);
        }
    }

    /// Batch reverse conversion, in place.
    fn reverse_batch(&self, coords: &mut [[f64; 3]]) {
        for c in coords.iter_mut() {
            *c = self.reverse(*c);
        }
    }
}
