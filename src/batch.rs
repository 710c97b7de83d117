//! Array conversions over `(n, 3)` coordinate tables.

use ndarray::{Array2, ArrayView2, Axis};

use crate::error::GeoError;
use crate::geo::Conversion;

/// Rows of `[lat, lon, h]` → rows of the converter's Cartesian coordinates.
pub fn forward_array<C: Conversion + ?Sized>(
    conv: &C,
    coords: &ArrayView2<'_, f64>,
) -> Result<Array2<f64>, GeoError> {
    map_rows(coords, |v| conv.forward(v))
}

/// Rows of Cartesian coordinates → rows of `[lat, lon, h]`.
pub fn reverse_array<C: Conversion + ?Sized>(
    conv: &C,
    coords: &ArrayView2<'_, f64>,
) -> Result<Array2<f64>, GeoError> {
    map_rows(coords, |v| conv.reverse(v))
}

fn map_rows(
    coords: &ArrayView2<'_, f64>,
    f: impl Fn([f64; 3]) -> [f64; 3],
) -> Result<Array2<f64>, GeoError> {
    let (rows, cols) = coords.dim();
    if cols != 3 {
        return Err(GeoError::Shape(format!(
            "expected (n, 3) coordinates, got ({rows}, {cols})"
        )));
    }

    let mut out = Array2::zeros((rows, 3));
    for (src, mut dst) in coords.axis_iter(Axis(0)).zip(out.axis_iter_mut(Axis(0))) {
        let v = f([src[0], src[1], src[2]]);
        dst[0] = v[0];
        dst[1] = v[1];
        dst[2] = v[2];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::geocentric::WGS84;
    use crate::geo::local::LocalCartesian;
    use crate::geo::point::GeodeticPoint;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_array() {
        let geo = array![[0.0, 0.0, 0.0], [90.0, 0.0, 0.0], [0.0, 90.0, 100.0]];
        let ecef = forward_array(&WGS84, &geo.view()).unwrap();
        assert_eq!(ecef.dim(), (3, 3));
        assert_eq!(ecef[(0, 0)], 6_378_137.0);
        assert_relative_eq!(ecef[(1, 2)], 6_356_752.314_245_179, epsilon = 1e-6);
        assert_eq!(ecef[(2, 0)], 0.0);
        assert_eq!(ecef[(2, 1)], 6_378_237.0);
    }

    #[test]
    fn test_array_round_trip() {
        let geo = array![
            [51.4779, -0.0015, 46.0],
            [-45.0, 170.0, -30.0],
            [10.0, -120.0, 4.0e5]
        ];
        let ecef = forward_array(&WGS84, &geo.view()).unwrap();
        let back = reverse_array(&WGS84, &ecef.view()).unwrap();
        for (a, b) in back.iter().zip(geo.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_local_frame_array() {
        let lc = LocalCartesian::new(WGS84, GeodeticPoint::new(0.0, 0.0, 0.0));
        let geo = array![[0.0, 0.0, 0.0], [0.0, 0.0, 10.0]];
        let enu = forward_array(&lc, &geo.view()).unwrap();
        assert_relative_eq!(enu[(1, 2)], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_array() {
        let geo = Array2::<f64>::zeros((0, 3));
        let out = forward_array(&WGS84, &geo.view()).unwrap();
        assert_eq!(out.dim(), (0, 3));
    }

    #[test]
    fn test_wrong_shape() {
        let geo = Array2::<f64>::zeros((4, 2));
        let err = forward_array(&WGS84, &geo.view()).unwrap_err();
        assert!(matches!(err, GeoError::Shape(_)));
        assert!(err.to_string().contains("(4, 2)"));
    }
}
