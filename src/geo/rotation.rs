//! Local east-north-up orientation matrix.

/// 3×3 rotation whose columns are the local east, north and up unit
/// vectors expressed in the geocentric frame.
///
/// Stored row-major, so `m[i][j]` is component `i` of axis `j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationMatrix {
    m: [[f64; 3]; 3],
}

impl OrientationMatrix {
    /// Build from the sine and cosine of latitude and longitude.
    pub fn from_trig(sphi: f64, cphi: f64, slam: f64, clam: f64) -> Self {
        Self {
            m: [
                [-slam, -clam * sphi, clam * cphi],
                [clam, -slam * sphi, slam * cphi],
                [0.0, cphi, sphi],
            ],
        }
    }

    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn as_rows(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    fn column(&self, j: usize) -> [f64; 3] {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    pub fn east(&self) -> [f64; 3] {
        self.column(0)
    }

    pub fn north(&self) -> [f64; 3] {
        self.column(1)
    }

    pub fn up(&self) -> [f64; 3] {
        self.column(2)
    }

    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Matrix product `self · rhs`.
    pub fn product(&self, rhs: &Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m: out }
    }

    /// Rotate a local (east, north, up) vector into the geocentric frame: `M · v`.
    pub fn to_global(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Rotate a geocentric vector into local (east, north, up): `Mᵀ · v`.
    pub fn to_local(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
            m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
            m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
        ]
    }
}
