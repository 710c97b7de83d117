/// Geodetic position: latitude and longitude in degrees, height in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeodeticPoint {
    /// Latitude (degrees, [-90, 90])
    pub lat: f64,
    /// Longitude (degrees). Any value on input, [-180, 180) on output.
    pub lon: f64,
    /// Height above the ellipsoid (metres)
    pub h: f64,
}

impl GeodeticPoint {
    pub const fn new(lat: f64, lon: f64, h: f64) -> Self {
        Self { lat, lon, h }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.lat, self.lon, self.h]
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Geocentric (ECEF) position in metres, origin at the ellipsoid center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
