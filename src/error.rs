use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}
