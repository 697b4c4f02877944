use thiserror::Error;

/// Top-level error type for the room kernel.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("at least 3 walls are required for a closed room, got {0}")]
    TooFewWalls(usize),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Reasons an interactive edit was rejected.
///
/// A rejected edit never changes the room; see [`crate::operations::edit::RoomEdit`].
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("wall {0} not found")]
    WallNotFound(u32),

    #[error("joint index {0} out of range")]
    JointNotFound(usize),

    #[error("wall {wall} would be {length} long, below the minimum of {min}")]
    TooShort { wall: u32, length: f64, min: f64 },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Errors related to kernel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config value {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Convenience type alias for results using [`RoomError`].
pub type Result<T> = std::result::Result<T, RoomError>;
