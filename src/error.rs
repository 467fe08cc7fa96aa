//! Error handling for the octree build phase
//!
//! Every fallible operation returns an `OctreeResult` so that problems are
//! surfaced on the host before anything is uploaded to the GPU.

/// Main error type for octree construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OctreeError {
    /// Node index outside the pool (negative or >= pool length)
    #[error("Node index out of range: index {index} >= size {len}")]
    OutOfRange { index: i64, len: usize },

    #[error("Degenerate configuration: {field} = {value} ({reason})")]
    DegenerateConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    /// Node indices are stored as i32 on the GPU side
    #[error("Node pool exhausted: cannot address node {requested}")]
    PoolExhausted { requested: usize },

    #[error("Invalid color ramp: {0}")]
    InvalidColorRamp(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Type alias for Results produced while building an octree
pub type OctreeResult<T> = Result<T, OctreeError>;

impl OctreeError {
    pub(crate) fn degenerate(field: &str, value: impl ToString, reason: &str) -> Self {
        OctreeError::DegenerateConfiguration {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for OctreeError {
    fn from(error: std::io::Error) -> Self {
        OctreeError::Io(error.to_string())
    }
}

impl From<toml::de::Error> for OctreeError {
    fn from(error: toml::de::Error) -> Self {
        OctreeError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OctreeError::OutOfRange { index: 10, len: 5 };
        assert_eq!(err.to_string(), "Node index out of range: index 10 >= size 5");
    }

    #[test]
    fn test_degenerate_display() {
        let err = OctreeError::degenerate("max_depth", 0, "must be positive");
        assert_eq!(
            err.to_string(),
            "Degenerate configuration: max_depth = 0 (must be positive)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OctreeError = io.into();
        assert!(matches!(err, OctreeError::Io(_)));
    }
}
