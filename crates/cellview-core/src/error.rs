use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid image dimensions: {ly}x{lx}")]
    InvalidDimensions { ly: usize, lx: usize },

    #[error("ROI {roi}: {reason}")]
    MalformedRoi { roi: usize, reason: String },

    #[error("ROI {roi} pixel ({row}, {col}) lies outside the {ly}x{lx} image")]
    PixelOutOfBounds {
        roi: usize,
        row: usize,
        col: usize,
        ly: usize,
        lx: usize,
    },

    #[error("{what} has {got} entries, expected one per ROI ({expected})")]
    LengthMismatch {
        what: String,
        got: usize,
        expected: usize,
    },

    #[error("Unknown statistic: {0}")]
    UnknownStatistic(String),

    #[error("ROI index {index} out of range (total: {total})")]
    RoiIndexOutOfRange { index: usize, total: usize },

    #[error("Quadrant {q} out of range for a {grid}x{grid} grid")]
    InvalidQuadrant { q: usize, grid: usize },
}

pub type Result<T> = std::result::Result<T, CellviewError>;
