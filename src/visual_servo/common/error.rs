use thiserror::Error;

/// Ways a frame's declared geometry can disagree with its buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameGeometryError {
    #[error("row stride {row_stride} is not a multiple of the pixel size {bytes_per_pixel}")]
    UnalignedStride {
        row_stride: usize,
        bytes_per_pixel: usize,
    },

    #[error("buffer holds {actual} bytes but the frame declares {expected}")]
    TruncatedBuffer { expected: usize, actual: usize },

    #[error("frame size overflows: height={height}, row_stride={row_stride}")]
    DimensionOverflow { height: usize, row_stride: usize },
}

#[derive(Error, Debug)]
pub enum ServoError {
    #[error("Malformed frame: {0}")]
    MalformedFrame(#[from] FrameGeometryError),

    #[error("Failed to dispatch motion command: {0}")]
    DispatchFailure(String),

    #[error("Frame feed failed: {0}")]
    FeedError(String),
}

impl ServoError {
    pub fn is_malformed_frame(&self) -> bool {
        matches!(self, ServoError::MalformedFrame(_))
    }
}

pub type Result<T> = std::result::Result<T, ServoError>;
