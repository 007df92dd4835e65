use thiserror::Error;

/// Errors raised while deriving the board layout from frame dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("frame {width}x{height} is too small: both sides must be at least 4 px")]
    FrameTooSmall { width: u32, height: u32 },

    #[error("frame {width}x{height} exceeds the supported coordinate range")]
    FrameTooLarge { width: u32, height: u32 },
}
