use std::num::ParseFloatError;

use thiserror::Error;

/// Enumerates the different types of errors
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum TfError {
    /// Fewer pose arguments than `child_frame_name x y z roll pitch yaw`.
    #[error("static_tf: InvalidArgumentCount expected {expected}, found {found}")]
    InvalidArgumentCount { expected: usize, found: usize },
    /// The child frame collides with the fixed parent frame.
    #[error("static_tf: ReservedFrameName {:?}", .0)]
    ReservedFrameName(String),
    /// A pose value could not be read as a floating point number.
    #[error("static_tf: NumberFormat {field}={value:?} ({source})")]
    NumberFormat {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    /// The publisher already sent its transform for this frame.
    #[error("static_tf: AlreadyPublished {:?}", .0)]
    AlreadyPublished(String),
    /// A clock reading whose seconds overflow the message's `i32` field.
    #[error("static_tf: TimeOutOfRange {} s since epoch", .0)]
    TimeOutOfRange(u64),
    /// Error of r2r
    #[error("static_tf: r2r error {:?}", .0)]
    R2r(String),
}

impl TfError {
    /// Usage errors end the process quietly with a zero exit status.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            TfError::InvalidArgumentCount { .. } | TfError::ReservedFrameName(_)
        )
    }
}
