//! kernel error types

use core::fmt;

use crate::STATUS_OK;

/// Errors a kernel can report through its status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Result could not be encoded into the output buffer
    Serialize,

    /// Input could not be parsed (short input, point off the curve, ...)
    Deserialize,

    /// Proof rejected by a verifier
    VerifyFail,

    /// Input violates a structural precondition (empty, null pointer)
    Input,
}

impl KernelError {
    /// Status byte written across the native boundary
    pub const fn code(&self) -> u8 {
        match self {
            Self::Serialize => 1,
            Self::Deserialize => 2,
            Self::VerifyFail => 3,
            Self::Input => 4,
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize => write!(f, "serialize error"),
            Self::Deserialize => write!(f, "deserialize error"),
            Self::VerifyFail => write!(f, "verification failed"),
            Self::Input => write!(f, "input error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

pub type Result<T> = core::result::Result<T, KernelError>;

/// Collapse a kernel result into its status byte
pub fn status_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}
