//! error types for the precompile bridge

use thiserror::Error;

use crate::{operation::Operation, status::Status};

pub type Result<T> = std::result::Result<T, PrecompileError>;

/// how the host should report a failed call
///
/// both classes revert; they differ only in who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// the kernel could not process the input at all, or broke protocol
    HardFailure,
    /// the caller supplied input of the wrong shape
    InputError,
}

/// structural input problems, detected before or by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("input too short: expected at least {expected} bytes, got {got}")]
    TooShort { expected: usize, got: usize },

    #[error("kernel rejected input")]
    Rejected,
}

/// failed precompile call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrecompileError {
    #[error("serialize error")]
    Serialize,

    #[error("deserialize error")]
    Deserialize,

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("{operation} returned status {status:?}, which it never produces")]
    UnexpectedStatus { operation: Operation, status: Status },

    #[error("unknown kernel status {0}")]
    UnknownStatus(u8),
}

impl PrecompileError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Input(_) => ErrorClass::InputError,
            Self::Serialize
            | Self::Deserialize
            | Self::UnexpectedStatus { .. }
            | Self::UnknownStatus(_) => ErrorClass::HardFailure,
        }
    }

    /// kernel status behind this error, `None` when the bridge rejected the
    /// input itself or the kernel answered outside the protocol
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Serialize => Some(Status::Serialize),
            Self::Deserialize => Some(Status::Deserialize),
            Self::Input(InputError::Rejected) => Some(Status::Input),
            Self::Input(_) => None,
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::UnknownStatus(_) => None,
        }
    }
}

/// registry construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("address suffix {0:#04x} registered twice")]
    DuplicateAddress(u8),

    #[error("no kernel provided for {0}")]
    MissingKernel(Operation),

    #[error("unsupported protocol version {0} (this build implements v{v})", v = crate::PROTOCOL_VERSION)]
    UnsupportedProtocol(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(PrecompileError::Serialize.class(), ErrorClass::HardFailure);
        assert_eq!(PrecompileError::Deserialize.class(), ErrorClass::HardFailure);
        assert_eq!(PrecompileError::UnknownStatus(9).class(), ErrorClass::HardFailure);
        assert_eq!(
            PrecompileError::from(InputError::Empty).class(),
            ErrorClass::InputError
        );
        assert_eq!(
            PrecompileError::Input(InputError::Rejected).class(),
            ErrorClass::InputError
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(PrecompileError::Deserialize.status(), Some(Status::Deserialize));
        assert_eq!(
            PrecompileError::Input(InputError::Rejected).status(),
            Some(Status::Input)
        );
        assert_eq!(PrecompileError::Input(InputError::Empty).status(), None);
        assert_eq!(PrecompileError::UnknownStatus(200).status(), None);
    }

    #[test]
    fn test_messages() {
        let err = PrecompileError::Input(InputError::TooShort { expected: 128, got: 5 });
        assert_eq!(
            err.to_string(),
            "input error: input too short: expected at least 128 bytes, got 5"
        );
        assert_eq!(
            RegistryError::DuplicateAddress(0x15).to_string(),
            "address suffix 0x15 registered twice"
        );
    }
}
