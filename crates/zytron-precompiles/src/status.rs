//! kernel status protocol
//!
//! every kernel call answers with one status byte from a closed set. the
//! byte is carried out-of-band and never embedded in the output buffer.
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | serialization error |
//! | 2 | deserialization error |
//! | 3 | verification failed (predicates only) |
//! | 4 | input error |

use crate::{
    error::{InputError, PrecompileError},
    operation::Operation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    Serialize = 1,
    Deserialize = 2,
    VerifyFail = 3,
    Input = 4,
}

impl Status {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::Serialize),
            2 => Some(Self::Deserialize),
            3 => Some(Self::VerifyFail),
            4 => Some(Self::Input),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = PrecompileError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(PrecompileError::UnknownStatus(code))
    }
}

/// what a kernel call amounted to, once its status is understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelOutcome {
    /// status 0: output buffer is valid / proof accepted
    Accepted,
    /// status 3 on a predicate: proof rejected
    Rejected,
}

/// interpret a raw status byte for `operation`
///
/// keeps the three outcomes apart: hard failure and malformed input become
/// errors, a rejected proof stays data.
pub fn decode(operation: Operation, code: u8) -> Result<KernelOutcome, PrecompileError> {
    match Status::try_from(code)? {
        Status::Success => Ok(KernelOutcome::Accepted),
        Status::Serialize => Err(PrecompileError::Serialize),
        Status::Deserialize => Err(PrecompileError::Deserialize),
        Status::Input => Err(PrecompileError::Input(InputError::Rejected)),
        Status::VerifyFail if operation.is_predicate() => Ok(KernelOutcome::Rejected),
        status @ Status::VerifyFail => Err(PrecompileError::UnexpectedStatus { operation, status }),
    }
}
