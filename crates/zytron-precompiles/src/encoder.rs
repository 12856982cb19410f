//! result encoding
//!
//! buffer-producing operations return their fixed-width buffer as-is.
//! predicates return the canonical 32-byte abi `bool` word, never a raw
//! status byte, because the calling contract decodes a typed boolean.

use alloy_primitives::Bytes;
use alloy_sol_types::SolValue;

/// successful precompile result, before host encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecompileOutput {
    /// fixed-width kernel output
    Buffer(Bytes),
    /// predicate verdict; `false` is a rejected proof, not a failure
    Verdict(bool),
}

impl PrecompileOutput {
    /// return data handed back to the calling contract
    pub fn encode(&self) -> Bytes {
        match self {
            Self::Buffer(bytes) => bytes.clone(),
            Self::Verdict(verdict) => encode_bool(*verdict),
        }
    }

    pub fn into_bytes(self) -> Bytes {
        match self {
            Self::Buffer(bytes) => bytes,
            Self::Verdict(verdict) => encode_bool(verdict),
        }
    }

    /// raw kernel bytes; empty for predicates
    pub fn buffer(&self) -> &[u8] {
        match self {
            Self::Buffer(bytes) => &bytes[..],
            Self::Verdict(_) => &[],
        }
    }

    pub fn verdict(&self) -> Option<bool> {
        match self {
            Self::Buffer(_) => None,
            Self::Verdict(verdict) => Some(*verdict),
        }
    }
}

/// 32-byte left-padded abi boolean word
pub fn encode_bool(value: bool) -> Bytes {
    Bytes::from(value.abi_encode())
}

/// decode an abi boolean word, `None` if it is not one
pub fn decode_bool(word: &[u8]) -> Option<bool> {
    if word.len() != 32 {
        return None;
    }
    bool::abi_decode_validate(word).ok()
}
