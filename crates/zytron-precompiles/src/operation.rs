//! supported operations and their fixed shapes

use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// anemoi digest width (one bn254 scalar field element, big-endian)
pub const ANEMOI_OUTPUT_LEN: usize = 32;

/// encoded baby-jubjub point width (`x || y`)
pub const POINT_LEN: usize = 64;

/// one abi word
pub const WORD_LEN: usize = 32;

/// operations exposed as precompiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// anemoi jive254 variable-length hash
    Anemoi,
    /// baby-jubjub point addition
    PointAdd,
    /// baby-jubjub scalar multiplication
    ScalarMul,
    /// matchmaking circuit proof verification
    VerifyMatchmaking,
    /// shuffle circuit proof verification
    VerifyShuffle,
}

/// shape of a kernel's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// fills a buffer of exactly this many bytes
    Buffer(usize),
    /// reports only accept / reject
    Predicate,
}

impl OutputKind {
    /// bytes the caller allocates for the kernel
    pub const fn width(self) -> usize {
        match self {
            Self::Buffer(width) => width,
            Self::Predicate => 0,
        }
    }
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Anemoi,
        Operation::PointAdd,
        Operation::ScalarMul,
        Operation::VerifyMatchmaking,
        Operation::VerifyShuffle,
    ];

    /// low byte of the registry address
    pub const fn address_suffix(self) -> u8 {
        match self {
            Self::Anemoi => 0x14,
            Self::PointAdd => 0x15,
            Self::ScalarMul => 0x16,
            Self::VerifyMatchmaking => 0x17,
            Self::VerifyShuffle => 0x18,
        }
    }

    pub fn from_suffix(suffix: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.address_suffix() == suffix)
    }

    pub fn address(self) -> Address {
        precompile_address(self.address_suffix())
    }

    pub const fn output(self) -> OutputKind {
        match self {
            Self::Anemoi => OutputKind::Buffer(ANEMOI_OUTPUT_LEN),
            Self::PointAdd | Self::ScalarMul => OutputKind::Buffer(POINT_LEN),
            Self::VerifyMatchmaking | Self::VerifyShuffle => OutputKind::Predicate,
        }
    }

    pub const fn is_predicate(self) -> bool {
        matches!(self.output(), OutputKind::Predicate)
    }

    /// shortest input the kernel can possibly accept; anything shorter is
    /// rejected before crossing the native boundary
    pub const fn min_input_len(self) -> usize {
        match self {
            // at least one field element
            Self::Anemoi => WORD_LEN,
            // (x1, y1, x2, y2)
            Self::PointAdd => 4 * WORD_LEN,
            // (s, x, y)
            Self::ScalarMul => 3 * WORD_LEN,
            // at least one abi word of proof data
            Self::VerifyMatchmaking | Self::VerifyShuffle => WORD_LEN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Anemoi => "anemoi",
            Self::PointAdd => "point-add",
            Self::ScalarMul => "scalar-mul",
            Self::VerifyMatchmaking => "verify-matchmaking",
            Self::VerifyShuffle => "verify-shuffle",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// twenty-byte address with only the low byte set
pub fn precompile_address(suffix: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = suffix;
    Address::new(bytes)
}

/// low byte of `address` if every other byte is zero
pub fn address_suffix(address: &Address) -> Option<u8> {
    let bytes = address.as_slice();
    let (prefix, last) = bytes.split_at(bytes.len() - 1);
    if prefix.iter().any(|b| *b != 0) {
        return None;
    }
    Some(last[0])
}
