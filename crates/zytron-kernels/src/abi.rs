//! abi word helpers
//!
//! kernel inputs are sequences of 32-byte big-endian words, the layout the
//! calling contract produces for static `uint256` / `bytes32` arguments.
//! trailing bytes after the last expected word are ignored. the anemoi
//! kernel takes a single dynamic `bytes32[]` instead: an offset word, then
//! a length word and the elements at that offset.

use ark_std::vec::Vec;

use crate::{KernelError, Result};

/// width of one abi word
pub const WORD_LEN: usize = 32;

/// read the first `N` words of `data`
pub fn decode_words<const N: usize>(data: &[u8]) -> Result<[[u8; WORD_LEN]; N]> {
    if data.len() < N * WORD_LEN {
        return Err(KernelError::Deserialize);
    }

    let mut words = [[0u8; WORD_LEN]; N];
    for (word, chunk) in words.iter_mut().zip(data.chunks_exact(WORD_LEN)) {
        word.copy_from_slice(chunk);
    }

    Ok(words)
}

/// split `data` into whole words, dropping a partial tail
pub fn split_bytes32(data: &[u8]) -> Result<Vec<&[u8; WORD_LEN]>> {
    data.chunks_exact(WORD_LEN)
        .map(|chunk| chunk.try_into().map_err(|_| KernelError::Deserialize))
        .collect()
}

/// concatenate words back into a flat buffer
pub fn join_bytes32(words: &[[u8; WORD_LEN]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * WORD_LEN);
    for word in words {
        out.extend_from_slice(word);
    }
    out
}

/// decode a lone abi `bytes32[]` argument
pub fn decode_bytes32_array(data: &[u8]) -> Result<Vec<[u8; WORD_LEN]>> {
    let [head] = decode_words::<1>(data)?;
    let offset = word_to_usize(&head)?;

    let body = data.get(offset..).ok_or(KernelError::Deserialize)?;
    let [len] = decode_words::<1>(body)?;
    let len = word_to_usize(&len)?;

    let end = len
        .checked_mul(WORD_LEN)
        .and_then(|n| n.checked_add(WORD_LEN))
        .ok_or(KernelError::Deserialize)?;
    let elements = body.get(WORD_LEN..end).ok_or(KernelError::Deserialize)?;

    Ok(split_bytes32(elements)?.into_iter().copied().collect())
}

/// abi-encode `words` as a lone `bytes32[]` argument
pub fn encode_bytes32_array(words: &[[u8; WORD_LEN]]) -> Vec<u8> {
    let mut out = Vec::with_capacity((words.len() + 2) * WORD_LEN);
    out.extend_from_slice(&usize_to_word(WORD_LEN));
    out.extend_from_slice(&usize_to_word(words.len()));
    out.extend_from_slice(&join_bytes32(words));
    out
}

/// read an offset or length word; anything beyond `u64` is malformed
fn word_to_usize(word: &[u8; WORD_LEN]) -> Result<usize> {
    let (high, low) = word.split_at(WORD_LEN - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(KernelError::Deserialize);
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(bytes)).map_err(|_| KernelError::Deserialize)
}

fn usize_to_word(value: usize) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

/// left-pad a big-endian integer encoding to a full word
pub fn left_pad(bytes: &[u8]) -> Result<[u8; WORD_LEN]> {
    if bytes.len() > WORD_LEN {
        return Err(KernelError::Serialize);
    }
    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - bytes.len()..].copy_from_slice(bytes);
    Ok(word)
}
