//! anemoi-jive variable-length hash over the bn254 scalar field
//!
//! input is a single abi `bytes32[]`; every element is reduced into the
//! field, absorbed by a rate-3 sponge around the anemoi permutation
//! (two columns, fourteen rounds, flystel s-box with `alpha = 5`) and the
//! first state word is returned as one big-endian 32-byte digest.
//!
//! the field is the base field of baby-jubjub, so [`Fq`] here is the same
//! type the curve kernels use for coordinates.

use ark_ed_on_bn254::Fq;
use ark_ff::{BigInteger, Field, MontFp, PrimeField};
use ark_std::vec::Vec;

use crate::{
    abi::{self, WORD_LEN},
    KernelError, Result,
};

/// digest width
pub const DIGEST_LEN: usize = WORD_LEN;

/// columns per state half
const N: usize = 2;

/// words absorbed per permutation
const RATE: usize = 2 * N - 1;

const ROUNDS: usize = 14;

const ALPHA: u64 = 5;

/// `5^-1 mod (r - 1)`, little-endian limbs
const ALPHA_INV: [u64; 4] = [
    0xcfe7f7a98ccccccd,
    0x535cb9d394945a0d,
    0x93736af8679aad17,
    0x26b6a528b427b354,
];

const GENERATOR: Fq = MontFp!("5");

const GENERATOR_INV: Fq =
    MontFp!("8755297148735710088898562298102910035419345760166413737479281674630323398247");

// digits of pi, reduced mod r
const PI_0: Fq =
    MontFp!("824104930199602784823943670164769700555607983825738307422343133481298736376");
const PI_1: Fq =
    MontFp!("2603526927268970796994549077750998294070306485422942434391779651897459981936");

/// per-round additive constants for both halves
struct RoundKeys {
    c: [[Fq; N]; ROUNDS],
    d: [[Fq; N]; ROUNDS],
}

impl RoundKeys {
    fn new() -> Self {
        let mut c = [[Fq::from(0u64); N]; ROUNDS];
        let mut d = [[Fq::from(0u64); N]; ROUNDS];

        let mut pi_0_r = Fq::from(1u64);
        for r in 0..ROUNDS {
            let mut pi_1_i = Fq::from(1u64);
            for i in 0..N {
                let mixed = (pi_0_r + pi_1_i).pow([ALPHA]);
                c[r][i] = GENERATOR * pi_0_r.square() + mixed;
                d[r][i] = GENERATOR * pi_1_i.square() + mixed + GENERATOR_INV;
                pi_1_i *= PI_1;
            }
            pi_0_r *= PI_0;
        }

        Self { c, d }
    }
}

/// sponge state, split into the `x` and `y` halves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct State {
    x: [Fq; N],
    y: [Fq; N],
}

impl State {
    fn zero() -> Self {
        Self {
            x: [Fq::from(0u64); N],
            y: [Fq::from(0u64); N],
        }
    }

    fn permute(&mut self, keys: &RoundKeys) {
        for r in 0..ROUNDS {
            for i in 0..N {
                self.x[i] += keys.c[r][i];
                self.y[i] += keys.d[r][i];
            }
            self.linear_layer();
            self.sbox();
        }
        self.linear_layer();
    }

    /// mds `[[1, g], [g, g^2 + 1]]` on each half (`y` rotated by one word),
    /// then the pseudo-hadamard mix between halves
    fn linear_layer(&mut self) {
        let g = GENERATOR;
        let g2_1 = g.square() + Fq::from(1u64);

        let [x0, x1] = self.x;
        self.x = [x0 + g * x1, g * x0 + g2_1 * x1];

        let [y0, y1] = self.y;
        self.y = [y1 + g * y0, g * y1 + g2_1 * y0];

        for i in 0..N {
            self.y[i] += self.x[i];
            self.x[i] += self.y[i];
        }
    }

    /// open flystel, column by column
    fn sbox(&mut self) {
        for i in 0..N {
            self.x[i] -= GENERATOR * self.y[i].square();
            self.y[i] -= self.x[i].pow(ALPHA_INV);
            self.x[i] += GENERATOR * self.y[i].square() + GENERATOR_INV;
        }
    }
}

/// hash a sequence of field elements
///
/// input whose length is not a positive multiple of the rate gets a `1`
/// appended and zero padding; otherwise the last block flips the capacity
/// word instead, so the two cases never collide.
pub fn hash(input: &[Fq]) -> Fq {
    let keys = RoundKeys::new();

    let mut padded: Vec<Fq> = input.to_vec();
    let sigma = if padded.is_empty() || padded.len() % RATE != 0 {
        padded.push(Fq::from(1u64));
        let rem = padded.len() % RATE;
        if rem != 0 {
            padded.resize(padded.len() + RATE - rem, Fq::from(0u64));
        }
        Fq::from(0u64)
    } else {
        Fq::from(1u64)
    };

    let mut state = State::zero();
    let blocks = padded.len() / RATE;
    for (k, block) in padded.chunks_exact(RATE).enumerate() {
        state.x[0] += block[0];
        state.x[1] += block[1];
        state.y[0] += block[2];
        if k + 1 == blocks {
            state.y[N - 1] += sigma;
        }
        state.permute(&keys);
    }

    state.x[0]
}

/// decode a `bytes32[]`, hash it, write the digest into `ret`
pub fn eval_variable_length_hash(data: &[u8], ret: &mut [u8]) -> Result<()> {
    if ret.len() != DIGEST_LEN {
        return Err(KernelError::Serialize);
    }

    let elements: Vec<Fq> = abi::decode_bytes32_array(data)?
        .iter()
        .map(|w| Fq::from_be_bytes_mod_order(w))
        .collect();

    let digest = hash(&elements);
    ret.copy_from_slice(&abi::left_pad(&digest.into_bigint().to_bytes_be())?);
    Ok(())
}
