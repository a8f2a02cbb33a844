// SPDX‑License‑Identifier: MIT
//! Sponge facade over the permutation: limb packing and absorption, the
//! short-input shortcut, two-to-one compression and 56-bit output chunking.

use std::marker::PhantomData;

use ark_ff::{BigInteger, Field, PrimeField, Zero};
use once_cell::sync::Lazy;
use tracing::{error, instrument, trace};

use crate::permutation::{Checked, Permutation, PoseidonBls12377, State};
use crate::{
    CHUNK_BITS, ConfigError, FieldOps, Fr, LIMB_BITS, LIMBS_PER_ELEMENT, SPONGE_RATE,
    SPONGE_WIDTH, constants,
};

/// Inputs up to this length skip the permutation in [`Sponge::hash_or_noop`].
pub const SHORT_INPUT_LEN: usize = 3;

/// `(2^64)^k` for `k < LIMBS_PER_ELEMENT`. The short-input shortcut uses the same
/// weights, with `alpha = (2^32)^2`.
static LIMB_WEIGHTS: Lazy<[Fr; LIMBS_PER_ELEMENT]> = Lazy::new(|| {
    let two = Fr::from(2u64);
    core::array::from_fn(|k| two.pow([(LIMB_BITS * k) as u64]))
});

/// Hashing entry points, evaluated through a borrowed [`FieldOps`] back-end.
///
/// ```
/// use poseidon_bls12_377::{Fr, Native, Sponge};
///
/// let mut ops = Native::<Fr>::new();
/// let mut sponge = Sponge::new(&mut ops)?;
/// let digest = sponge.hash_no_pad(&[1u64, 2, 3, 4].map(Fr::from));
/// assert_eq!(sponge.to_vec(digest).len(), 5);
/// # Ok::<(), poseidon_bls12_377::ConfigError>(())
/// ```
pub struct Sponge<'a, O: FieldOps, P = PoseidonBls12377> {
    ops: &'a mut O,
    checked: Checked,
    _permutation: PhantomData<P>,
}

impl<'a, O: FieldOps> Sponge<'a, O> {
    /// Sponge over the published Poseidon permutation.
    ///
    /// Fails when `ops` works over a field other than the BLS12-377 scalar field,
    /// or when the constant tables do not fit the round schedule.
    pub fn new(ops: &'a mut O) -> Result<Self, ConfigError> {
        Self::with_permutation(ops)
    }
}

impl<'a, O: FieldOps, P: Permutation> Sponge<'a, O, P> {
    pub fn with_permutation(ops: &'a mut O) -> Result<Self, ConfigError> {
        let found = ops.modulus_le_bytes();
        if found != Fr::MODULUS.to_bytes_le() {
            let err = ConfigError::FieldMismatch {
                found_bits: bit_len(&found),
            };
            error!(%err, "refusing to build poseidon sponge");
            return Err(err);
        }
        constants::validate()?;
        Ok(Self {
            ops,
            checked: Checked::new(),
            _permutation: PhantomData,
        })
    }

    /// The evaluator, for callers that keep building on the same back-end.
    pub fn ops(&mut self) -> &mut O {
        self.ops
    }

    pub fn permute(&mut self, mut state: State<O::Var>) -> State<O::Var> {
        P::apply(self.checked, self.ops, &mut state);
        state
    }

    /// Absorb 64-bit limbs, three per field element and three elements per
    /// permutation call, and return lane 0.
    ///
    /// Packed elements overwrite lanes 1..=3; lane 0 is never written, and lanes
    /// a short final window does not reach keep the previous permutation output.
    /// There is no padding or length tag: inputs that produce identical windows
    /// hash identically, and the empty input hashes to zero.
    #[instrument(level = "trace", skip_all, fields(limbs = input.len()))]
    pub fn hash_no_pad(&mut self, input: &[O::Var]) -> O::Var {
        let mut state = [self.zero(); SPONGE_WIDTH];
        for window in input.chunks(SPONGE_RATE * LIMBS_PER_ELEMENT) {
            for (lane, group) in state[1..].iter_mut().zip(window.chunks(LIMBS_PER_ELEMENT)) {
                *lane = self.pack(group);
            }
            P::apply(self.checked, self.ops, &mut state);
        }
        trace!(
            windows = input.len().div_ceil(SPONGE_RATE * LIMBS_PER_ELEMENT),
            "absorbed"
        );
        state[0]
    }

    /// Short inputs are combined linearly as `Σ input[i] · alpha^i`; anything
    /// longer goes through [`Sponge::hash_no_pad`].
    pub fn hash_or_noop(&mut self, input: &[O::Var]) -> O::Var {
        if input.len() <= SHORT_INPUT_LEN {
            self.pack(input)
        } else {
            self.hash_no_pad(input)
        }
    }

    /// Compress two digests with a single permutation of `[0, 0, left, right]`.
    pub fn two_to_one(&mut self, left: O::Var, right: O::Var) -> O::Var {
        let zero = self.zero();
        let state = self.permute([zero, zero, left, right]);
        state[0]
    }

    /// Re-encode a digest as little-endian 56-bit chunks; the last one is short.
    /// 64-bit chunks would collide under the downstream packing.
    pub fn to_vec(&mut self, hash: O::Var) -> Vec<O::Var> {
        let bits = self.ops.to_bits(hash);
        bits.chunks(CHUNK_BITS)
            .map(|chunk| self.ops.from_bits(chunk))
            .collect()
    }

    fn zero(&mut self) -> O::Var {
        self.ops.constant(Fr::zero())
    }

    fn pack(&mut self, limbs: &[O::Var]) -> O::Var {
        let mut acc = self.zero();
        for (limb, weight) in limbs.iter().zip(LIMB_WEIGHTS.iter()) {
            let weight = self.ops.constant(*weight);
            acc = self.ops.mul_acc(acc, *limb, weight);
        }
        acc
    }
}

fn bit_len(le_bytes: &[u8]) -> usize {
    le_bytes
        .iter()
        .rposition(|b| *b != 0)
        .map_or(0, |i| i * 8 + (8 - le_bytes[i].leading_zeros() as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{CountingOps, Native, Op};
    use ark_bls12_377::Fq;

    /// Lane rotation, so absorption can be read straight off the output.
    struct RotateRight;

    impl Permutation for RotateRight {
        fn apply<O: FieldOps>(_: Checked, _ops: &mut O, state: &mut State<O::Var>) {
            state.rotate_right(1);
        }
    }

    fn fr(values: &[u64]) -> Vec<Fr> {
        values.iter().copied().map(Fr::from).collect()
    }

    fn packed(limbs: &[u64]) -> Fr {
        limbs
            .iter()
            .zip(LIMB_WEIGHTS.iter())
            .map(|(l, w)| Fr::from(*l) * w)
            .sum()
    }

    #[test]
    fn limb_weights_are_powers_of_two_to_the_64() {
        let two_64 = Fr::from(u64::MAX) + Fr::from(1u64);
        assert_eq!(LIMB_WEIGHTS[0], Fr::from(1u64));
        assert_eq!(LIMB_WEIGHTS[1], two_64);
        assert_eq!(LIMB_WEIGHTS[2], two_64 * two_64);
    }

    #[test]
    fn rejects_foreign_field() {
        let mut ops = Native::<Fq>::new();
        let err = Sponge::new(&mut ops).err();
        assert_eq!(err, Some(ConfigError::FieldMismatch { found_bits: 377 }));
    }

    #[test]
    fn foreign_field_never_reaches_permutation() {
        let mut ops = CountingOps::new(Native::<Fq>::new());
        assert!(Sponge::new(&mut ops).is_err());
        assert!(Sponge::<_, RotateRight>::with_permutation(&mut ops).is_err());
        assert_eq!(ops.count(Op::Permutation), 0);
    }

    #[test]
    fn accepts_scalar_field() {
        let mut ops = Native::<Fr>::new();
        assert!(Sponge::new(&mut ops).is_ok());
    }

    #[test]
    fn single_window_fills_lanes_one_to_three() {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::<_, RotateRight>::with_permutation(&mut ops).unwrap();
        // [0, p(1,2,3), p(4,5,6), p(7)] rotated right puts p(7) in lane 0
        let out = sponge.hash_no_pad(&fr(&[1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(out, packed(&[7]));
    }

    #[test]
    fn short_window_keeps_previous_lanes() {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::<_, RotateRight>::with_permutation(&mut ops).unwrap();
        // window 1: [0, a, b, c] -> [c, 0, a, b]
        // window 2 writes lane 1 only: [c, p(10), a, b] -> [b, c, p(10), a]
        let out = sponge.hash_no_pad(&fr(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(out, packed(&[4, 5, 6]));
    }

    #[test]
    fn empty_input_hashes_to_zero_without_permuting() {
        let mut ops = CountingOps::new(Native::<Fr>::new());
        let mut sponge = Sponge::new(&mut ops).unwrap();
        assert!(sponge.hash_no_pad(&[]).is_zero());
        assert!(sponge.hash_or_noop(&[]).is_zero());
        assert_eq!(ops.count(Op::Permutation), 0);
    }

    #[test]
    fn chunking_of_small_value() {
        let mut ops = Native::<Fr>::new();
        let mut sponge = Sponge::new(&mut ops).unwrap();
        let x = Fr::from(1u64 << 57) + Fr::from(5u64);
        let chunks = sponge.to_vec(x);
        assert_eq!(chunks.len(), 5);
        assert_eq!(chunks[0], Fr::from(5u64));
        assert_eq!(chunks[1], Fr::from(2u64));
        assert!(chunks[2..].iter().all(Zero::is_zero));
    }

    #[test]
    fn bit_len_of_moduli() {
        assert_eq!(bit_len(&Fr::MODULUS.to_bytes_le()), 253);
        assert_eq!(bit_len(&Fq::MODULUS.to_bytes_le()), 377);
        assert_eq!(bit_len(&[0, 0]), 0);
        assert_eq!(bit_len(&[0xff, 0x01]), 9);
    }
}
