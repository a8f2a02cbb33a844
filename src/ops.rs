// SPDX‑License‑Identifier: MIT
//! Arithmetic back-ends the permutation and sponge are written against.
//!
//! Everything the hash does goes through [`FieldOps`]: additions,
//! multiplications, multiply-accumulate and bit (de)composition. No comparison
//! or branch ever depends on a value, so the same code drives a native evaluator
//! or a constraint recorder.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use serde::Serialize;

use crate::Fr;

/// Field arithmetic capability over one fixed prime field.
pub trait FieldOps {
    /// Handle to a field value (the value itself, or a wire in a circuit).
    type Var: Copy;

    /// Little-endian bytes of the modulus this evaluator works over.
    fn modulus_le_bytes(&self) -> Vec<u8>;

    /// Lift a published constant.
    fn constant(&mut self, c: Fr) -> Self::Var;

    fn add(&mut self, a: Self::Var, b: Self::Var) -> Self::Var;

    fn mul(&mut self, a: Self::Var, b: Self::Var) -> Self::Var;

    /// `acc + a * b`
    fn mul_acc(&mut self, acc: Self::Var, a: Self::Var, b: Self::Var) -> Self::Var;

    /// Little-endian bit decomposition, exactly field-bit-length bits long.
    fn to_bits(&mut self, x: Self::Var) -> Vec<Self::Var>;

    /// Inverse of [`FieldOps::to_bits`] on any little-endian window of bits.
    fn from_bits(&mut self, bits: &[Self::Var]) -> Self::Var;

    /// Called once at the start of every permutation.
    fn on_permutation(&mut self) {}
}

//  ---------------------------------------------------------------------------
//  Native evaluation
//  ---------------------------------------------------------------------------

/// Direct evaluation over an arkworks prime field.
#[derive(Debug, Clone, Copy)]
pub struct Native<F> {
    _field: PhantomData<F>,
}

impl<F> Native<F> {
    pub const fn new() -> Self {
        Self {
            _field: PhantomData,
        }
    }
}

impl<F> Default for Native<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeField> FieldOps for Native<F> {
    type Var = F;

    fn modulus_le_bytes(&self) -> Vec<u8> {
        F::MODULUS.to_bytes_le()
    }

    #[inline]
    fn constant(&mut self, c: Fr) -> F {
        F::from_le_bytes_mod_order(&c.into_bigint().to_bytes_le())
    }

    #[inline(always)]
    fn add(&mut self, a: F, b: F) -> F {
        a + b
    }

    #[inline(always)]
    fn mul(&mut self, a: F, b: F) -> F {
        a * b
    }

    #[inline(always)]
    fn mul_acc(&mut self, acc: F, a: F, b: F) -> F {
        acc + a * b
    }

    fn to_bits(&mut self, x: F) -> Vec<F> {
        x.into_bigint()
            .to_bits_le()
            .into_iter()
            .take(F::MODULUS_BIT_SIZE as usize)
            .map(|b| if b { F::one() } else { F::zero() })
            .collect()
    }

    fn from_bits(&mut self, bits: &[F]) -> F {
        bits.iter()
            .rev()
            .fold(F::zero(), |acc, bit| acc.double() + bit)
    }
}

//  ---------------------------------------------------------------------------
//  Operation counting
//  ---------------------------------------------------------------------------

/// Primitive tallied by [`CountingOps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Op {
    Add,
    Mul,
    MulAcc,
    ToBits,
    FromBits,
    Permutation,
}

/// Wraps another evaluator and counts every primitive it is asked for, the way a
/// constraint recorder would see the hash. Constants are free.
#[derive(Debug, Clone, Default)]
pub struct CountingOps<O> {
    inner: O,
    counts: BTreeMap<Op, u64>,
}

impl<O: FieldOps> CountingOps<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            counts: BTreeMap::new(),
        }
    }

    pub fn count(&self, op: Op) -> u64 {
        self.counts.get(&op).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<Op, u64> {
        &self.counts
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    #[inline]
    fn bump(&mut self, op: Op) {
        *self.counts.entry(op).or_insert(0) += 1;
    }
}

impl<O: FieldOps> FieldOps for CountingOps<O> {
    type Var = O::Var;

    fn modulus_le_bytes(&self) -> Vec<u8> {
        self.inner.modulus_le_bytes()
    }

    fn constant(&mut self, c: Fr) -> Self::Var {
        self.inner.constant(c)
    }

    fn add(&mut self, a: Self::Var, b: Self::Var) -> Self::Var {
        self.bump(Op::Add);
        self.inner.add(a, b)
    }

    fn mul(&mut self, a: Self::Var, b: Self::Var) -> Self::Var {
        self.bump(Op::Mul);
        self.inner.mul(a, b)
    }

    fn mul_acc(&mut self, acc: Self::Var, a: Self::Var, b: Self::Var) -> Self::Var {
        self.bump(Op::MulAcc);
        self.inner.mul_acc(acc, a, b)
    }

    fn to_bits(&mut self, x: Self::Var) -> Vec<Self::Var> {
        self.bump(Op::ToBits);
        self.inner.to_bits(x)
    }

    fn from_bits(&mut self, bits: &[Self::Var]) -> Self::Var {
        self.bump(Op::FromBits);
        self.inner.from_bits(bits)
    }

    fn on_permutation(&mut self) {
        self.bump(Op::Permutation);
        self.inner.on_permutation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::UniformRand;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn bits_roundtrip() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ops = Native::<Fr>::new();
        for _ in 0..100 {
            let x = Fr::rand(&mut rng);
            let bits = ops.to_bits(x);
            assert_eq!(bits.len(), 253);
            assert!(bits.iter().all(|b| b.is_zero() || *b == Fr::from(1u64)));
            assert_eq!(ops.from_bits(&bits), x);
        }
    }

    #[test]
    fn bits_are_little_endian() {
        let mut ops = Native::<Fr>::new();
        let bits = ops.to_bits(Fr::from(6u64));
        assert!(bits[0].is_zero());
        assert_eq!(bits[1], Fr::from(1u64));
        assert_eq!(bits[2], Fr::from(1u64));
        assert!(bits[3..].iter().all(Zero::is_zero));
        assert_eq!(ops.from_bits(&bits[1..3]), Fr::from(3u64));
    }

    #[test]
    fn mul_acc_matches_definition() {
        let mut ops = Native::<Fr>::new();
        let (acc, a, b) = (Fr::from(5u64), Fr::from(7u64), Fr::from(11u64));
        assert_eq!(ops.mul_acc(acc, a, b), Fr::from(82u64));
    }

    #[test]
    fn constants_lift_by_integer_value() {
        let mut ops = Native::<ark_bls12_377::Fq>::new();
        assert_eq!(ops.constant(Fr::from(42u64)), ark_bls12_377::Fq::from(42u64));
    }

    #[test]
    fn counting_delegates_and_tallies() {
        let mut ops = CountingOps::new(Native::<Fr>::new());
        let two = ops.constant(Fr::from(2u64));
        let three = ops.constant(Fr::from(3u64));
        let five = ops.add(two, three);
        let six = ops.mul(two, three);
        let r = ops.mul_acc(five, two, six);
        assert_eq!(r, Fr::from(17u64));
        ops.on_permutation();
        assert_eq!(ops.count(Op::Add), 1);
        assert_eq!(ops.count(Op::Mul), 1);
        assert_eq!(ops.count(Op::MulAcc), 1);
        assert_eq!(ops.count(Op::Permutation), 1);
        assert_eq!(ops.count(Op::ToBits), 0);
        ops.reset();
        assert!(ops.counts().is_empty());
    }
}
