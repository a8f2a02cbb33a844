// SPDX‑License‑Identifier: MIT
//! # `poseidon‑bls12‑377`
//!
//! Width-4 **Poseidon** sponge over the BLS12-377 scalar field, written so that
//! every step is a field addition or multiplication and nothing branches on a
//! value. That is what lets the same code run natively or be recorded as
//! arithmetic-circuit constraints.
//!
//! ## High‑level architecture
//! * **Field arithmetic** – abstracted behind [`FieldOps`]; [`Native`] evaluates
//!   directly with [`ark-ff`], [`CountingOps`] tallies what a constraint recorder
//!   would emit.
//! * **Permutation core** – [`PoseidonBls12377`]: 8 full rounds, 56 partial
//!   rounds, `x⁵` S-box, published constant tables in [`constants`].
//! * **Sponge mode** – [`Sponge`]: 64-bit limb packing (rate = 3, capacity = 1),
//!   a linear shortcut for short inputs, two-to-one compression and 56-bit
//!   output chunking.
//!
//! [`ark-ff`]: https://docs.rs/ark-ff

pub mod constants;
mod error;
pub mod ops;
pub mod permutation;
pub mod sponge;

pub use ark_bls12_377::Fr;
pub use error::ConfigError;
pub use ops::{CountingOps, FieldOps, Native, Op};
pub use permutation::{Checked, Permutation, PoseidonBls12377, State};
pub use sponge::Sponge;

pub const SPONGE_WIDTH: usize = 4;
pub const SPONGE_RATE: usize = 3;
pub const FULL_ROUNDS: usize = 8;
pub const PARTIAL_ROUNDS: usize = 56;

/// Bits per input limb.
pub const LIMB_BITS: usize = 64;
/// Limbs packed into one field element.
pub const LIMBS_PER_ELEMENT: usize = 3;
/// Bits per output chunk in [`Sponge::to_vec`].
pub const CHUNK_BITS: usize = 56;

const _: () = assert!(FULL_ROUNDS % 2 == 0 && FULL_ROUNDS >= 2);
const _: () = assert!(SPONGE_RATE + 1 == SPONGE_WIDTH);
const _: () = assert!(LIMB_BITS * LIMBS_PER_ELEMENT < 253);
