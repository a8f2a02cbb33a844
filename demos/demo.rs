//! Simple CLI demo.
//!
//! `$ cargo run --release --example demo 1 2 3 4 5 6 7`
//!
//! Hashes the given 64-bit limbs with `hash_or_noop` and prints the digest and
//! its five 56-bit chunks.

use ark_ff::PrimeField;
use poseidon_bls12_377::{Fr, Native, Sponge};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ----------------------------------------------- read CLI arguments
    let limbs = env::args()
        .skip(1)
        .map(|arg| arg.parse::<u64>().map(Fr::from))
        .collect::<Result<Vec<_>, _>>()?;

    // ----------------------------------------------- hash
    let mut ops = Native::<Fr>::new();
    let mut sponge = Sponge::new(&mut ops)?;
    let digest = sponge.hash_or_noop(&limbs);
    println!("digest : {}", digest.into_bigint());

    // ----------------------------------------------- 56-bit chunks
    for (i, chunk) in sponge.to_vec(digest).iter().enumerate() {
        println!("chunk {i}: {:014x}", chunk.into_bigint().0[0]);
    }
    Ok(())
}
