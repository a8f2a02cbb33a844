// SPDX‑License‑Identifier: MIT
//! Width-4 Poseidon permutation in the optimized form: constants are added
//! after the S-box, one dense transition matrix `P` sits in front of the
//! partial rounds, and each partial round mixes with a sparse row.

use ark_ff::Zero;

use crate::constants::{
    MDS_MATRIX, PRE_SPARSE_MATRIX, ROUND_CONSTANTS, SPARSE_CONSTANTS, SPARSE_ROW_LEN,
};
use crate::ops::FieldOps;
use crate::{FULL_ROUNDS, Fr, PARTIAL_ROUNDS, SPONGE_WIDTH};

/// Sponge state. Lane 0 is the capacity lane and the hash output.
pub type State<V> = [V; SPONGE_WIDTH];

const HALF_FULL_ROUNDS: usize = FULL_ROUNDS / 2;

// Offsets into ROUND_CONSTANTS. Consecutive rounds read adjacent, disjoint windows.
const fn first_full_offset(round: usize) -> usize {
    (round + 1) * SPONGE_WIDTH
}

const TRANSITION_OFFSET: usize = HALF_FULL_ROUNDS * SPONGE_WIDTH;

const fn partial_offset(round: usize) -> usize {
    (HALF_FULL_ROUNDS + 1) * SPONGE_WIDTH + round
}

const fn second_full_offset(round: usize) -> usize {
    (HALF_FULL_ROUNDS + 1) * SPONGE_WIDTH + PARTIAL_ROUNDS + round * SPONGE_WIDTH
}

/// Witness that an evaluator works over the BLS12-377 scalar field and the
/// constant tables fit the round schedule. Only [`Sponge`](crate::Sponge) hands
/// one out, so a permutation never runs against a foreign field.
///
/// ```compile_fail
/// use ark_bls12_377::Fq;
/// use poseidon_bls12_377::permutation::Checked;
/// use poseidon_bls12_377::{Native, Permutation, PoseidonBls12377};
///
/// let mut state = [Fq::from(0u64); 4];
/// PoseidonBls12377::apply(Checked(()), &mut Native::<Fq>::new(), &mut state);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked(());

impl Checked {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

/// A permutation of the sponge state, evaluated through any [`FieldOps`].
pub trait Permutation {
    fn apply<O: FieldOps>(checked: Checked, ops: &mut O, state: &mut State<O::Var>);
}

/// Stateless Poseidon permutation over the BLS12-377 scalar field.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoseidonBls12377;

impl PoseidonBls12377 {
    /// Apply **in-place** to a full 4-element state.
    fn permute<O: FieldOps>(ops: &mut O, state: &mut State<O::Var>) {
        ops.on_permutation();
        add_constants(ops, state, 0);

        // ── first full rounds ───────────────────────────────────────────────
        for round in 0..HALF_FULL_ROUNDS - 1 {
            map_quintic(ops, state);
            add_constants(ops, state, first_full_offset(round));
            mul_matrix(ops, state, &MDS_MATRIX);
        }
        map_quintic(ops, state);
        add_constants(ops, state, TRANSITION_OFFSET);
        mul_matrix(ops, state, &PRE_SPARSE_MATRIX);

        // ── partial rounds ──────────────────────────────────────────────────
        for round in 0..PARTIAL_ROUNDS {
            partial_round(ops, state, round);
        }

        // ── second full rounds ──────────────────────────────────────────────
        for round in 0..HALF_FULL_ROUNDS - 1 {
            map_quintic(ops, state);
            add_constants(ops, state, second_full_offset(round));
            mul_matrix(ops, state, &MDS_MATRIX);
        }
        map_quintic(ops, state);
        mul_matrix(ops, state, &MDS_MATRIX);
    }
}

impl Permutation for PoseidonBls12377 {
    fn apply<O: FieldOps>(_: Checked, ops: &mut O, state: &mut State<O::Var>) {
        Self::permute(ops, state)
    }
}

//  ---------------------------------------------------------------------------
//  Round helpers
//  ---------------------------------------------------------------------------

/// x⁵ as x²→x⁴→x⁵.
#[inline(always)]
fn quintic<O: FieldOps>(ops: &mut O, x: O::Var) -> O::Var {
    let x2 = ops.mul(x, x); // x²
    let x4 = ops.mul(x2, x2); // x⁴
    ops.mul(x4, x) // x⁵
}

#[inline(always)]
fn map_quintic<O: FieldOps>(ops: &mut O, state: &mut State<O::Var>) {
    for s in state.iter_mut() {
        *s = quintic(ops, *s);
    }
}

#[inline(always)]
fn add_constants<O: FieldOps>(ops: &mut O, state: &mut State<O::Var>, offset: usize) {
    let window = &ROUND_CONSTANTS[offset..offset + SPONGE_WIDTH];
    for (s, k) in state.iter_mut().zip(window) {
        let k = ops.constant(*k);
        *s = ops.add(*s, k);
    }
}

/// `state ← state · m`, i.e. lane `i` becomes `Σ_j m[j][i] · state[j]`.
#[inline(always)]
fn mul_matrix<O: FieldOps>(
    ops: &mut O,
    state: &mut State<O::Var>,
    m: &[[Fr; SPONGE_WIDTH]; SPONGE_WIDTH],
) {
    let s = *state; // copy to avoid aliasing during computation
    for (i, lane) in state.iter_mut().enumerate() {
        let mut acc = ops.constant(Fr::zero());
        for (row, x) in m.iter().zip(s) {
            let c = ops.constant(row[i]);
            acc = ops.mul_acc(acc, c, x);
        }
        *lane = acc;
    }
}

/// S-box on lane 0, one additive constant, then the sparse mix. Lanes 1.. are
/// updated from lane 0 *before* it is overwritten; the factorization of the
/// partial-round matrices relies on this order.
#[inline]
fn partial_round<O: FieldOps>(ops: &mut O, state: &mut State<O::Var>, round: usize) {
    state[0] = quintic(ops, state[0]);
    let c = ops.constant(ROUND_CONSTANTS[partial_offset(round)]);
    state[0] = ops.add(state[0], c);

    let row = &SPARSE_CONSTANTS[SPARSE_ROW_LEN * round..SPARSE_ROW_LEN * (round + 1)];
    let (first_column, first_row) = row.split_at(SPONGE_WIDTH);

    let mut lane0 = ops.constant(Fr::zero());
    for (w, s) in first_column.iter().zip(*state) {
        let w = ops.constant(*w);
        lane0 = ops.mul_acc(lane0, w, s);
    }
    for (lane, v) in (1..SPONGE_WIDTH).zip(first_row) {
        let v = ops.constant(*v);
        state[lane] = ops.mul_acc(state[lane], state[0], v);
    }
    state[0] = lane0;
}

//  ---------------------------------------------------------------------------
//  TESTS
//  ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{CountingOps, Native, Op};
    use ark_ff::{Field, MontFp};
    use ark_std::UniformRand;
    use rand::{SeedableRng, rngs::SmallRng};
    use std::ops::Range;

    fn permute(mut state: State<Fr>) -> State<Fr> {
        PoseidonBls12377::permute(&mut Native::<Fr>::new(), &mut state);
        state
    }

    #[test]
    fn quintic_vs_pow() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut ops = Native::<Fr>::new();
        for _ in 0..1_000 {
            let x = Fr::rand(&mut rng);
            assert_eq!(quintic(&mut ops, x), x.pow([5u64]));
        }
    }

    #[test]
    fn zero_state_known_answer() {
        let expected: State<Fr> = [
            MontFp!(
                "1762986198521123154379023755674532743829740574657630405909857698701072658923"
            ),
            MontFp!(
                "1767483764171761189174912182531655531256854185761932869882462310849804006398"
            ),
            MontFp!(
                "6656138669115334505336336678043361729682478660521940178046451533570617300380"
            ),
            MontFp!(
                "4888943553468918640782466339586255327499135340272797653359870785159188959194"
            ),
        ];
        assert_eq!(permute([Fr::zero(); SPONGE_WIDTH]), expected);
    }

    #[test]
    fn ascending_state_known_answer() {
        let input = [1u64, 2, 3, 4].map(Fr::from);
        let expected: State<Fr> = [
            MontFp!(
                "5141780382873042124887205045093513341080833134667129002491398118899287875930"
            ),
            MontFp!(
                "7869032469578293037708741201596804387288922054800644890724160446776864134100"
            ),
            MontFp!(
                "50224687307953134174599472692055138287663565835556935297664156180753095522"
            ),
            MontFp!(
                "5778617965323148144873650650189468641809398029196064704255745241368796560416"
            ),
        ];
        assert_eq!(permute(input), expected);
    }

    #[test]
    fn round_offsets_tile_the_constant_table() {
        let mut reads: Vec<Range<usize>> = vec![0..SPONGE_WIDTH];
        for round in 0..HALF_FULL_ROUNDS - 1 {
            let o = first_full_offset(round);
            reads.push(o..o + SPONGE_WIDTH);
        }
        reads.push(TRANSITION_OFFSET..TRANSITION_OFFSET + SPONGE_WIDTH);
        for round in 0..PARTIAL_ROUNDS {
            let o = partial_offset(round);
            reads.push(o..o + 1);
        }
        for round in 0..HALF_FULL_ROUNDS - 1 {
            let o = second_full_offset(round);
            reads.push(o..o + SPONGE_WIDTH);
        }

        // one constant application per round, no gaps, no overlaps
        assert_eq!(reads.len(), FULL_ROUNDS + PARTIAL_ROUNDS);
        let mut next = 0;
        for r in &reads {
            assert_eq!(r.start, next, "gap or overlap at {r:?}");
            next = r.end;
        }
        assert_eq!(next, ROUND_CONSTANTS.len());
    }

    #[test]
    fn operation_counts_per_permutation() {
        let mut ops = CountingOps::new(Native::<Fr>::new());
        let mut state = [Fr::from(9u64); SPONGE_WIDTH];
        PoseidonBls12377::permute(&mut ops, &mut state);

        // every round-constant entry is added exactly once
        assert_eq!(ops.count(Op::Add), ROUND_CONSTANTS.len() as u64);
        // 8 full rounds x 4 lanes + 56 partial S-boxes, 3 multiplications each
        assert_eq!(ops.count(Op::Mul), 264);
        // 8 dense mixes of 16 plus 7 per sparse round
        assert_eq!(ops.count(Op::MulAcc), 8 * 16 + 7 * 56);
        assert_eq!(ops.count(Op::Permutation), 1);
    }

    #[test]
    fn deterministic_and_state_sensitive() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let state: State<Fr> = core::array::from_fn(|_| Fr::rand(&mut rng));
            let a = permute(state);
            assert_eq!(a, permute(state));
            for lane in 0..SPONGE_WIDTH {
                let mut tweaked = state;
                tweaked[lane] += Fr::from(1u64);
                assert_ne!(permute(tweaked), a);
            }
        }
    }
}
