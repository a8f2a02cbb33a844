// SPDX‑License‑Identifier: MIT
use thiserror::Error;

/// Start-up failures. None of these can be recovered from: the evaluator or the
/// constant tables are wrong, and every digest produced anyway would be garbage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "evaluator works over a {found_bits}-bit field, the poseidon constants are published for the BLS12-377 scalar field"
    )]
    FieldMismatch { found_bits: usize },

    #[error("{table} table has {found} entries, the round schedule reads {expected}")]
    TableLength {
        table: &'static str,
        expected: usize,
        found: usize,
    },
}
