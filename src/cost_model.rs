// SPDX-License-Identifier: CC0-1.0

//! The byte costs used to price inputs, outputs and transaction overhead.

use crate::consts::*;

/// Protocol byte costs used by the size estimator.
///
/// All values are in bytes. Signature and key costs include the push opcode that precedes them in
/// a script or witness item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde"))]
pub struct CostModel {
    /// Transaction overhead without witness data.
    ///
    /// Version, locktime and the input/output counts, approximated as `16 + 4 + 4 + 16`.
    pub legacy_tx_overhead: usize,
    /// Transaction overhead when the segwit marker and flag are present.
    pub witness_tx_overhead: usize,
    /// Witness of a non-witness input inside a segwit transaction (a single `0x00`).
    pub legacy_witness_stack: usize,
    /// ECDSA signature plus push opcode.
    pub ecdsa_signature: usize,
    /// Schnorr signature plus push opcode.
    pub schnorr_signature: usize,
    /// Compressed public key plus push opcode.
    pub public_key: usize,
    /// P2WPKH witness: item count, signature and public key.
    pub p2wpkh_witness: usize,
    /// P2TR key path witness: item count and signature.
    pub p2tr_witness: usize,
    /// `script_sig` of a nested P2WPKH input: the pushed witness program.
    pub p2wpkh_sh_redeem: usize,
}

impl CostModel {
    /// Byte costs of the Bitcoin protocol.
    pub const BITCOIN: Self = {
        let legacy_tx_overhead = 16 + 4 + 4 + 16;
        let ecdsa_signature = ECDSA_SIGNATURE_SIZE + PUSH_OPCODE_SIZE;
        let schnorr_signature = SCHNORR_SIGNATURE_SIZE + PUSH_OPCODE_SIZE;
        let public_key = COMPRESSED_PUBLIC_KEY_SIZE + PUSH_OPCODE_SIZE;

        CostModel {
            legacy_tx_overhead,
            // Marker and flag.
            witness_tx_overhead: legacy_tx_overhead + 1 + 1,
            legacy_witness_stack: WITNESS_ITEM_COUNT_SIZE,
            ecdsa_signature,
            schnorr_signature,
            public_key,
            p2wpkh_witness: WITNESS_ITEM_COUNT_SIZE + ecdsa_signature + public_key,
            p2tr_witness: WITNESS_ITEM_COUNT_SIZE + schnorr_signature,
            p2wpkh_sh_redeem: P2WPKH_PROGRAM_SIZE + PUSH_OPCODE_SIZE,
        }
    };

    /// Returns the transaction overhead for a segwit or a legacy transaction.
    pub fn tx_overhead(&self, segwit: bool) -> usize {
        if segwit {
            self.witness_tx_overhead
        } else {
            self.legacy_tx_overhead
        }
    }
}

impl Default for CostModel {
    fn default() -> Self { Self::BITCOIN }
}
