// SPDX-License-Identifier: CC0-1.0

//! Serialized field sizes of a Bitcoin transaction, in bytes.
//!
//! Compact size (varint) fields are costed as a single byte, i.e. lengths below `0xfd`.

/// Previous transaction id of an outpoint.
pub(crate) const PREVIOUS_TXID_SIZE: usize = 32;
/// Previous output index of an outpoint.
pub(crate) const PREVIOUS_OUTPUT_INDEX_SIZE: usize = 4;
/// Compact size prefix of a `script_sig` or `script_pubkey`.
pub(crate) const SCRIPT_LENGTH_SIZE: usize = 1;
/// Input sequence number.
pub(crate) const SEQUENCE_SIZE: usize = 4;
/// Output value in satoshis.
pub(crate) const VALUE_SIZE: usize = 8;

/// Fixed part of an input: outpoint, script length and sequence.
pub(crate) const INPUT_BASE_SIZE: usize =
    PREVIOUS_TXID_SIZE + PREVIOUS_OUTPUT_INDEX_SIZE + SCRIPT_LENGTH_SIZE + SEQUENCE_SIZE;
/// Fixed part of an output: value and script length.
pub(crate) const OUTPUT_BASE_SIZE: usize = VALUE_SIZE + SCRIPT_LENGTH_SIZE;

/// ECDSA signature, DER encoded with sighash byte, upper bound.
pub(crate) const ECDSA_SIGNATURE_SIZE: usize = 72;
/// BIP-340 Schnorr signature with the default sighash.
pub(crate) const SCHNORR_SIGNATURE_SIZE: usize = 64;
/// Compressed secp256k1 public key.
pub(crate) const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
/// `OP_0 <20-byte-key-hash>`, the redeem script of a nested P2WPKH output.
pub(crate) const P2WPKH_PROGRAM_SIZE: usize = 22;
/// Push opcode preceding a data push of at most 75 bytes.
pub(crate) const PUSH_OPCODE_SIZE: usize = 1;
/// Compact size prefix holding the number of witness stack items.
pub(crate) const WITNESS_ITEM_COUNT_SIZE: usize = 1;
