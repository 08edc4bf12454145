#![cfg(feature = "std")]
// Functions in this file are all used but clippy complains still.
#![allow(dead_code)]

use anyhow::bail;
use secp256k1::{rand, Message, PublicKey, SecretKey, SECP256K1};
use tx_size::bitcoin::{
    absolute, transaction, Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness,
};
use tx_size::ScriptType;

/// Sighash byte appended to every ECDSA signature.
const SIGHASH_ALL: u8 = 0x01;

/// Something holding a key, produces the signature data of an input.
pub struct Signer {
    sk: SecretKey,
    pk: PublicKey,
}

impl Signer {
    /// Creates a new signer with random keys.
    pub fn new_random() -> Self {
        let sk = SecretKey::new(&mut rand::thread_rng());
        let pk = sk.public_key(&SECP256K1);
        Signer { sk, pk }
    }

    /// Returns the compressed public key.
    pub fn public_key(&self) -> Vec<u8> { self.pk.serialize().to_vec() }

    /// Returns a DER encoded ECDSA signature with the sighash byte appended.
    ///
    /// We only care about the length so the message is arbitrary.
    pub fn ecdsa_signature(&self) -> anyhow::Result<Vec<u8>> {
        let msg = Message::from_slice(&[0xab; 32])?;
        let mut sig = SECP256K1.sign_ecdsa(&msg, &self.sk).serialize_der().to_vec();
        sig.push(SIGHASH_ALL);
        Ok(sig)
    }

    /// Returns a placeholder for a BIP-340 signature using the default sighash.
    pub fn schnorr_signature(&self) -> Vec<u8> { vec![0; 64] }
}

/// Returns `data` as a single push, `data` must be shorter than 76 bytes.
pub fn push(data: &[u8]) -> Vec<u8> {
    assert!(data.len() < 0x4c, "use OP_PUSHDATA for long pushes");
    let mut v = vec![data.len() as u8];
    v.extend_from_slice(data);
    v
}

/// Builds a transaction spending one output of each of `inputs` and creating one output of each of
/// `outputs`, with real signature data in place.
pub fn signed_tx(inputs: &[ScriptType], outputs: &[ScriptType]) -> anyhow::Result<Transaction> {
    let signer = Signer::new_random();
    let sig = signer.ecdsa_signature()?;
    let pk = signer.public_key();

    let mut input = Vec::with_capacity(inputs.len());
    for ty in inputs {
        let (script_sig, witness) = match ty {
            ScriptType::P2pkh => ([push(&sig), push(&pk)].concat(), Witness::new()),
            ScriptType::P2pk => (push(&sig), Witness::new()),
            ScriptType::P2wpkh => (vec![], Witness::from_slice(&[&sig, &pk])),
            ScriptType::P2wpkhSh => {
                let program = [&[0x00u8, 0x14][..], &[0x11; 20][..]].concat();
                (push(&program), Witness::from_slice(&[&sig, &pk]))
            }
            ScriptType::P2tr => (vec![], Witness::from_slice(&[signer.schnorr_signature()])),
            ty => bail!("can not sign {}", ty),
        };
        input.push(TxIn {
            previous_output: OutPoint::null(),
            script_sig: ScriptBuf::from_bytes(script_sig),
            sequence: Sequence::MAX,
            witness,
        });
    }

    let output = outputs
        .iter()
        .map(|ty| TxOut {
            value: Amount::from_sat(10_000),
            script_pubkey: ScriptBuf::from_bytes(vec![0; ty.size()]),
        })
        .collect();

    Ok(Transaction {
        version: transaction::Version::TWO,
        lock_time: absolute::LockTime::ZERO,
        input,
        output,
    })
}
