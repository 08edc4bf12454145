// SPDX-License-Identifier: CC0-1.0

use core::fmt;
use core::str::FromStr;

use bitcoin::Script;

use crate::prelude::*;

/// The shape of a locking script (`script_pubkey`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(crate = "actual_serde", rename_all = "kebab-case"))]
pub enum ScriptType {
    /// Pay to public key.
    P2pk,
    /// Pay to public key hash.
    P2pkh,
    /// Bare multisig.
    P2multi,
    /// Pay to script hash.
    P2sh,
    /// Pay to witness script hash.
    P2wsh,
    /// Pay to witness public key hash.
    P2wpkh,
    /// Pay to witness public key hash nested in pay to script hash.
    P2wpkhSh,
    /// Pay to taproot.
    P2tr,
    /// Provably unspendable `OP_RETURN` output.
    NullData,
    /// Any script we do not recognise.
    Unknown,
}

impl ScriptType {
    /// Returns the size of the locking script in bytes.
    ///
    /// Types without a fixed shape (bare multisig, data carriers, unknown scripts) return zero.
    pub fn size(self) -> usize {
        use ScriptType::*;

        match self {
            P2pk => 35,
            P2pkh => 25,
            P2sh => 23,
            P2wsh => 34,
            P2wpkh => 22,
            P2wpkhSh => 23,
            P2tr => 34,
            P2multi | NullData | Unknown => 0,
        }
    }

    /// Returns true if spending an output of this type puts data in the witness.
    ///
    /// Spending any one such output makes the whole transaction a segwit transaction.
    pub fn is_witness(self) -> bool {
        use ScriptType::*;

        match self {
            P2wpkh | P2wpkhSh | P2wsh | P2tr => true,
            P2pk | P2pkh | P2multi | P2sh | NullData | Unknown => false,
        }
    }

    /// Classifies a locking script by its shape.
    ///
    /// A nested P2WPKH output is indistinguishable from any other P2SH output and is reported as
    /// [`ScriptType::P2sh`].
    pub fn from_script(script: &Script) -> Self {
        if script.is_p2pkh() {
            ScriptType::P2pkh
        } else if script.is_p2pk() {
            ScriptType::P2pk
        } else if script.is_p2sh() {
            ScriptType::P2sh
        } else if script.is_p2wpkh() {
            ScriptType::P2wpkh
        } else if script.is_p2wsh() {
            ScriptType::P2wsh
        } else if script.is_p2tr() {
            ScriptType::P2tr
        } else if script.is_op_return() {
            ScriptType::NullData
        } else {
            ScriptType::Unknown
        }
    }

    fn as_str(self) -> &'static str {
        use ScriptType::*;

        match self {
            P2pk => "p2pk",
            P2pkh => "p2pkh",
            P2multi => "p2multi",
            P2sh => "p2sh",
            P2wsh => "p2wsh",
            P2wpkh => "p2wpkh",
            P2wpkhSh => "p2wpkh-sh",
            P2tr => "p2tr",
            NullData => "null-data",
            Unknown => "unknown",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for ScriptType {
    type Err = ParseScriptTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ScriptType::*;

        // Accept any case, i.e. "P2WPKH" as well as "p2wpkh".
        let ty = [P2pk, P2pkh, P2multi, P2sh, P2wsh, P2wpkh, P2wpkhSh, P2tr, NullData, Unknown]
            .iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s));

        match ty {
            Some(ty) => Ok(*ty),
            None => Err(ParseScriptTypeError { unrecognized: s.to_owned() }),
        }
    }
}

impl From<&Script> for ScriptType {
    fn from(script: &Script) -> Self { ScriptType::from_script(script) }
}

/// Error returned when parsing a [`ScriptType`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseScriptTypeError {
    /// The unrecognized string we attempted to parse.
    pub unrecognized: String,
}

impl fmt::Display for ParseScriptTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized script type '{}'", self.unrecognized)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseScriptTypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}
