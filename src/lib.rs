// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Transaction Size Estimation.
//!
//! Computes the on-wire size of a prospective transaction from the outputs it will spend and the
//! outputs it will create, before the transaction is built or signed. Sizes are accumulated in
//! weight units as defined in [BIP-141] and converted to virtual bytes, the unit fee rates are
//! quoted in.
//!
//! ```
//! use tx_size::{PreviousOutput, ScriptType, TransactionSizeCalculator};
//!
//! let calculator = TransactionSizeCalculator::default();
//! let spend = [PreviousOutput::new(ScriptType::P2pkh)];
//! let size = calculator
//!     .transaction_size(&spend, &[ScriptType::P2pkh, ScriptType::P2pkh], None)
//!     .expect("standard inputs always have a size");
//! assert_eq!(size, 256);
//! ```
//!
//! [BIP-141]: <https://github.com/bitcoin/bips/blob/master/bip-0141.mediawiki>

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions
#![warn(missing_docs)]

#[cfg(not(any(feature = "std", feature = "no-std")))]
compile_error!("at least one of the `std` or `no-std` features must be enabled");

#[macro_use]
extern crate alloc;

#[cfg(feature = "serde")]
#[macro_use]
extern crate actual_serde as serde;

/// Re-export of the `rust-bitcoin` crate.
pub extern crate bitcoin;

mod calculator;
mod consts;
mod cost_model;
mod error;
mod input;
mod output;
mod script_type;

#[rustfmt::skip]                // Keep pubic re-exports separate
pub use crate::{
    calculator::{to_bytes, TransactionSizeCalculator, TransactionSizeEstimator},
    cost_model::CostModel,
    error::InputSizeError,
    input::{PreviousOutput, SignatureScriptBuilder},
    output::TargetOutput,
    script_type::{ParseScriptTypeError, ScriptType},
};

#[rustfmt::skip]
mod prelude {
    #[cfg(all(not(feature = "std"), not(test)))]
    pub use alloc::{string::String, vec::Vec, boxed::Box, borrow::ToOwned};

    #[cfg(any(feature = "std", test))]
    pub use std::{string::String, vec::Vec, boxed::Box, borrow::ToOwned};
}
