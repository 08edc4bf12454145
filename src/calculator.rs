// SPDX-License-Identifier: CC0-1.0

//! Transaction size estimation.
//!
//! Non-witness bytes weigh four weight units each and witness bytes weigh one, as defined in
//! [BIP-141]. The transaction is a segwit transaction as soon as one of the spent outputs needs a
//! witness, in which case every input, witness or not, carries a witness stack.
//!
//! [BIP-141]: <https://github.com/bitcoin/bips/blob/master/bip-0141.mediawiki>

use bitcoin::Weight;

use crate::consts::INPUT_BASE_SIZE;
use crate::cost_model::CostModel;
use crate::error::InputSizeError;
use crate::input::{self, PreviousOutput};
use crate::output::{self, TargetOutput};
use crate::script_type::ScriptType;

/// Converts `weight` to virtual bytes, rounding any partial virtual byte up.
pub fn to_bytes(weight: Weight) -> usize { weight.to_vbytes_ceil() as usize }

/// Estimates transaction sizes using a [`CostModel`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct TransactionSizeCalculator {
    model: CostModel,
}

impl TransactionSizeCalculator {
    /// Creates a calculator using the costs in `model`.
    pub const fn new(model: CostModel) -> Self { TransactionSizeCalculator { model } }

    /// Returns the cost model this calculator uses.
    pub fn cost_model(&self) -> &CostModel { &self.model }

    /// Returns the size in virtual bytes of a transaction spending `previous_outputs` and creating
    /// an output of each of `outputs`, plus an output carrying `memo` if it is not empty.
    pub fn transaction_size(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
    ) -> Result<usize, InputSizeError> {
        self.transaction_size_with_plugin_data(previous_outputs, outputs, memo, 0)
    }

    /// Returns the size in virtual bytes of a transaction, see [`Self::transaction_size`].
    ///
    /// A non-zero `plugin_data_output_size` adds one more output with a locking script of that
    /// many bytes.
    pub fn transaction_size_with_plugin_data(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
        plugin_data_output_size: usize,
    ) -> Result<usize, InputSizeError> {
        let weight =
            self.transaction_weight(previous_outputs, outputs, memo, plugin_data_output_size)?;
        Ok(to_bytes(weight))
    }

    /// Returns the weight of a transaction, see [`Self::transaction_size_with_plugin_data`].
    ///
    /// # Errors
    ///
    /// If one of `previous_outputs` is a P2SH output we can not size, see [`InputSizeError`].
    pub fn transaction_weight(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
        plugin_data_output_size: usize,
    ) -> Result<Weight, InputSizeError> {
        let segwit = previous_outputs.iter().any(|prev| prev.script_type.is_witness());

        let mut weight = non_witness(self.model.tx_overhead(segwit));

        for prev in previous_outputs {
            weight += non_witness(self.input_size(prev)?);
            if segwit {
                weight += Weight::from_witness_data_size(self.witness_size(prev.script_type) as u64);
            }
        }

        let outputs = outputs
            .iter()
            .copied()
            .map(TargetOutput::from)
            .chain(output::memo_output(memo))
            .chain(output::plugin_data_output(plugin_data_output_size));
        for out in outputs {
            weight += non_witness(out.size());
        }

        Ok(weight)
    }

    /// Returns the non-witness size in bytes of the input spending `previous_output`.
    pub fn input_size(&self, previous_output: &PreviousOutput) -> Result<usize, InputSizeError> {
        previous_output.input_size(&self.model)
    }

    /// Returns the non-witness size in bytes of an input spending an output of `script_type`.
    ///
    /// For use before the actual outputs are selected. Only standard spends are priced, P2SH and
    /// unknown types get an empty `script_sig`.
    pub fn nominal_input_size(&self, script_type: ScriptType) -> usize {
        INPUT_BASE_SIZE + input::standard_signature_script_size(script_type, &self.model)
    }

    /// Returns the witness size in bytes of an input spending an output of `script_type`.
    ///
    /// Only counted when the transaction is a segwit transaction.
    pub fn witness_size(&self, script_type: ScriptType) -> usize {
        input::witness_size(script_type, &self.model)
    }

    /// Returns the size in bytes of `output`.
    pub fn output_size<T: Into<TargetOutput>>(&self, output: T) -> usize { output.into().size() }
}

fn non_witness(size: usize) -> Weight { Weight::from_non_witness_data_size(size as u64) }

/// Size estimation as used by coin selection and fee negotiation.
pub trait TransactionSizeEstimator {
    /// Returns the size in virtual bytes of a transaction spending `previous_outputs`.
    fn transaction_size_with_plugin_data(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
        plugin_data_output_size: usize,
    ) -> Result<usize, InputSizeError>;

    /// Returns the size in virtual bytes of a transaction without plugin data.
    fn transaction_size(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
    ) -> Result<usize, InputSizeError> {
        self.transaction_size_with_plugin_data(previous_outputs, outputs, memo, 0)
    }

    /// Returns the non-witness size in bytes of the input spending `previous_output`.
    fn input_size(&self, previous_output: &PreviousOutput) -> Result<usize, InputSizeError>;

    /// Returns the non-witness size in bytes of an input spending an output of `script_type`.
    fn nominal_input_size(&self, script_type: ScriptType) -> usize;

    /// Returns the witness size in bytes of an input spending an output of `script_type`.
    fn witness_size(&self, script_type: ScriptType) -> usize;

    /// Returns the size in bytes of `output`.
    fn output_size(&self, output: TargetOutput) -> usize;
}

impl TransactionSizeEstimator for TransactionSizeCalculator {
    fn transaction_size_with_plugin_data(
        &self,
        previous_outputs: &[PreviousOutput],
        outputs: &[ScriptType],
        memo: Option<&str>,
        plugin_data_output_size: usize,
    ) -> Result<usize, InputSizeError> {
        TransactionSizeCalculator::transaction_size_with_plugin_data(
            self,
            previous_outputs,
            outputs,
            memo,
            plugin_data_output_size,
        )
    }

    fn input_size(&self, previous_output: &PreviousOutput) -> Result<usize, InputSizeError> {
        TransactionSizeCalculator::input_size(self, previous_output)
    }

    fn nominal_input_size(&self, script_type: ScriptType) -> usize {
        TransactionSizeCalculator::nominal_input_size(self, script_type)
    }

    fn witness_size(&self, script_type: ScriptType) -> usize {
        TransactionSizeCalculator::witness_size(self, script_type)
    }

    fn output_size(&self, output: TargetOutput) -> usize {
        TransactionSizeCalculator::output_size(self, output)
    }
}
