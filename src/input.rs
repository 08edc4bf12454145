// SPDX-License-Identifier: CC0-1.0

use core::fmt;

use bitcoin::script::{Builder, PushBytes};
use bitcoin::ScriptBuf;

use crate::consts::INPUT_BASE_SIZE;
use crate::cost_model::CostModel;
use crate::error::InputSizeError;
use crate::prelude::*;
use crate::script_type::ScriptType;

/// Builds the `script_sig` of a non-standard P2SH spend.
///
/// Used to size inputs whose redemption does not follow the `<sig> <pubkey> <redeem_script>`
/// layout, e.g. multisig or application defined scripts. The estimator only measures the length of
/// the returned script.
pub trait SignatureScriptBuilder {
    /// Returns the `script_sig` built from `placeholders`.
    ///
    /// `placeholders` holds a zero filled signature followed by a zero filled public key, both
    /// sized as in the [`CostModel`] in use.
    fn build_signature_script(&self, placeholders: &[&[u8]]) -> ScriptBuf;
}

impl<F> SignatureScriptBuilder for F
where
    F: Fn(&[&[u8]]) -> ScriptBuf,
{
    fn build_signature_script(&self, placeholders: &[&[u8]]) -> ScriptBuf { self(placeholders) }
}

/// A previous output that a transaction is going to spend.
pub struct PreviousOutput {
    /// The type of the output's locking script.
    pub script_type: ScriptType,
    /// The redeem script, P2SH outputs only.
    pub redeem_script: Option<ScriptBuf>,
    /// Builder for a non-standard `script_sig`, P2SH outputs only.
    pub signature_script_builder: Option<Box<dyn SignatureScriptBuilder + Send + Sync>>,
}

impl PreviousOutput {
    /// Creates a previous output of the given type.
    pub fn new(script_type: ScriptType) -> Self {
        PreviousOutput { script_type, redeem_script: None, signature_script_builder: None }
    }

    /// Creates a P2SH output spent with `<sig> <pubkey> <redeem_script>`.
    pub fn p2sh(redeem_script: ScriptBuf) -> Self {
        PreviousOutput { redeem_script: Some(redeem_script), ..PreviousOutput::new(ScriptType::P2sh) }
    }

    /// Creates a P2SH output whose `script_sig` is produced by `builder`.
    pub fn p2sh_with_builder<B>(redeem_script: Option<ScriptBuf>, builder: B) -> Self
    where
        B: SignatureScriptBuilder + Send + Sync + 'static,
    {
        PreviousOutput {
            script_type: ScriptType::P2sh,
            redeem_script,
            signature_script_builder: Some(Box::new(builder)),
        }
    }

    /// Returns the non-witness size of the input spending this output, in bytes.
    pub fn input_size(&self, model: &CostModel) -> Result<usize, InputSizeError> {
        Ok(INPUT_BASE_SIZE + self.signature_script_size(model)?)
    }

    /// Returns the size of the `script_sig` needed to spend this output.
    ///
    /// Outputs we do not know how to sign contribute nothing.
    fn signature_script_size(&self, model: &CostModel) -> Result<usize, InputSizeError> {
        if self.script_type != ScriptType::P2sh {
            return Ok(standard_signature_script_size(self.script_type, model));
        }

        if let Some(ref builder) = self.signature_script_builder {
            let signature = vec![0u8; model.ecdsa_signature];
            let public_key = vec![0u8; model.public_key];
            let script = builder.build_signature_script(&[&signature, &public_key]);
            return Ok(script.len());
        }

        match self.redeem_script {
            Some(ref redeem_script) => {
                let push = <&PushBytes>::try_from(redeem_script.as_bytes())?;
                let pushed = Builder::new().push_slice(push).into_script().len();
                Ok(model.ecdsa_signature + model.public_key + pushed)
            }
            None => Err(InputSizeError::MissingRedeemInfo),
        }
    }
}

impl From<ScriptType> for PreviousOutput {
    fn from(script_type: ScriptType) -> Self { PreviousOutput::new(script_type) }
}

impl fmt::Debug for PreviousOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviousOutput")
            .field("script_type", &self.script_type)
            .field("redeem_script", &self.redeem_script)
            .field("signature_script_builder", &self.signature_script_builder.is_some())
            .finish()
    }
}

/// Returns the `script_sig` size for script types spent without extra information.
pub(crate) fn standard_signature_script_size(script_type: ScriptType, model: &CostModel) -> usize {
    use ScriptType::*;

    match script_type {
        P2pkh => model.ecdsa_signature + model.public_key,
        P2pk => model.ecdsa_signature,
        P2wpkhSh => model.p2wpkh_sh_redeem,
        // P2SH needs the redeem script, witness programs have an empty `script_sig`.
        P2sh | P2wpkh | P2wsh | P2tr | P2multi | NullData | Unknown => 0,
    }
}

/// Returns the witness size of the input spending an output of `script_type`, in bytes.
///
/// Inputs that carry no witness still cost the single item count byte when they are part of a
/// segwit transaction.
pub(crate) fn witness_size(script_type: ScriptType, model: &CostModel) -> usize {
    use ScriptType::*;

    match script_type {
        P2wpkh | P2wpkhSh => model.p2wpkh_witness,
        P2tr => model.p2tr_witness,
        P2pk | P2pkh | P2multi | P2sh | P2wsh | NullData | Unknown => model.legacy_witness_stack,
    }
}
