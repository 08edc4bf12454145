// SPDX-License-Identifier: CC0-1.0

use crate::consts::OUTPUT_BASE_SIZE;
use crate::script_type::ScriptType;

/// An output the transaction is going to create.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TargetOutput {
    /// Output locked with a script of the given type.
    ScriptType(ScriptType),
    /// Output locked with an arbitrary script of the given length, e.g. a memo or plugin data.
    LockingScript(usize),
}

impl TargetOutput {
    /// Returns the length of the locking script.
    pub fn locking_script_size(self) -> usize {
        match self {
            TargetOutput::ScriptType(ty) => ty.size(),
            TargetOutput::LockingScript(len) => len,
        }
    }

    /// Returns the serialized size of the output in bytes: value, script length and script.
    pub fn size(self) -> usize { OUTPUT_BASE_SIZE + self.locking_script_size() }
}

impl From<ScriptType> for TargetOutput {
    fn from(ty: ScriptType) -> Self { TargetOutput::ScriptType(ty) }
}

/// Returns the extra output carrying `memo`, if there is one.
pub(crate) fn memo_output(memo: Option<&str>) -> Option<TargetOutput> {
    memo.map(str::len).filter(|len| *len > 0).map(TargetOutput::LockingScript)
}

/// Returns the extra output carrying plugin data, if there is one.
pub(crate) fn plugin_data_output(size: usize) -> Option<TargetOutput> {
    if size > 0 {
        Some(TargetOutput::LockingScript(size))
    } else {
        None
    }
}
