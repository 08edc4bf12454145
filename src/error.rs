// SPDX-License-Identifier: CC0-1.0

use core::fmt;

use bitcoin::script::PushBytesError;

/// An error sizing the input that spends a previous output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputSizeError {
    /// P2SH output has neither a redeem script nor a signature script builder.
    MissingRedeemInfo,
    /// Redeem script is too large to be pushed in a `script_sig`.
    RedeemScriptTooLarge(PushBytesError),
}

impl fmt::Display for InputSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InputSizeError::*;

        match *self {
            MissingRedeemInfo => f.write_str(
                "P2SH output has neither a redeem script nor a signature script builder",
            ),
            RedeemScriptTooLarge(ref e) => write_err!(f, "redeem script too large to push"; e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputSizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use InputSizeError::*;

        match *self {
            RedeemScriptTooLarge(ref e) => Some(e),
            MissingRedeemInfo => None,
        }
    }
}

impl From<PushBytesError> for InputSizeError {
    fn from(e: PushBytesError) -> Self { Self::RedeemScriptTooLarge(e) }
}

/// Formats error.
///
/// If `std` feature is OFF appends error source (delimited by `: `). We do this because
/// `e.source()` is only available in std builds, without this macro the error source is lost for
/// no-std builds.
macro_rules! write_err {
    ($writer:expr, $string:literal $(, $args:expr)*; $source:expr) => {
        {
            #[cfg(feature = "std")]
            {
                let _ = &$source;   // Prevents clippy warnings.
                write!($writer, $string $(, $args)*)
            }
            #[cfg(not(feature = "std"))]
            {
                write!($writer, concat!($string, ": {}") $(, $args)*, $source)
            }
        }
    }
}
pub(crate) use write_err;
