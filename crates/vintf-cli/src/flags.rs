//! Build-time flags sourced from the environment.
//!
//! Lookups go through [`FlagSource`] so that callers can substitute a fixed
//! map for the process environment.

use std::collections::HashMap;
use std::str::FromStr;

use vintf_spec::ValueError;

use crate::error::AssembleError;

/// Userspace sepolicy version of the board, e.g. `26.0`.
pub const BOARD_SEPOLICY_VERS: &str = "BOARD_SEPOLICY_VERS";

/// Kernel policydb version, e.g. `30`.
pub const POLICYVERS: &str = "POLICYVERS";

/// A read-only key/value lookup for build flags.
pub trait FlagSource {
    /// Returns the raw value of `name`, or `None` if it is not set.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads flags from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl FlagSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are kept lossily so they fail to parse rather
        // than read as unset.
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl FlagSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<F: FlagSource + ?Sized> FlagSource for &F {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Looks up `name` and parses it as `T`.
///
/// # Errors
/// * [`AssembleError::MissingBuildFlag`] if the flag is unset
/// * [`AssembleError::UnparseableBuildFlag`] if the value does not parse
pub fn required_flag<T>(flags: &dyn FlagSource, name: &str) -> Result<T, AssembleError>
where
    T: FromStr<Err = ValueError>,
{
    let value = flags
        .lookup(name)
        .ok_or_else(|| AssembleError::MissingBuildFlag {
            name: name.to_string(),
        })?;
    value
        .parse()
        .map_err(|source| AssembleError::UnparseableBuildFlag {
            name: name.to_string(),
            value,
            source,
        })
}
