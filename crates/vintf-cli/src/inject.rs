//! Build-time field injection.
//!
//! | document          | flags                                 |
//! |-------------------|---------------------------------------|
//! | device manifest   | `BOARD_SEPOLICY_VERS`                 |
//! | framework matrix  | `BOARD_SEPOLICY_VERS`, `POLICYVERS`   |
//! | anything else     | none                                  |

use vintf_spec::{
    CompatibilityMatrix, HalManifest, KernelSepolicyVersion, Sepolicy, Version, VersionRange,
};

use crate::error::AssembleError;
use crate::flags::{required_flag, FlagSource, BOARD_SEPOLICY_VERS, POLICYVERS};

/// Fills the sepolicy version of a device manifest.
pub fn inject_manifest_flags(
    manifest: &mut HalManifest,
    flags: &dyn FlagSource,
) -> Result<(), AssembleError> {
    if manifest.is_device() {
        manifest.sepolicy_version = Some(required_flag(flags, BOARD_SEPOLICY_VERS)?);
    }
    Ok(())
}

/// Fills the sepolicy requirement of a framework matrix.
///
/// Any sepolicy block already present in the input is replaced.
pub fn inject_matrix_flags(
    matrix: &mut CompatibilityMatrix,
    flags: &dyn FlagSource,
) -> Result<(), AssembleError> {
    if matrix.is_framework() {
        let sepolicy_version: Version = required_flag(flags, BOARD_SEPOLICY_VERS)?;
        let kernel_version: KernelSepolicyVersion = required_flag(flags, POLICYVERS)?;
        matrix.sepolicy = Some(Sepolicy::new(
            kernel_version,
            vec![VersionRange::from(sepolicy_version)],
        ));
    }
    Ok(())
}
