//! Skeleton matrix synthesis from a manifest.

use crate::hal::MatrixHal;
use crate::manifest::HalManifest;
use crate::matrix::{CompatibilityMatrix, Sepolicy};
use crate::schema::SchemaType;
use crate::version::{KernelSepolicyVersion, VersionRange};

impl HalManifest {
    /// Derives a matrix that this manifest satisfies.
    ///
    /// Every HAL becomes an optional requirement pinned to the exact versions
    /// the manifest lists. A device manifest yields a framework matrix whose
    /// sepolicy block carries the manifest's sepolicy version and a
    /// zero kernel sepolicy version; a framework manifest yields a device
    /// matrix.
    pub fn generate_compatible_matrix(&self) -> CompatibilityMatrix {
        let mut matrix = CompatibilityMatrix::new(self.schema_type.counterpart());

        for hal in &self.hals {
            matrix.hals.push(MatrixHal {
                format: hal.format,
                name: hal.name.clone(),
                version_ranges: hal.versions.iter().copied().map(VersionRange::from).collect(),
                optional: true,
                interfaces: hal.interfaces.clone(),
            });
        }

        if self.schema_type == SchemaType::Device {
            matrix.sepolicy = self.sepolicy_version.map(|version| {
                Sepolicy::new(KernelSepolicyVersion(0), vec![VersionRange::from(version)])
            });
        }

        matrix
    }
}
