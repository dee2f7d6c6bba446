//! HAL manifest: what a device or framework build actually provides.

use crate::compat;
use crate::error::Incompatibility;
use crate::hal::ManifestHal;
use crate::matrix::CompatibilityMatrix;
use crate::schema::SchemaType;
use crate::version::Version;

/// A HAL manifest.
///
/// The sepolicy version only has meaning for device manifests; it is unset
/// until parsed from a `<sepolicy>` block or filled in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalManifest {
    pub schema_type: SchemaType,
    pub hals: Vec<ManifestHal>,
    pub sepolicy_version: Option<Version>,
}

impl HalManifest {
    /// Creates an empty manifest of the given type.
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            hals: Vec::new(),
            sepolicy_version: None,
        }
    }

    /// Adds a HAL, builder style.
    pub fn hal(mut self, hal: ManifestHal) -> Self {
        self.hals.push(hal);
        self
    }

    /// Sets the sepolicy version, builder style.
    pub fn sepolicy_version(mut self, version: Version) -> Self {
        self.sepolicy_version = Some(version);
        self
    }

    /// All HAL entries with the given package name.
    pub fn hals_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ManifestHal> + 'a {
        self.hals.iter().filter(move |hal| hal.name == name)
    }

    /// True if this is a device-side manifest.
    pub fn is_device(&self) -> bool {
        self.schema_type == SchemaType::Device
    }

    /// Checks this manifest against a counterpart matrix.
    pub fn check_compatibility(
        &self,
        matrix: &CompatibilityMatrix,
    ) -> Result<(), Incompatibility> {
        compat::check_compatibility(self, matrix)
    }
}
