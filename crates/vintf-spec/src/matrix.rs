//! Compatibility matrix: what a counterpart manifest must provide.

use crate::hal::MatrixHal;
use crate::schema::SchemaType;
use crate::version::{KernelSepolicyVersion, VersionRange};

/// Sepolicy requirement of a framework compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sepolicy {
    pub kernel_sepolicy_version: KernelSepolicyVersion,
    pub sepolicy_versions: Vec<VersionRange>,
}

impl Sepolicy {
    pub fn new(
        kernel_sepolicy_version: KernelSepolicyVersion,
        sepolicy_versions: Vec<VersionRange>,
    ) -> Self {
        Self {
            kernel_sepolicy_version,
            sepolicy_versions,
        }
    }
}

/// A compatibility matrix.
///
/// `sepolicy` only has meaning for framework matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    pub schema_type: SchemaType,
    pub hals: Vec<MatrixHal>,
    pub sepolicy: Option<Sepolicy>,
}

impl CompatibilityMatrix {
    /// Creates an empty matrix of the given type.
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            hals: Vec::new(),
            sepolicy: None,
        }
    }

    /// Adds a HAL requirement, builder style.
    pub fn hal(mut self, hal: MatrixHal) -> Self {
        self.hals.push(hal);
        self
    }

    /// Sets the sepolicy requirement, builder style.
    pub fn sepolicy(mut self, sepolicy: Sepolicy) -> Self {
        self.sepolicy = Some(sepolicy);
        self
    }

    /// True if this is a framework-side matrix.
    pub fn is_framework(&self) -> bool {
        self.schema_type == SchemaType::Framework
    }

    /// HAL requirements a manifest cannot omit.
    pub fn required_hals(&self) -> impl Iterator<Item = &MatrixHal> {
        self.hals.iter().filter(|hal| !hal.optional)
    }
}
