//! Document capabilities the assembler depends on.
//!
//! The assembler only orchestrates; parsing, serialization, compatibility
//! checking and matrix synthesis come from a [`DocumentBackend`].
//! [`XmlBackend`] is the production implementation backed by `vintf-spec`.

use vintf_spec::xml;
use vintf_spec::{CompatibilityMatrix, HalManifest, Incompatibility, ParseError};

/// Parse, serialize, check and synthesize VINTF documents.
pub trait DocumentBackend {
    fn parse_manifest(&self, text: &str) -> Result<HalManifest, ParseError>;

    fn parse_matrix(&self, text: &str) -> Result<CompatibilityMatrix, ParseError>;

    fn serialize_manifest(&self, manifest: &HalManifest) -> String;

    fn serialize_matrix(&self, matrix: &CompatibilityMatrix) -> String;

    /// Derives a matrix that `manifest` satisfies.
    fn generate_compatible_matrix(&self, manifest: &HalManifest) -> CompatibilityMatrix;

    /// Checks that `manifest` satisfies `matrix`.
    fn check_compatibility(
        &self,
        manifest: &HalManifest,
        matrix: &CompatibilityMatrix,
    ) -> Result<(), Incompatibility>;
}

/// XML documents as understood by `vintf-spec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlBackend;

impl DocumentBackend for XmlBackend {
    fn parse_manifest(&self, text: &str) -> Result<HalManifest, ParseError> {
        xml::parse_manifest(text)
    }

    fn parse_matrix(&self, text: &str) -> Result<CompatibilityMatrix, ParseError> {
        xml::parse_matrix(text)
    }

    fn serialize_manifest(&self, manifest: &HalManifest) -> String {
        xml::write_manifest(manifest)
    }

    fn serialize_matrix(&self, matrix: &CompatibilityMatrix) -> String {
        xml::write_matrix(matrix)
    }

    fn generate_compatible_matrix(&self, manifest: &HalManifest) -> CompatibilityMatrix {
        manifest.generate_compatible_matrix()
    }

    fn check_compatibility(
        &self,
        manifest: &HalManifest,
        matrix: &CompatibilityMatrix,
    ) -> Result<(), Incompatibility> {
        manifest.check_compatibility(matrix)
    }
}
