//! Input classification.
//!
//! The input carries no explicit kind tag. It is parsed as a manifest first
//! and as a compatibility matrix second; the first parse that succeeds
//! decides the kind, so text valid as both is always a manifest.

use std::fmt;
use std::io::Read;

use vintf_spec::{CompatibilityMatrix, HalManifest};

use crate::backend::DocumentBackend;
use crate::error::AssembleError;

/// The two document kinds the assembler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Manifest,
    Matrix,
}

impl DocumentKind {
    /// Returns the name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Manifest => "HAL manifest",
            DocumentKind::Matrix => "compatibility matrix",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Manifest(HalManifest),
    Matrix(CompatibilityMatrix),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Manifest(_) => DocumentKind::Manifest,
            Document::Matrix(_) => DocumentKind::Matrix,
        }
    }
}

/// Classifies `text` by trying each kind in priority order.
///
/// # Errors
/// [`AssembleError::UnrecognizedDocumentFormat`] carrying both parse errors
/// when neither kind matches.
pub fn classify(backend: &dyn DocumentBackend, text: &str) -> Result<Document, AssembleError> {
    let manifest_error = match backend.parse_manifest(text) {
        Ok(manifest) => return Ok(Document::Manifest(manifest)),
        Err(e) => e,
    };
    match backend.parse_matrix(text) {
        Ok(matrix) => Ok(Document::Matrix(matrix)),
        Err(matrix_error) => Err(AssembleError::UnrecognizedDocumentFormat {
            manifest_error,
            matrix_error,
        }),
    }
}

/// Reads a whole document from `reader`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// binary or mis-encoded file is reported by the parsers, not as an I/O error.
pub fn read_document(reader: &mut dyn Read) -> Result<String, AssembleError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
