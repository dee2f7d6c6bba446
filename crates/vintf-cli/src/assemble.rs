//! Assembly orchestration.
//!
//! One run moves through
//! `classify -> inject -> emit -> flush -> (optional) check`.
//! The output is always written and flushed before the check file is looked
//! at, so a failed check still leaves the artifact behind.

use std::io::{Read, Write};

use colored::Colorize;
use vintf_spec::{CompatibilityMatrix, HalManifest, Incompatibility};

use crate::backend::DocumentBackend;
use crate::error::AssembleError;
use crate::flags::FlagSource;
use crate::inject::{inject_manifest_flags, inject_matrix_flags};
use crate::input::{classify, read_document, Document, DocumentKind};

/// Advisory comment written ahead of a synthesized matrix.
pub const SKELETON_MATRIX_HEADER: &str = "<!-- \n    \
    Autogenerated skeleton compatibility matrix. \n    \
    Use with caution. Modify it to suit your needs.\n    \
    All HALs are set to optional.\n    \
    Many entries other than HALs are zero-filled and\n    \
    require human attention. \n\
    -->\n";

/// What was written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    /// The injected input manifest.
    Manifest,
    /// The injected input matrix.
    Matrix,
    /// A matrix synthesized from the input manifest (`-m`).
    SkeletonMatrix,
}

/// Outcome of the optional check against the `-c` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Skipped,
    Passed,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleReport {
    pub input_kind: DocumentKind,
    pub emitted: Emitted,
    pub check: CheckStatus,
    /// Set when a synthesized matrix failed its self-check. Advisory only.
    pub skeleton_error: Option<Incompatibility>,
}

/// Assembles one input document into one output stream.
pub struct Assembler<'a, W: Write> {
    backend: &'a dyn DocumentBackend,
    flags: &'a dyn FlagSource,
    input: Option<Box<dyn Read + 'a>>,
    check_file: Option<Box<dyn Read + 'a>>,
    output: W,
    output_matrix: bool,
}

impl<'a, W: Write> Assembler<'a, W> {
    /// Creates an assembler with no input, no check file and manifest output.
    pub fn new(backend: &'a dyn DocumentBackend, flags: &'a dyn FlagSource, output: W) -> Self {
        Self {
            backend,
            flags,
            input: None,
            check_file: None,
            output,
            output_matrix: false,
        }
    }

    /// Sets the input document.
    pub fn input(mut self, reader: impl Read + 'a) -> Self {
        self.input = Some(Box::new(reader));
        self
    }

    /// Sets the reference document to check the output against.
    pub fn check_file(mut self, reader: impl Read + 'a) -> Self {
        self.check_file = Some(Box::new(reader));
        self
    }

    /// For manifest input, emit a synthesized matrix instead of the manifest.
    pub fn output_matrix(mut self, enabled: bool) -> Self {
        self.output_matrix = enabled;
        self
    }

    /// Consumes the assembler and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the assembly.
    ///
    /// # Errors
    /// Any [`AssembleError`]. Errors raised before emission leave the output
    /// untouched; check-file errors are raised after the output is flushed.
    pub fn assemble(&mut self) -> Result<AssembleReport, AssembleError> {
        let mut input = self.input.take().ok_or(AssembleError::MissingInputFile)?;
        let text = read_document(&mut input)?;

        match classify(self.backend, &text)? {
            Document::Manifest(manifest) => self.assemble_manifest(manifest),
            Document::Matrix(matrix) => self.assemble_matrix(matrix),
        }
    }

    fn assemble_manifest(
        &mut self,
        mut manifest: HalManifest,
    ) -> Result<AssembleReport, AssembleError> {
        inject_manifest_flags(&mut manifest, self.flags)?;

        let mut skeleton_error = None;
        let emitted = if self.output_matrix {
            let generated = self.backend.generate_compatible_matrix(&manifest);
            if let Err(err) = self.backend.check_compatibility(&manifest, &generated) {
                eprintln!(
                    "{} cannot generate a compatible matrix: {}",
                    "FATAL ERROR:".red().bold(),
                    err
                );
                skeleton_error = Some(err);
            }
            self.output.write_all(SKELETON_MATRIX_HEADER.as_bytes())?;
            self.output
                .write_all(self.backend.serialize_matrix(&generated).as_bytes())?;
            Emitted::SkeletonMatrix
        } else {
            self.output
                .write_all(self.backend.serialize_manifest(&manifest).as_bytes())?;
            Emitted::Manifest
        };
        self.output.flush()?;

        let check = match self.check_file.take() {
            Some(mut reader) => {
                let text = read_document(&mut reader)?;
                let matrix = self.backend.parse_matrix(&text).map_err(|error| {
                    AssembleError::ReferenceParse {
                        expected: DocumentKind::Matrix,
                        error,
                    }
                })?;
                self.backend.check_compatibility(&manifest, &matrix)?;
                CheckStatus::Passed
            }
            None => CheckStatus::Skipped,
        };

        Ok(AssembleReport {
            input_kind: DocumentKind::Manifest,
            emitted,
            check,
            skeleton_error,
        })
    }

    fn assemble_matrix(
        &mut self,
        mut matrix: CompatibilityMatrix,
    ) -> Result<AssembleReport, AssembleError> {
        inject_matrix_flags(&mut matrix, self.flags)?;

        self.output
            .write_all(self.backend.serialize_matrix(&matrix).as_bytes())?;
        self.output.flush()?;

        let check = match self.check_file.take() {
            Some(mut reader) => {
                let text = read_document(&mut reader)?;
                let manifest = self.backend.parse_manifest(&text).map_err(|error| {
                    AssembleError::ReferenceParse {
                        expected: DocumentKind::Manifest,
                        error,
                    }
                })?;
                self.backend.check_compatibility(&manifest, &matrix)?;
                CheckStatus::Passed
            }
            None => CheckStatus::Skipped,
        };

        Ok(AssembleReport {
            input_kind: DocumentKind::Matrix,
            emitted: Emitted::Matrix,
            check,
            skeleton_error: None,
        })
    }
}
