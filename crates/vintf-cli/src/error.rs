//! Errors that end an assembly run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vintf_spec::{Incompatibility, ParseError, ValueError};

use crate::input::DocumentKind;

/// A fatal condition. Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// No `-i` was given.
    #[error("Missing input file.")]
    MissingInputFile,

    /// An input, output or check file could not be opened.
    #[error("Failed to open {}", .path.display())]
    UnopenableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input or writing the output failed after opening.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input parsed as neither a manifest nor a matrix.
    #[error(
        "Input file has unknown format.\n\
         Error when attempting to convert to manifest: {manifest_error}\n\
         Error when attempting to convert to compatibility matrix: {matrix_error}"
    )]
    UnrecognizedDocumentFormat {
        manifest_error: ParseError,
        matrix_error: ParseError,
    },

    /// A build flag required for this document kind is not set.
    #[error("Required {name} flag.")]
    MissingBuildFlag { name: String },

    /// A build flag is set but its value has the wrong shape.
    #[error("Cannot parse {value}.")]
    UnparseableBuildFlag {
        name: String,
        value: String,
        #[source]
        source: ValueError,
    },

    /// The `-c` check file is not of the kind the output is checked against.
    #[error("Cannot parse check file as a {expected}: {error}")]
    ReferenceParse {
        expected: DocumentKind,
        error: ParseError,
    },

    /// The emitted document and the check file are not compatible.
    #[error("Not compatible: {0}")]
    IncompatibleDocuments(#[from] Incompatibility),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_names_variable() {
        let err = AssembleError::MissingBuildFlag {
            name: "BOARD_SEPOLICY_VERS".to_string(),
        };
        assert_eq!(err.to_string(), "Required BOARD_SEPOLICY_VERS flag.");
    }

    #[test]
    fn test_unparseable_flag_shows_raw_value() {
        let err = AssembleError::UnparseableBuildFlag {
            name: "POLICYVERS".to_string(),
            value: "thirty".to_string(),
            source: ValueError::new("kernel sepolicy version", "thirty"),
        };
        assert_eq!(err.to_string(), "Cannot parse thirty.");
    }

    #[test]
    fn test_unopenable_file_names_path() {
        let err = AssembleError::UnopenableFile {
            path: PathBuf::from("/no/such/manifest.xml"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Failed to open /no/such/manifest.xml");
    }

    #[test]
    fn test_incompatible_prefix() {
        let err = AssembleError::from(Incompatibility::new("HALs incompatible."));
        assert_eq!(err.to_string(), "Not compatible: HALs incompatible.");
    }
}
