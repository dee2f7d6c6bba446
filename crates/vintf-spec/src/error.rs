//! Error types for document parsing and compatibility checking.

use thiserror::Error;

use crate::version::Version;

/// A scalar value (version, enum keyword, flag) that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'")]
pub struct ValueError {
    /// What the value was expected to be (e.g. "version", "schema type").
    pub kind: &'static str,
    /// The raw text that failed to parse.
    pub value: String,
}

impl ValueError {
    /// Creates a new value error.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Error produced when text cannot be converted into a manifest or matrix.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not well-formed XML.
    #[error("XML syntax error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The root element names a different document kind.
    #[error("expected root element <{expected}>, found <{found}>")]
    WrongRoot {
        expected: &'static str,
        found: String,
    },

    /// A required attribute is missing.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// A required child element is missing.
    #[error("<{parent}> is missing required element <{element}>")]
    MissingElement {
        parent: String,
        element: &'static str,
    },

    /// An element or attribute holds a value of the wrong shape.
    #[error("invalid value at {location}: {source}")]
    InvalidValue {
        location: String,
        #[source]
        source: ValueError,
    },

    /// The document declares a meta-version this converter does not understand.
    #[error("unsupported meta-version {0}")]
    UnsupportedMetaVersion(Version),

    /// A HAL entry has an empty name.
    #[error("<hal> has an empty <name>")]
    EmptyHalName,

    /// A manifest HAL lists two versions with the same major version.
    #[error("duplicated major version {major} for HAL {hal}")]
    DuplicateMajorVersion { hal: String, major: usize },
}

/// Reason why a manifest does not satisfy a compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Incompatibility {
    /// Human-readable diagnostic.
    pub reason: String,
}

impl Incompatibility {
    /// Creates a new incompatibility with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
