//! XML converters for manifests and compatibility matrices.
//!
//! Parsing is strict about the root element, so a manifest never parses as
//! a matrix and vice versa. Unknown child elements are skipped.

mod read;
mod write;

pub use read::{parse_manifest, parse_matrix};
pub use write::{write_manifest, write_matrix};

use crate::version::Version;

/// Root element of a HAL manifest.
pub const MANIFEST_ROOT: &str = "manifest";

/// Root element of a compatibility matrix.
pub const MATRIX_ROOT: &str = "compatibility-matrix";

/// Meta-version written into the `version` attribute of every document.
pub const META_VERSION: Version = Version::new(1, 0);
