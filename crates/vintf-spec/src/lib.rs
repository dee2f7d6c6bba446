//! Vendor Interface Object (VINTF) documents.
//!
//! This crate provides the two document kinds that describe the interface
//! between the framework and device partitions, along with their XML
//! converters, the compatibility check between them, and skeleton matrix
//! synthesis.
//!
//! - A [`HalManifest`] lists the HALs a build provides.
//! - A [`CompatibilityMatrix`] lists the HALs a counterpart build requires.
//!
//! # Example
//!
//! ```
//! use vintf_spec::xml::{parse_manifest, write_matrix};
//! use vintf_spec::Version;
//!
//! let mut manifest = parse_manifest(r#"<manifest version="1.0" type="device"/>"#).unwrap();
//! manifest.sepolicy_version = Some(Version::new(26, 0));
//!
//! let matrix = manifest.generate_compatible_matrix();
//! assert!(manifest.check_compatibility(&matrix).is_ok());
//! assert!(write_matrix(&matrix).contains("<sepolicy-version>26.0</sepolicy-version>"));
//! ```

pub mod compat;
pub mod error;
pub mod generate;
pub mod hal;
pub mod manifest;
pub mod matrix;
pub mod schema;
pub mod version;
pub mod xml;

// Re-export commonly used types at the crate root
pub use compat::check_compatibility;
pub use error::{Incompatibility, ParseError, ValueError};
pub use hal::{HalInterface, ManifestHal, MatrixHal};
pub use manifest::HalManifest;
pub use matrix::{CompatibilityMatrix, Sepolicy};
pub use schema::{Arch, HalFormat, SchemaType, Transport, TransportArch};
pub use version::{KernelSepolicyVersion, Version, VersionRange};
