//! Reference documents shipped with the test crate.

use std::fs;
use std::path::PathBuf;

/// Checked-in XML fixtures under `crates/vintf-tests/fixtures`.
pub struct Fixtures;

impl Fixtures {
    /// Get the fixtures directory.
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Get the path of a fixture by file name.
    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(name)
    }

    /// Read a fixture into a string.
    pub fn read(name: &str) -> String {
        let path = Self::path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
    }

    /// Device manifest with HIDL and native HALs and no sepolicy block.
    pub fn device_manifest() -> PathBuf {
        Self::path("device_manifest.xml")
    }

    /// Framework matrix that the device manifest satisfies.
    pub fn framework_matrix() -> PathBuf {
        Self::path("framework_matrix.xml")
    }

    /// Framework manifest.
    pub fn framework_manifest() -> PathBuf {
        Self::path("framework_manifest.xml")
    }

    /// Device matrix that the framework manifest satisfies.
    pub fn device_matrix() -> PathBuf {
        Self::path("device_matrix.xml")
    }

    /// Well-formed XML that is neither a manifest nor a matrix.
    pub fn kernel_config() -> PathBuf {
        Self::path("kernel_config.xml")
    }
}
