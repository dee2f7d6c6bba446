//! HAL entries as they appear in manifests and compatibility matrices.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ParseError;
use crate::schema::{HalFormat, TransportArch};
use crate::version::{Version, VersionRange};

/// A named interface and the instances of it that are served or required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HalInterface {
    pub name: String,
    pub instances: BTreeSet<String>,
}

impl HalInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: BTreeSet::new(),
        }
    }

    /// Adds an instance name, builder style.
    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instances.insert(instance.into());
        self
    }
}

/// Interfaces keyed by interface name.
pub type InterfaceMap = BTreeMap<String, HalInterface>;

/// Inserts `interface`, merging instances when the name is already present.
pub(crate) fn merge_interface(map: &mut InterfaceMap, interface: HalInterface) {
    map.entry(interface.name.clone())
        .or_insert_with(|| HalInterface::new(interface.name.clone()))
        .instances
        .extend(interface.instances);
}

/// A HAL provided by a device or framework build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestHal {
    pub format: HalFormat,
    pub name: String,
    pub versions: Vec<Version>,
    pub transport: Option<TransportArch>,
    pub interfaces: InterfaceMap,
}

impl ManifestHal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            format: HalFormat::default(),
            name: name.into(),
            versions: Vec::new(),
            transport: None,
            interfaces: InterfaceMap::new(),
        }
    }

    pub fn format(mut self, format: HalFormat) -> Self {
        self.format = format;
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.versions.push(version);
        self
    }

    pub fn transport(mut self, transport: TransportArch) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn interface(mut self, interface: HalInterface) -> Self {
        merge_interface(&mut self.interfaces, interface);
        self
    }

    /// True if this HAL serves `instance` of `interface`.
    pub fn has_instance(&self, interface: &str, instance: &str) -> bool {
        self.interfaces
            .get(interface)
            .is_some_and(|i| i.instances.contains(instance))
    }

    /// Rejects empty names and repeated major versions.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.is_empty() {
            return Err(ParseError::EmptyHalName);
        }
        let mut majors = BTreeSet::new();
        for version in &self.versions {
            if !majors.insert(version.major) {
                return Err(ParseError::DuplicateMajorVersion {
                    hal: self.name.clone(),
                    major: version.major,
                });
            }
        }
        Ok(())
    }
}

/// A HAL requirement in a compatibility matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixHal {
    pub format: HalFormat,
    pub name: String,
    pub version_ranges: Vec<VersionRange>,
    pub optional: bool,
    pub interfaces: InterfaceMap,
}

impl MatrixHal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            format: HalFormat::default(),
            name: name.into(),
            version_ranges: Vec::new(),
            optional: false,
            interfaces: InterfaceMap::new(),
        }
    }

    pub fn format(mut self, format: HalFormat) -> Self {
        self.format = format;
        self
    }

    pub fn version_range(mut self, range: VersionRange) -> Self {
        self.version_ranges.push(range);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn interface(mut self, interface: HalInterface) -> Self {
        merge_interface(&mut self.interfaces, interface);
        self
    }

    /// True if a manifest HAL at `version` satisfies one of the ranges.
    pub fn supported_by(&self, version: Version) -> bool {
        self.version_ranges.iter().any(|r| r.supported_by(version))
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.is_empty() {
            return Err(ParseError::EmptyHalName);
        }
        Ok(())
    }
}
