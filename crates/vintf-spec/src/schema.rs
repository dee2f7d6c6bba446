//! Keyword enums shared by manifests and matrices.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Which side of the vendor interface a document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// Vendor / device partition.
    Device,
    /// System / framework partition.
    Framework,
}

impl SchemaType {
    /// Returns the keyword used in the `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Device => "device",
            SchemaType::Framework => "framework",
        }
    }

    /// The opposite side, i.e. the side a counterpart document describes.
    pub fn counterpart(&self) -> SchemaType {
        match self {
            SchemaType::Device => SchemaType::Framework,
            SchemaType::Framework => SchemaType::Device,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(SchemaType::Device),
            "framework" => Ok(SchemaType::Framework),
            _ => Err(ValueError::new("schema type", s)),
        }
    }
}

/// Interface definition format of a HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HalFormat {
    #[default]
    Hidl,
    Native,
}

impl HalFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            HalFormat::Hidl => "hidl",
            HalFormat::Native => "native",
        }
    }
}

impl fmt::Display for HalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HalFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hidl" => Ok(HalFormat::Hidl),
            "native" => Ok(HalFormat::Native),
            _ => Err(ValueError::new("HAL format", s)),
        }
    }
}

/// How a HAL is reached at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Hwbinder,
    Passthrough,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Hwbinder => "hwbinder",
            Transport::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transport {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hwbinder" => Ok(Transport::Hwbinder),
            "passthrough" => Ok(Transport::Passthrough),
            _ => Err(ValueError::new("transport", s)),
        }
    }
}

/// Bitness of a passthrough HAL implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Arch32,
    Arch64,
    Arch32And64,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arch32 => "32",
            Arch::Arch64 => "64",
            Arch::Arch32And64 => "32+64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Arch {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32" => Ok(Arch::Arch32),
            "64" => Ok(Arch::Arch64),
            "32+64" => Ok(Arch::Arch32And64),
            _ => Err(ValueError::new("arch", s)),
        }
    }
}

/// A `<transport>` element: the transport plus an optional `arch` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransportArch {
    pub transport: Transport,
    pub arch: Option<Arch>,
}

impl TransportArch {
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            arch: None,
        }
    }

    pub fn with_arch(transport: Transport, arch: Arch) -> Self {
        Self {
            transport,
            arch: Some(arch),
        }
    }
}
