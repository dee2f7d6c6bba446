//! XML to typed document conversion.

use std::str::FromStr;

use roxmltree::{Document, Node};

use super::{MANIFEST_ROOT, MATRIX_ROOT, META_VERSION};
use crate::error::{ParseError, ValueError};
use crate::hal::{merge_interface, HalInterface, InterfaceMap, ManifestHal, MatrixHal};
use crate::manifest::HalManifest;
use crate::matrix::{CompatibilityMatrix, Sepolicy};
use crate::schema::{SchemaType, TransportArch};
use crate::version::Version;

/// Parses a `<manifest>` document.
pub fn parse_manifest(xml: &str) -> Result<HalManifest, ParseError> {
    let doc = Document::parse(xml)?;
    let root = expect_root(&doc, MANIFEST_ROOT)?;
    let schema_type: SchemaType = required_attr(root, "type")?;

    let mut manifest = HalManifest::new(schema_type);
    for node in children(root, "hal") {
        let hal = parse_manifest_hal(node)?;
        hal.validate()?;
        manifest.hals.push(hal);
    }

    if schema_type == SchemaType::Device {
        if let Some(sepolicy) = children(root, "sepolicy").next() {
            manifest.sepolicy_version = Some(parse_text(required_child(sepolicy, "version")?)?);
        }
    }

    Ok(manifest)
}

/// Parses a `<compatibility-matrix>` document.
pub fn parse_matrix(xml: &str) -> Result<CompatibilityMatrix, ParseError> {
    let doc = Document::parse(xml)?;
    let root = expect_root(&doc, MATRIX_ROOT)?;
    let schema_type: SchemaType = required_attr(root, "type")?;

    let mut matrix = CompatibilityMatrix::new(schema_type);
    for node in children(root, "hal") {
        let hal = parse_matrix_hal(node)?;
        hal.validate()?;
        matrix.hals.push(hal);
    }

    if schema_type == SchemaType::Framework {
        if let Some(sepolicy) = children(root, "sepolicy").next() {
            matrix.sepolicy = Some(Sepolicy::new(
                parse_text(required_child(sepolicy, "kernel-sepolicy-version")?)?,
                children(sepolicy, "sepolicy-version")
                    .map(parse_text)
                    .collect::<Result<_, _>>()?,
            ));
        }
    }

    Ok(matrix)
}

fn expect_root<'a, 'input>(
    doc: &'a Document<'input>,
    expected: &'static str,
) -> Result<Node<'a, 'input>, ParseError> {
    let root = doc.root_element();
    if root.tag_name().name() != expected {
        return Err(ParseError::WrongRoot {
            expected,
            found: root.tag_name().name().to_string(),
        });
    }
    if let Some(version) = optional_attr::<Version>(root, "version")? {
        if version.major != META_VERSION.major {
            return Err(ParseError::UnsupportedMetaVersion(version));
        }
    }
    Ok(root)
}

fn parse_manifest_hal(node: Node) -> Result<ManifestHal, ParseError> {
    let transport = match children(node, "transport").next() {
        Some(t) => Some(TransportArch {
            transport: parse_text(t)?,
            arch: optional_attr(t, "arch")?,
        }),
        None => None,
    };

    Ok(ManifestHal {
        format: optional_attr(node, "format")?.unwrap_or_default(),
        name: element_text(required_child(node, "name")?).to_string(),
        versions: children(node, "version")
            .map(parse_text)
            .collect::<Result<_, _>>()?,
        transport,
        interfaces: parse_interfaces(node)?,
    })
}

fn parse_matrix_hal(node: Node) -> Result<MatrixHal, ParseError> {
    let optional = match node.attribute("optional") {
        Some("true") => true,
        Some("false") | None => false,
        Some(other) => {
            return Err(ParseError::InvalidValue {
                location: "hal@optional".to_string(),
                source: ValueError::new("boolean", other),
            })
        }
    };

    Ok(MatrixHal {
        format: optional_attr(node, "format")?.unwrap_or_default(),
        name: element_text(required_child(node, "name")?).to_string(),
        version_ranges: children(node, "version")
            .map(parse_text)
            .collect::<Result<_, _>>()?,
        optional,
        interfaces: parse_interfaces(node)?,
    })
}

fn parse_interfaces(hal: Node) -> Result<InterfaceMap, ParseError> {
    let mut interfaces = InterfaceMap::new();
    for node in children(hal, "interface") {
        let mut interface = HalInterface::new(element_text(required_child(node, "name")?));
        interface
            .instances
            .extend(children(node, "instance").map(|i| element_text(i).to_string()));
        merge_interface(&mut interfaces, interface);
    }
    Ok(interfaces)
}

/// Element children with the given tag name, in document order.
fn children<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>, ParseError> {
    children(node, name)
        .next()
        .ok_or_else(|| ParseError::MissingElement {
            parent: node.tag_name().name().to_string(),
            element: name,
        })
}

/// Text content with surrounding whitespace removed.
fn element_text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or("")
}

fn parse_text<T>(node: Node) -> Result<T, ParseError>
where
    T: FromStr<Err = ValueError>,
{
    element_text(node)
        .parse()
        .map_err(|source| ParseError::InvalidValue {
            location: location(node),
            source,
        })
}

fn required_attr<T>(node: Node, name: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = ValueError>,
{
    optional_attr(node, name)?.ok_or_else(|| ParseError::MissingAttribute {
        element: node.tag_name().name().to_string(),
        attribute: name,
    })
}

fn optional_attr<T>(node: Node, name: &'static str) -> Result<Option<T>, ParseError>
where
    T: FromStr<Err = ValueError>,
{
    node.attribute(name)
        .map(|raw| {
            raw.parse().map_err(|source| ParseError::InvalidValue {
                location: format!("{}@{}", node.tag_name().name(), name),
                source,
            })
        })
        .transpose()
}

/// `parent/child` path used in diagnostics.
fn location(node: Node) -> String {
    match node.parent_element() {
        Some(parent) => format!("{}/{}", parent.tag_name().name(), node.tag_name().name()),
        None => node.tag_name().name().to_string(),
    }
}
