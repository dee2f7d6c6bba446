//! Typed document to XML conversion.

use super::{MANIFEST_ROOT, MATRIX_ROOT, META_VERSION};
use crate::hal::InterfaceMap;
use crate::manifest::HalManifest;
use crate::matrix::CompatibilityMatrix;
use crate::schema::SchemaType;

const INDENT: &str = "    ";

/// Serializes a manifest to XML.
///
/// Element text is written verbatim, but the reader trims it, so leading or
/// trailing whitespace in names and instances does not survive a round trip.
pub fn write_manifest(manifest: &HalManifest) -> String {
    let mut w = XmlWriter::default();
    let meta_version = META_VERSION.to_string();
    w.open(
        MANIFEST_ROOT,
        &[("version", meta_version.as_str()), ("type", manifest.schema_type.as_str())],
    );

    for hal in &manifest.hals {
        w.open("hal", &[("format", hal.format.as_str())]);
        w.leaf("name", &[], &hal.name);
        if let Some(transport) = &hal.transport {
            match transport.arch {
                Some(arch) => w.leaf(
                    "transport",
                    &[("arch", arch.as_str())],
                    transport.transport.as_str(),
                ),
                None => w.leaf("transport", &[], transport.transport.as_str()),
            }
        }
        for version in &hal.versions {
            w.leaf("version", &[], &version.to_string());
        }
        write_interfaces(&mut w, &hal.interfaces);
        w.close("hal");
    }

    if manifest.schema_type == SchemaType::Device {
        if let Some(version) = manifest.sepolicy_version {
            w.open("sepolicy", &[]);
            w.leaf("version", &[], &version.to_string());
            w.close("sepolicy");
        }
    }

    w.close(MANIFEST_ROOT);
    w.finish()
}

/// Serializes a compatibility matrix to XML.
///
/// Element text is trimmed on the way back in, as for [`write_manifest`].
pub fn write_matrix(matrix: &CompatibilityMatrix) -> String {
    let mut w = XmlWriter::default();
    let meta_version = META_VERSION.to_string();
    w.open(
        MATRIX_ROOT,
        &[("version", meta_version.as_str()), ("type", matrix.schema_type.as_str())],
    );

    for hal in &matrix.hals {
        let optional = if hal.optional { "true" } else { "false" };
        w.open("hal", &[("format", hal.format.as_str()), ("optional", optional)]);
        w.leaf("name", &[], &hal.name);
        for range in &hal.version_ranges {
            w.leaf("version", &[], &range.to_string());
        }
        write_interfaces(&mut w, &hal.interfaces);
        w.close("hal");
    }

    if matrix.schema_type == SchemaType::Framework {
        if let Some(sepolicy) = &matrix.sepolicy {
            w.open("sepolicy", &[]);
            w.leaf(
                "kernel-sepolicy-version",
                &[],
                &sepolicy.kernel_sepolicy_version.to_string(),
            );
            for range in &sepolicy.sepolicy_versions {
                w.leaf("sepolicy-version", &[], &range.to_string());
            }
            w.close("sepolicy");
        }
    }

    w.close(MATRIX_ROOT);
    w.finish()
}

fn write_interfaces(w: &mut XmlWriter, interfaces: &InterfaceMap) {
    for interface in interfaces.values() {
        w.open("interface", &[]);
        w.leaf("name", &[], &interface.name);
        for instance in &interface.instances {
            w.leaf("instance", &[], instance);
        }
        w.close("interface");
    }
}

/// Line-oriented writer producing four-space indented XML.
#[derive(Default)]
struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.start_line();
        self.start_tag(tag, attrs);
        self.out.push('\n');
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.start_line();
        self.out.push_str(&format!("</{}>\n", tag));
    }

    fn leaf(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) {
        self.start_line();
        self.start_tag(tag, attrs);
        self.out.push_str(&escape(text));
        self.out.push_str(&format!("</{}>\n", tag));
    }

    fn start_line(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        self.out.push('>');
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
