//! Property-based round-trip tests for assembly using proptest.
//!
//! These tests verify that an injected document survives serialization and
//! re-parsing, and stays compatible with the reference it was checked against.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vintf-tests --test proptest_roundtrip
//! ```

use std::collections::HashMap;
use std::io::Cursor;

use proptest::prelude::*;

use vintf_cli::{Assembler, CheckStatus, XmlBackend, BOARD_SEPOLICY_VERS, POLICYVERS};
use vintf_spec::xml::{parse_manifest, parse_matrix, write_manifest, write_matrix};
use vintf_spec::{
    CompatibilityMatrix, HalInterface, HalManifest, ManifestHal, MatrixHal, SchemaType,
    Transport, TransportArch, Version, VersionRange,
};

// ============================================================================
// Strategies
// ============================================================================

fn hal_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.[a-z]{1,8}(\\.[a-z]{1,8})?"
}

fn manifest_hal() -> impl Strategy<Value = ManifestHal> {
    (
        hal_name(),
        0usize..5,
        0usize..5,
        "I[A-Z][a-z]{1,8}",
        prop::collection::btree_set("[a-z0-9/]{1,8}", 1..3),
    )
        .prop_map(|(name, major, minor, iface, instances)| {
            let mut interface = HalInterface::new(iface);
            interface.instances = instances;
            ManifestHal::new(name)
                .transport(TransportArch::new(Transport::Hwbinder))
                .version(Version::new(major, minor))
                .interface(interface)
        })
}

fn device_manifest() -> impl Strategy<Value = HalManifest> {
    prop::collection::vec(manifest_hal(), 0..6).prop_map(|hals| {
        let mut manifest = HalManifest::new(SchemaType::Device);
        manifest.hals = hals;
        manifest
    })
}

/// Flag text as a build would set it: `M` or `M.m`.
fn sepolicy_flag() -> impl Strategy<Value = (String, Version)> {
    prop_oneof![
        (20usize..40).prop_map(|major| (major.to_string(), Version::new(major, 0))),
        (20usize..40, 0usize..10)
            .prop_map(|(major, minor)| (format!("{}.{}", major, minor), Version::new(major, minor))),
    ]
}

fn flags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Runs one in-memory assembly and returns the report and output text.
fn assemble(
    flags: &HashMap<String, String>,
    input: &str,
    check: Option<&str>,
    output_matrix: bool,
) -> (vintf_cli::AssembleReport, String) {
    let mut assembler = Assembler::new(&XmlBackend, flags, Vec::new())
        .input(Cursor::new(input.as_bytes().to_vec()))
        .output_matrix(output_matrix);
    if let Some(check) = check {
        assembler = assembler.check_file(Cursor::new(check.as_bytes().to_vec()));
    }
    let report = assembler.assemble().expect("assembly failed");
    let output = String::from_utf8(assembler.into_output()).expect("output is UTF-8");
    (report, output)
}

proptest! {
    /// An injected manifest re-parses to the same document, and that
    /// document still passes the reference check it passed during assembly.
    #[test]
    fn injected_manifest_roundtrips(
        manifest in device_manifest(),
        (flag, version) in sepolicy_flag(),
    ) {
        let flags = flags(&[(BOARD_SEPOLICY_VERS, &flag)]);
        let mut injected = manifest.clone();
        injected.sepolicy_version = Some(version);
        let reference = write_matrix(&injected.generate_compatible_matrix());

        let (report, output) = assemble(&flags, &write_manifest(&manifest), Some(&reference), false);
        prop_assert_eq!(report.check, CheckStatus::Passed);

        let reparsed = parse_manifest(&output).unwrap();
        prop_assert_eq!(&reparsed, &injected);
        let reference = parse_matrix(&reference).unwrap();
        prop_assert!(reparsed.check_compatibility(&reference).is_ok());
    }

    /// A synthesized matrix always passes its own self-check and accepts
    /// the manifest it was derived from after re-parsing.
    #[test]
    fn skeleton_matrix_accepts_its_manifest(
        manifest in device_manifest(),
        (flag, version) in sepolicy_flag(),
    ) {
        let flags = flags(&[(BOARD_SEPOLICY_VERS, &flag)]);

        let (report, output) = assemble(&flags, &write_manifest(&manifest), None, true);
        prop_assert!(report.skeleton_error.is_none());

        let matrix = parse_matrix(&output).unwrap();
        prop_assert_eq!(matrix.schema_type, SchemaType::Framework);
        prop_assert_eq!(matrix.hals.len(), manifest.hals.len());

        let mut injected = manifest;
        injected.sepolicy_version = Some(version);
        prop_assert!(injected.check_compatibility(&matrix).is_ok());
    }

    /// An injected framework matrix re-parses to the same document and
    /// accepts a device manifest built for it.
    #[test]
    fn injected_matrix_roundtrips(
        manifest in device_manifest(),
        (flag, version) in sepolicy_flag(),
        kernel in 0usize..100,
    ) {
        let matrix = CompatibilityMatrix {
            hals: manifest
                .hals
                .iter()
                .map(|hal| MatrixHal {
                    format: hal.format,
                    name: hal.name.clone(),
                    version_ranges: hal.versions.iter().copied().map(VersionRange::from).collect(),
                    optional: false,
                    interfaces: hal.interfaces.clone(),
                })
                .collect(),
            ..CompatibilityMatrix::new(SchemaType::Framework)
        };
        let kernel = kernel.to_string();
        let flags = flags(&[(BOARD_SEPOLICY_VERS, &flag), (POLICYVERS, &kernel)]);

        let mut provider = manifest;
        provider.sepolicy_version = Some(version);
        let reference = write_manifest(&provider);

        let (report, output) = assemble(&flags, &write_matrix(&matrix), Some(&reference), false);
        prop_assert_eq!(report.check, CheckStatus::Passed);

        let reparsed = parse_matrix(&output).unwrap();
        prop_assert_eq!(&reparsed.hals, &matrix.hals);
        prop_assert!(provider.check_compatibility(&reparsed).is_ok());
    }
}
