//! End-to-End Assembly Tests
//!
//! Tests verify:
//! - Build flag injection into manifests and matrices read from disk
//! - Skeleton matrix synthesis
//! - Failures that leave the output file empty
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vintf-tests --test e2e_assemble
//! ```

use pretty_assertions::assert_eq;

use vintf_cli::{AssembleError, CheckStatus, DocumentKind, Emitted, SKELETON_MATRIX_HEADER};
use vintf_spec::xml::{parse_matrix, write_matrix};
use vintf_spec::{KernelSepolicyVersion, SchemaType, Sepolicy, Version, VersionRange};
use vintf_tests::fixtures::Fixtures;
use vintf_tests::harness::{
    parse_manifest_file, parse_matrix_file, strip_leading_comment, TestHarness,
};

// ============================================================================
// Manifest Input
// ============================================================================

#[test]
fn test_device_manifest_gets_sepolicy_version() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "27.0");

    let result = harness.assemble(&Fixtures::device_manifest(), &[]);
    let report = result.assert_success();
    assert_eq!(report.input_kind, DocumentKind::Manifest);
    assert_eq!(report.emitted, Emitted::Manifest);
    assert_eq!(report.check, CheckStatus::Skipped);

    let input = parse_manifest_file(&Fixtures::device_manifest()).unwrap();
    let output = parse_manifest_file(&harness.path().join("out.xml")).unwrap();
    assert_eq!(output.sepolicy_version, Some(Version::new(27, 0)));
    assert_eq!(output.hals, input.hals);
}

#[test]
fn test_bare_major_flag_is_normalized() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "25");

    let result = harness.assemble(&Fixtures::device_manifest(), &[]);
    result.assert_success();
    assert!(result
        .output()
        .contains("    <sepolicy>\n        <version>25.0</version>\n    </sepolicy>\n"));
}

#[test]
fn test_framework_manifest_passes_through() {
    let harness = TestHarness::new();

    let result = harness.assemble(&Fixtures::framework_manifest(), &[]);
    result.assert_success();

    let input = parse_manifest_file(&Fixtures::framework_manifest()).unwrap();
    let output = parse_manifest_file(&harness.path().join("out.xml")).unwrap();
    assert_eq!(output, input);
    assert!(!result.output().contains("sepolicy"));
}

#[test]
fn test_device_manifest_without_flag_fails() {
    let harness = TestHarness::new().flag("POLICYVERS", "30");

    let result = harness.assemble(&Fixtures::device_manifest(), &[]);
    let err = result.assert_failure();
    assert_eq!(err.to_string(), "Required BOARD_SEPOLICY_VERS flag.");
    assert_eq!(result.output(), "");
}

#[test]
fn test_malformed_flag_fails() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "27.x");

    let result = harness.assemble(&Fixtures::device_manifest(), &[]);
    assert!(matches!(
        result.assert_failure(),
        AssembleError::UnparseableBuildFlag { value, .. } if value == "27.x"
    ));
    assert_eq!(result.output(), "");
}

// ============================================================================
// Skeleton Matrix
// ============================================================================

#[test]
fn test_skeleton_from_device_manifest() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "27.0");

    let result = harness.assemble(&Fixtures::device_manifest(), &["-m"]);
    let report = result.assert_success();
    assert_eq!(report.emitted, Emitted::SkeletonMatrix);
    assert!(report.skeleton_error.is_none());

    let output = result.output();
    assert!(output.starts_with(SKELETON_MATRIX_HEADER));

    let mut injected = parse_manifest_file(&Fixtures::device_manifest()).unwrap();
    injected.sepolicy_version = Some(Version::new(27, 0));
    let expected = write_matrix(&injected.generate_compatible_matrix());
    assert_eq!(strip_leading_comment(output), expected);

    let matrix = parse_matrix(output).unwrap();
    assert_eq!(matrix.schema_type, SchemaType::Framework);
    assert_eq!(matrix.hals.len(), injected.hals.len());
    assert!(matrix.hals.iter().all(|hal| hal.optional));
    assert_eq!(
        matrix.sepolicy,
        Some(Sepolicy::new(
            KernelSepolicyVersion(0),
            vec![VersionRange::exact(27, 0)]
        ))
    );
}

#[test]
fn test_skeleton_from_framework_manifest() {
    let harness = TestHarness::new();

    let result = harness.assemble(&Fixtures::framework_manifest(), &["-m"]);
    result.assert_success();

    let matrix = parse_matrix_file(&harness.path().join("out.xml")).unwrap();
    assert_eq!(matrix.schema_type, SchemaType::Device);
    assert!(matrix.sepolicy.is_none());
    let names: Vec<&str> = matrix.hals.iter().map(|hal| hal.name.as_str()).collect();
    assert_eq!(names, vec!["android.hidl.allocator", "android.hidl.manager"]);
}

// ============================================================================
// Matrix Input
// ============================================================================

#[test]
fn test_framework_matrix_gets_sepolicy() {
    let harness = TestHarness::new()
        .flag("BOARD_SEPOLICY_VERS", "27.0")
        .flag("POLICYVERS", "30");

    let result = harness.assemble(&Fixtures::framework_matrix(), &[]);
    let report = result.assert_success();
    assert_eq!(report.input_kind, DocumentKind::Matrix);

    let input = parse_matrix_file(&Fixtures::framework_matrix()).unwrap();
    let output = parse_matrix_file(&harness.path().join("out.xml")).unwrap();
    assert_eq!(output.hals, input.hals);
    assert_eq!(
        output.sepolicy,
        Some(Sepolicy::new(
            KernelSepolicyVersion(30),
            vec![VersionRange::exact(27, 0)]
        ))
    );
}

#[test]
fn test_framework_matrix_requires_both_flags() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "27.0");
    let result = harness.assemble(&Fixtures::framework_matrix(), &[]);
    assert_eq!(
        result.assert_failure().to_string(),
        "Required POLICYVERS flag."
    );
    assert_eq!(result.output(), "");

    let harness = TestHarness::new().flag("POLICYVERS", "30");
    let result = harness.assemble(&Fixtures::framework_matrix(), &[]);
    assert_eq!(
        result.assert_failure().to_string(),
        "Required BOARD_SEPOLICY_VERS flag."
    );
}

#[test]
fn test_output_matrix_flag_ignored_for_matrix_input() {
    let harness = TestHarness::new();

    let result = harness.assemble(&Fixtures::device_matrix(), &["-m"]);
    assert_eq!(result.assert_success().emitted, Emitted::Matrix);

    let input = parse_matrix_file(&Fixtures::device_matrix()).unwrap();
    let output = parse_matrix_file(&harness.path().join("out.xml")).unwrap();
    assert_eq!(output, input);
    assert!(!result.output().contains("Autogenerated"));
}

// ============================================================================
// Input Errors
// ============================================================================

#[test]
fn test_unknown_format_leaves_output_empty() {
    let harness = TestHarness::new();

    let result = harness.assemble(&Fixtures::kernel_config(), &[]);
    let message = result.assert_failure().to_string();
    assert!(message.starts_with("Input file has unknown format.\n"));
    assert!(message.contains("<manifest>"));
    assert!(message.contains("<compatibility-matrix>"));
    assert_eq!(result.output(), "");
}

#[test]
fn test_missing_input_file() {
    let harness = TestHarness::new();
    let out = harness.path().join("out.xml");

    let result = harness.run(&["-o", out.to_str().unwrap()]);
    assert!(matches!(
        result.assert_failure(),
        AssembleError::MissingInputFile
    ));
}

#[test]
fn test_unopenable_input_file() {
    let harness = TestHarness::new();
    let missing = harness.path().join("does-not-exist.xml");

    let result = harness.run(&["-i", missing.to_str().unwrap()]);
    assert_eq!(
        result.assert_failure().to_string(),
        format!("Failed to open {}", missing.display())
    );
}

#[test]
fn test_input_written_by_harness() {
    let harness = TestHarness::new().flag("BOARD_SEPOLICY_VERS", "26.0");
    let input = harness.write(
        "minimal.xml",
        r#"<manifest version="1.0" type="device"/>"#,
    );

    let result = harness.assemble(&input, &[]);
    result.assert_success();
    assert_eq!(
        result.output(),
        "<manifest version=\"1.0\" type=\"device\">\n    <sepolicy>\n        <version>26.0</version>\n    </sepolicy>\n</manifest>\n"
    );
}
