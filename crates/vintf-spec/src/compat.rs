//! Manifest-versus-matrix compatibility checking.

use crate::error::Incompatibility;
use crate::hal::MatrixHal;
use crate::manifest::HalManifest;
use crate::matrix::CompatibilityMatrix;

/// Checks whether `manifest` satisfies `matrix`.
///
/// The two documents must describe opposite sides: a device manifest is
/// checked against a framework matrix and vice versa. Every non-optional HAL
/// in the matrix must be provided at a supported version with all required
/// interface instances. A device manifest must also meet the framework
/// matrix's sepolicy requirement.
pub fn check_compatibility(
    manifest: &HalManifest,
    matrix: &CompatibilityMatrix,
) -> Result<(), Incompatibility> {
    if manifest.schema_type == matrix.schema_type {
        return Err(Incompatibility::new(format!(
            "Wrong type; checking {} manifest against {} compatibility matrix",
            manifest.schema_type, matrix.schema_type
        )));
    }

    let unmet: Vec<String> = matrix
        .required_hals()
        .filter(|req| !is_requirement_met(manifest, req))
        .map(describe_requirement)
        .collect();
    if !unmet.is_empty() {
        return Err(Incompatibility::new(format!(
            "HALs incompatible. The following requirements are not met:\n{}",
            unmet.join("\n")
        )));
    }

    if manifest.is_device() {
        check_sepolicy(manifest, matrix)?;
    }

    Ok(())
}

fn is_requirement_met(manifest: &HalManifest, req: &MatrixHal) -> bool {
    manifest
        .hals_named(&req.name)
        .filter(|hal| hal.format == req.format)
        .filter(|hal| hal.versions.iter().any(|v| req.supported_by(*v)))
        .any(|hal| {
            req.interfaces.values().all(|iface| {
                iface
                    .instances
                    .iter()
                    .all(|instance| hal.has_instance(&iface.name, instance))
            })
        })
}

fn describe_requirement(req: &MatrixHal) -> String {
    let ranges: Vec<String> = req.version_ranges.iter().map(|r| r.to_string()).collect();
    let mut line = format!("    {}@{}", req.name, ranges.join(","));
    let instances: Vec<String> = req
        .interfaces
        .values()
        .flat_map(|iface| {
            iface
                .instances
                .iter()
                .map(move |instance| format!("{}/{}", iface.name, instance))
        })
        .collect();
    if !instances.is_empty() {
        line.push_str(&format!(" ({})", instances.join(", ")));
    }
    line
}

fn check_sepolicy(
    manifest: &HalManifest,
    matrix: &CompatibilityMatrix,
) -> Result<(), Incompatibility> {
    let Some(sepolicy) = &matrix.sepolicy else {
        return Ok(());
    };
    let Some(version) = manifest.sepolicy_version else {
        return Err(Incompatibility::new(
            "Device manifest does not declare a sepolicy version",
        ));
    };
    if sepolicy
        .sepolicy_versions
        .iter()
        .any(|range| range.supported_by(version))
    {
        Ok(())
    } else {
        Err(Incompatibility::new(format!(
            "Sepolicy version {} doesn't satisfy the requirements.",
            version
        )))
    }
}
