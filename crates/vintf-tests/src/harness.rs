//! Test harness utilities for running assemblies and inspecting outputs.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use vintf_cli::cli_args::AssembleArgs;
use vintf_cli::run::assemble_files;
use vintf_cli::{AssembleError, AssembleReport};
use vintf_spec::xml::{parse_manifest, parse_matrix};
use vintf_spec::{CompatibilityMatrix, HalManifest};

/// Result of one assembly run.
#[derive(Debug)]
pub struct AssembleResult {
    pub report: Result<AssembleReport, AssembleError>,
    /// Contents of the `-o` file, if one was given and exists.
    pub output: Option<String>,
}

impl AssembleResult {
    /// Assert that the run succeeded and return its report.
    pub fn assert_success(&self) -> &AssembleReport {
        match &self.report {
            Ok(report) => report,
            Err(e) => panic!("Assembly failed: {}\noutput: {:?}", e, self.output),
        }
    }

    /// Assert that the run failed and return its error.
    pub fn assert_failure(&self) -> &AssembleError {
        match &self.report {
            Ok(report) => panic!(
                "Expected assembly to fail, but it succeeded.\nreport: {:?}\noutput: {:?}",
                report, self.output
            ),
            Err(e) => e,
        }
    }

    /// The output file contents; panics if no output file was written.
    pub fn output(&self) -> &str {
        self.output.as_deref().expect("no output file was written")
    }
}

/// A test harness for running assemblies over files in a scratch directory.
pub struct TestHarness {
    /// Working directory for test inputs and outputs.
    pub work_dir: TempDir,
    flags: HashMap<String, String>,
}

impl TestHarness {
    /// Create a new test harness with no build flags set.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            flags: HashMap::new(),
        }
    }

    /// Set a build flag for subsequent runs.
    pub fn flag(mut self, name: &str, value: &str) -> Self {
        self.flags.insert(name.to_string(), value.to_string());
        self
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Write a file into the working directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Run the assembler with command-line style arguments.
    ///
    /// Build flags come from the harness, never from the process environment.
    pub fn run(&self, args: &[&str]) -> AssembleResult {
        let argv = std::iter::once("assemble_vintf").chain(args.iter().copied());
        let args = AssembleArgs::try_parse_from(argv).expect("Invalid assemble_vintf arguments");
        let report = assemble_files(&args, &self.flags);
        let output = args
            .output
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok());
        AssembleResult { report, output }
    }

    /// Assemble `input` into `out.xml` in the working directory.
    pub fn assemble(&self, input: &Path, extra: &[&str]) -> AssembleResult {
        let out = self.path().join("out.xml");
        let mut args = vec![
            "-i",
            input.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a manifest file.
pub fn parse_manifest_file(path: &Path) -> Result<HalManifest, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    parse_manifest(&content).map_err(|e| format!("Failed to parse manifest: {}", e))
}

/// Parse a compatibility matrix file.
pub fn parse_matrix_file(path: &Path) -> Result<CompatibilityMatrix, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    parse_matrix(&content).map_err(|e| format!("Failed to parse matrix: {}", e))
}

/// Strip a leading XML comment, as written before a synthesized matrix.
pub fn strip_leading_comment(xml: &str) -> &str {
    match (xml.starts_with("<!--"), xml.find("-->")) {
        (true, Some(end)) => xml[end + 3..].trim_start(),
        _ => xml,
    }
}
