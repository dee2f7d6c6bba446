//! CLI argument definitions for `assemble_vintf`.
//!
//! clap's built-in help and version flags are disabled: `-h` and any parse
//! error both print [`USAGE`] to stderr and exit 1.

use clap::{ArgAction, Parser};

/// Usage text printed for `-h` and for malformed command lines.
pub const USAGE: &str = "\
assemble_vintf: Checks if a given manifest / matrix file is valid and
    fill in build-time flags into the given file.
assemble_vintf -h
               Display this help text.
assemble_vintf -i <input file> [-o <output file>] [-m] [-c [<check file>]]
               Fill in build-time flags into the given file.
    -i <input file>
               Input file. Format is automatically detected.
    -o <output file>
               Optional output file. If not specified, write to stdout.
    -m
               a compatible compatibility matrix is
               generated instead; for example, given a device manifest,
               a framework compatibility matrix is generated. This flag
               is ignored when input is a compatibility matrix.
    -c [<check file>]
               After writing the output file, check compatibility between
               output file and check file.
               If -c is set but the check file is not specified, a warning
               message is written to stderr. Return 0.
               If the check file is specified but is not compatible, an error
               message is written to stderr. Return 1.
";

/// Fill build-time flags into a VINTF manifest or compatibility matrix
#[derive(Debug, Parser)]
#[command(name = "assemble_vintf")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct AssembleArgs {
    /// Input file; format is detected automatically
    #[arg(short = 'i', value_name = "INPUT")]
    pub input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Emit a compatible matrix instead of the input manifest
    #[arg(short = 'm')]
    pub output_matrix: bool,

    /// Check the output against this file; empty skips the check with a warning
    #[arg(short = 'c', value_name = "CHECK", num_args = 0..=1, default_missing_value = "")]
    pub check: Option<String>,

    /// Print usage and exit 1
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,
}
