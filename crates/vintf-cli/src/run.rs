//! File-level driver for the `assemble_vintf` binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::assemble::{AssembleReport, Assembler};
use crate::backend::XmlBackend;
use crate::cli_args::AssembleArgs;
use crate::error::AssembleError;
use crate::flags::{FlagSource, ProcessEnv};

/// Runs the assembler with build flags taken from the process environment.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &AssembleArgs) -> Result<ExitCode> {
    assemble_files(args, &ProcessEnv)?;
    Ok(ExitCode::SUCCESS)
}

/// Opens the files named by `args` and runs one assembly over them.
///
/// Files are opened in the order input, output, check file. An output file
/// is created (or truncated) even when a later step fails. An empty check
/// path skips the check with a warning on stderr.
pub fn assemble_files(
    args: &AssembleArgs,
    flags: &dyn FlagSource,
) -> Result<AssembleReport, AssembleError> {
    let input = args.input.as_deref().map(open).transpose()?;

    let output: Box<dyn Write> = match args.output.as_deref() {
        Some(path) => Box::new(BufWriter::new(create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let check = match args.check.as_deref() {
        Some("") => {
            eprintln!(
                "{} no compatibility check is done on {}",
                "WARNING:".yellow().bold(),
                args.input.as_deref().unwrap_or_default()
            );
            None
        }
        Some(path) => Some(open(path)?),
        None => None,
    };

    let mut assembler =
        Assembler::new(&XmlBackend, flags, output).output_matrix(args.output_matrix);
    if let Some(input) = input {
        assembler = assembler.input(input);
    }
    if let Some(check) = check {
        assembler = assembler.check_file(check);
    }
    assembler.assemble()
}

fn open(path: &str) -> Result<File, AssembleError> {
    File::open(path).map_err(|source| AssembleError::UnopenableFile {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

fn create(path: &str) -> Result<File, AssembleError> {
    File::create(path).map_err(|source| AssembleError::UnopenableFile {
        path: Path::new(path).to_path_buf(),
        source,
    })
}
