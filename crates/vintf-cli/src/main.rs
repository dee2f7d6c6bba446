//! assemble_vintf - fill build-time flags into VINTF manifests and matrices

use clap::Parser;
use std::process::ExitCode;

use vintf_cli::cli_args::{AssembleArgs, USAGE};
use vintf_cli::run;

fn main() -> ExitCode {
    let args = match AssembleArgs::try_parse() {
        Ok(args) if !args.help => args,
        _ => {
            eprint!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    match run::run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
