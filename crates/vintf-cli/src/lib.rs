//! Build-time assembler for VINTF documents.
//!
//! This crate provides the core of the `assemble_vintf` binary: input
//! classification, build flag injection, optional matrix synthesis and the
//! compatibility check against a reference document.

pub mod assemble;
pub mod backend;
pub mod cli_args;
pub mod error;
pub mod flags;
pub mod inject;
pub mod input;
pub mod run;

pub use assemble::{AssembleReport, Assembler, CheckStatus, Emitted, SKELETON_MATRIX_HEADER};
pub use backend::{DocumentBackend, XmlBackend};
pub use error::AssembleError;
pub use flags::{FlagSource, ProcessEnv, BOARD_SEPOLICY_VERS, POLICYVERS};
pub use input::{Document, DocumentKind};
