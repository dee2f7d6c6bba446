//! End-to-end test infrastructure for VINTF assembly.
//!
//! This crate drives the assembler over real files on disk:
//!
//! - Assembly: input file plus build flags -> output file
//! - Compatibility: emitted documents checked against reference fixtures
//! - Round-trip: injected documents survive serialization and re-parsing
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vintf-tests
//! ```

pub mod fixtures;
pub mod harness;
