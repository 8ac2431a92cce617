//! Purpose: Library crate backing the `yaml_to_json` CLI and its tests.
//! Exports: `core` (conversion, output-path derivation, errors), `yaml` (decode boundary).
//! Role: Keeps the conversion pipeline callable without the process-level concerns of the binary.
//! Invariants: Library code never prints or exits; the binary owns stdout, stderr, and exit codes.
pub mod core;
pub mod yaml;

pub use crate::core::convert::{confirmation_line, convert};
pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::output_path::{NOT_YAML_MESSAGE, derive_output_path};
