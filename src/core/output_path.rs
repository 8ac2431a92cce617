//! Purpose: Derive a `.json` output path from a `.yaml` input path.
//! Exports: `derive_output_path`, `NOT_YAML_MESSAGE`.
//! Invariants: Only the final `.`-separated segment is inspected or replaced.
//! Invariants: The comparison is exact (`yaml`, case-sensitive); anything else is a usage error.

use crate::core::error::{Error, ErrorKind};

pub const NOT_YAML_MESSAGE: &str = "The input file is not a yaml file.";

const YAML_EXTENSION: &str = "yaml";
const JSON_EXTENSION: &str = "json";

pub fn derive_output_path(input: &str) -> Result<String, Error> {
    let mut segments: Vec<&str> = input.split('.').collect();
    match segments.last_mut() {
        Some(last) if *last == YAML_EXTENSION => *last = JSON_EXTENSION,
        _ => {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(NOT_YAML_MESSAGE)
                .with_path(input));
        }
    }
    Ok(segments.join("."))
}
