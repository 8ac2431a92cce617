//! Purpose: YAML parsing boundary shared by the converter.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for the YAML backend so callsites avoid ad hoc decode logic.

pub mod parse;
