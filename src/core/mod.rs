// Core modules implementing conversion, document translation, and error modeling.
pub mod convert;
pub mod document;
pub mod error;
pub mod output_path;
