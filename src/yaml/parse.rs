//! Purpose: Provide the YAML decode entrypoint and parse-failure categorization.
//! Exports: `from_str`, `from_slice`, `ParseFailureCategory`, `categorize_error`,
//! `categorize_message`, `hint_for_error`, `hint_for_message`.
//! Role: Parser boundary that centralizes serde_yaml usage details.
//! Invariants: Categories are derived from parser messages only; payload text is never echoed.
//! Invariants: Self-contained (external crates only) so tests can include it by path.
//! Notes: Error mapping into the crate `Error` is done by callsites so file context stays explicit.

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    MultipleDocuments,
    DuplicateKey,
    Tag,
    RecursionLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::MultipleDocuments => "multiple-documents",
            ParseFailureCategory::DuplicateKey => "duplicate-key",
            ParseFailureCategory::Tag => "tag",
            ParseFailureCategory::RecursionLimit => "recursion-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "Check indentation, quoting, and `key: value` layout.",
            ParseFailureCategory::MultipleDocuments => {
                "Only a single YAML document is supported; split the `---` stream into separate files."
            }
            ParseFailureCategory::DuplicateKey => "Remove or rename the repeated mapping key.",
            ParseFailureCategory::Tag => {
                "Only plain scalars, sequences, and mappings are allowed; drop the explicit tag."
            }
            ParseFailureCategory::RecursionLimit => "Reduce nesting depth of the document.",
            ParseFailureCategory::Unknown => "Check that the file is a valid YAML document.",
        }
    }
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_yaml::Error> {
    serde_yaml::from_str(input)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_yaml::Error> {
    serde_yaml::from_slice(input)
}

pub fn categorize_error(err: &serde_yaml::Error) -> ParseFailureCategory {
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown if err.location().is_some() => ParseFailureCategory::Syntax,
        category => category,
    }
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("more than one document") {
        return ParseFailureCategory::MultipleDocuments;
    }
    if lower.contains("duplicate entry") || lower.contains("duplicate key") {
        return ParseFailureCategory::DuplicateKey;
    }
    if lower.contains("recursion limit") {
        return ParseFailureCategory::RecursionLimit;
    }
    if lower.contains("unsupported tag") {
        return ParseFailureCategory::Tag;
    }
    const SYNTAX_MARKERS: &[&str] = &[
        "did not find expected",
        "could not find expected",
        "mapping values are not allowed",
        "found unexpected",
        "found character that cannot start",
        "found undefined",
        "while parsing",
        "while scanning",
        "unknown anchor",
        "invalid leading utf-8",
        "control characters are not allowed",
    ];
    if SYNTAX_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return ParseFailureCategory::Syntax;
    }
    ParseFailureCategory::Unknown
}

pub fn hint_for_error(err: &serde_yaml::Error, context: &str) -> String {
    hint_for_category(categorize_error(err), context)
}

pub fn hint_for_message(message: &str, context: &str) -> String {
    hint_for_category(categorize_message(message), context)
}

fn hint_for_category(category: ParseFailureCategory, context: &str) -> String {
    format!(
        "{} (parse category: {}; context: {context})",
        category.advice(),
        category.as_str()
    )
}
