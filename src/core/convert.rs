//! Purpose: Convert one YAML file into an indented JSON file.
//! Exports: `convert`, `read_document`, `encode_pretty`, `confirmation_line`.
//! Role: The conversion pipeline behind the CLI: read, decode, translate, write.
//! Invariants: The output file is created only after decoding and translation succeed.
//! Invariants: JSON is written with two-space indentation and no trailing newline.
//! Invariants: File handles are scoped to their step and closed on every exit path.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use tracing::{debug, info};

use crate::core::document;
use crate::core::error::{Error, ErrorKind, io_error};
use crate::yaml::parse;

pub fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    let document = read_document(input)?;
    let bytes = write_json(output, &document)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes,
        "converted yaml to json"
    );
    Ok(())
}

/// Loads `input` and translates it into the JSON value that will be written.
pub fn read_document(input: &Path) -> Result<JsonValue, Error> {
    let mut raw = Vec::new();
    {
        let file = File::open(input).map_err(|err| io_error(err, input, "open"))?;
        BufReader::new(file)
            .read_to_end(&mut raw)
            .map_err(|err| io_error(err, input, "read"))?;
    }
    debug!(input = %input.display(), bytes = raw.len(), "read yaml input");

    let mut value = decode(&raw).map_err(|err| err.with_path(input))?;
    value
        .apply_merge()
        .map_err(|err| decode_error(err).with_path(input))?;
    debug!(input = %input.display(), "decoded yaml document");

    document::to_json(&value).map_err(|err| err.with_path(input))
}

/// Renders `value` the way it lands on disk.
pub fn encode_pretty(value: &JsonValue) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message("failed to encode json")
            .with_source(err)
    })
}

pub fn confirmation_line(output: &Path) -> String {
    format!("Wrote to {}", output.display())
}

fn decode(raw: &[u8]) -> Result<YamlValue, Error> {
    parse::from_slice(raw).map_err(decode_error)
}

fn decode_error(err: serde_yaml::Error) -> Error {
    let hint = parse::hint_for_error(&err, "yaml.decode");
    let mut mapped = Error::new(ErrorKind::Decode)
        .with_message(format!("invalid yaml: {err}"))
        .with_hint(hint);
    if let Some(location) = err.location() {
        mapped = mapped.with_location(location.line(), location.column());
    }
    mapped.with_source(err)
}

fn write_json(output: &Path, value: &JsonValue) -> Result<usize, Error> {
    let encoded = encode_pretty(value)?;
    let file = File::create(output).map_err(|err| io_error(err, output, "create"))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encoded.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| io_error(err, output, "write"))?;
    debug!(output = %output.display(), bytes = encoded.len(), "wrote json output");
    Ok(encoded.len())
}

#[cfg(test)]
mod tests {
    use super::{confirmation_line, convert, encode_pretty, read_document};
    use crate::core::error::ErrorKind;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    #[test]
    fn converts_flow_mapping_with_two_space_indent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("data.yaml");
        let output = temp.path().join("data.json");
        fs::write(&input, "{a: 1, b: [2, 3]}\n").expect("write input");

        convert(&input, &output).expect("convert");

        let written = fs::read_to_string(&output).expect("read output");
        assert_eq!(written, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
    }

    #[test]
    fn overwrites_existing_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("in.yaml");
        let output = temp.path().join("out.json");
        fs::write(&input, "k: v\n").expect("write input");
        fs::write(&output, "x".repeat(4096)).expect("write stale output");

        convert(&input, &output).expect("convert");

        assert_eq!(
            fs::read_to_string(&output).expect("read output"),
            "{\n  \"k\": \"v\"\n}"
        );
    }

    #[test]
    fn empty_document_is_null() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("empty.yaml");
        fs::write(&input, "").expect("write input");
        assert_eq!(read_document(&input).expect("document"), json!(null));
    }

    #[test]
    fn merge_keys_are_applied() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("merge.yaml");
        fs::write(
            &input,
            "base: &base\n  host: localhost\n  port: 80\nprod:\n  <<: *base\n  port: 443\n",
        )
        .expect("write input");

        let value = read_document(&input).expect("document");
        assert_eq!(value["prod"], json!({"port": 443, "host": "localhost"}));
    }

    #[test]
    fn invalid_yaml_is_decode_error_with_location() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("bad.yaml");
        let output = temp.path().join("bad.json");
        fs::write(&input, "a: [1, 2\nb: 3\n").expect("write input");
        fs::write(&output, "keep").expect("write existing output");

        let err = convert(&input, &output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.path(), Some(input.as_path()));
        assert!(err.line().is_some());
        assert_eq!(fs::read_to_string(&output).expect("read output"), "keep");
    }

    #[test]
    fn multiple_documents_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("multi.yaml");
        fs::write(&input, "a: 1\n---\nb: 2\n").expect("write input");

        let err = read_document(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(
            err.hint()
                .unwrap_or_default()
                .contains("parse category: multiple-documents")
        );
    }

    #[test]
    fn missing_input_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("missing.yaml");
        let output = temp.path().join("missing.json");

        let err = convert(&input, &output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(input.as_path()));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_directory_is_reported() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("in.yaml");
        let output = temp.path().join("no-such-dir").join("out.json");
        fs::write(&input, "a: 1\n").expect("write input");

        let err = convert(&input, &output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Some(output.as_path()));
    }

    #[test]
    fn round_trip_preserves_structure() {
        let cases = [
            "name: demo\nitems:\n  - 1\n  - two\n  - 3.25\n  - null\nflags: {on: true, off: false}\n",
            "- [1, [2, [3, []]]]\n- {}\n- ''\n",
            "text: |\n  line one\n  line two\nunicode: \"h\\u00e9llo \\u2713\"\nneg: -17\n",
        ];
        let temp = tempfile::tempdir().expect("tempdir");
        for (idx, text) in cases.iter().enumerate() {
            let input = temp.path().join(format!("case{idx}.yaml"));
            let output = temp.path().join(format!("case{idx}.json"));
            fs::write(&input, text).expect("write input");
            convert(&input, &output).expect("convert");

            let expected: serde_json::Value = serde_yaml::from_str(text).expect("yaml as json");
            let written = fs::read_to_string(&output).expect("read output");
            let actual: serde_json::Value = serde_json::from_str(&written).expect("json");
            assert_eq!(actual, expected, "case {idx}");
        }
    }

    fn assert_same_shape(yaml: &serde_yaml::Value, json: &serde_json::Value) {
        use serde_json::Value as J;
        use serde_yaml::Value as Y;
        match (yaml, json) {
            (Y::Mapping(mapping), J::Object(object)) => {
                assert_eq!(mapping.len(), object.len(), "entries lost in {json}");
                for ((_, yaml_value), (_, json_value)) in mapping.iter().zip(object.iter()) {
                    assert_same_shape(yaml_value, json_value);
                }
            }
            (Y::Sequence(items), J::Array(values)) => {
                assert_eq!(items.len(), values.len(), "items lost in {json}");
                for (yaml_value, json_value) in items.iter().zip(values.iter()) {
                    assert_same_shape(yaml_value, json_value);
                }
            }
            (Y::Mapping(_) | Y::Sequence(_), other) => panic!("collection became {other}"),
            _ => {}
        }
    }

    #[test]
    fn scalar_keys_round_trip_without_losing_entries() {
        let cases = [
            (
                "1: one\n2: two\ntrue: yes\nfalse: no\n~: nothing\n-3: neg\n0.5: half\n",
                json!({
                    "1": "one", "2": "two", "true": "yes", "false": "no",
                    "null": "nothing", "-3": "neg", "0.5": "half"
                }),
            ),
            (
                "outer:\n  10: [a, {20: b, x: c}]\n  '11': d\n",
                json!({"outer": {"10": ["a", {"20": "b", "x": "c"}], "11": "d"}}),
            ),
        ];
        let temp = tempfile::tempdir().expect("tempdir");
        for (idx, (text, expected)) in cases.iter().enumerate() {
            let input = temp.path().join(format!("keys{idx}.yaml"));
            let output = temp.path().join(format!("keys{idx}.json"));
            fs::write(&input, text).expect("write input");
            convert(&input, &output).expect("convert");

            let written = fs::read_to_string(&output).expect("read output");
            let actual: serde_json::Value = serde_json::from_str(&written).expect("json");
            assert_eq!(&actual, expected, "case {idx}");

            let decoded: serde_yaml::Value = serde_yaml::from_str(text).expect("yaml");
            assert_same_shape(&decoded, &actual);
        }
    }

    #[test]
    fn colliding_keys_fail_without_writing_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("collide.yaml");
        let output = temp.path().join("collide.json");
        fs::write(&input, "{1: a, '1': b}\n").expect("write input");

        let err = convert(&input, &output).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(err.path(), Some(input.as_path()));
        assert!(!output.exists());
    }

    #[test]
    fn null_tag_on_empty_string_is_decode_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let input = temp.path().join("null-tag.yaml");
        fs::write(&input, "a: !!null ''\n").expect("write input");

        let err = read_document(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn encode_pretty_has_no_trailing_newline() {
        let encoded = encode_pretty(&json!({"a": []})).expect("encode");
        assert_eq!(encoded, "{\n  \"a\": []\n}");
    }

    #[test]
    fn confirmation_names_output() {
        assert_eq!(confirmation_line(Path::new("data.json")), "Wrote to data.json");
    }
}
