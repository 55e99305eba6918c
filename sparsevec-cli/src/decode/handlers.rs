use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use rayon::prelude::*;

use sparsevec_codec::{TextLiteral, read_header};
use sparsevec_dispatch::{CodecRegistry, Format, RegistryConfig, Value};

use crate::common::{NULL_MARKER, build_registry, collect_inputs, requested_format};

pub fn run_decode(matches: &ArgMatches, config: &RegistryConfig) -> Result<()> {
    let (registry, oid) = build_registry(config)?;
    let format = requested_format(matches, config)?;
    let json = matches.get_flag("json");
    let inputs = collect_inputs(matches, "inputs")?;

    info!("Decoding {} value(s) from {}", inputs.len(), format);

    let decoded = inputs
        .par_iter()
        .map(|input| decode_input(&registry, oid, input, format, json))
        .collect::<Result<Vec<String>>>()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for line in decoded {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}

///
/// Decode one input and render it as a text literal or JSON.
///
/// Binary input is expected as hex. `\N` is treated as NULL and never reaches
/// a codec.
///
pub fn decode_input(
    registry: &CodecRegistry,
    oid: u32,
    input: &str,
    format: Format,
    json: bool,
) -> Result<String> {
    let input = input.trim();

    let bytes = match (input, format) {
        (NULL_MARKER, _) => None,
        (_, Format::Binary) => Some(
            hex::decode(input).with_context(|| format!("Binary input must be hex: {:?}", input))?,
        ),
        (_, Format::Text) => Some(input.as_bytes().to_vec()),
    };

    if let (Format::Binary, Some(bytes)) = (format, bytes.as_deref()) {
        match read_header(bytes) {
            Ok(header) => debug!("Decoding sparsevec dim={} nnz={}", header.dim, header.nnz),
            Err(e) => debug!("Input is not a sparsevec: {}", e),
        }
    }

    let value = registry
        .decode_value(oid, format, bytes.as_deref())
        .with_context(|| format!("Failed to decode {:?}", input))?;

    match value {
        None if json => Ok("null".to_string()),
        None => Ok("NULL".to_string()),
        Some(Value::SparseVector(vector)) if json => Ok(serde_json::to_string(&vector)?),
        Some(Value::SparseVector(vector)) => Ok(TextLiteral(&vector).to_string()),
        Some(other) => anyhow::bail!("Unexpected {:?} value from sparsevec codec", other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const EXAMPLE_HEX: &str = "00000003000000020000000000000000000000023f80000040000000";

    #[fixture]
    fn registry() -> CodecRegistry {
        CodecRegistry::with_sparsevec(1)
    }

    #[rstest]
    fn test_decode_hex(registry: CodecRegistry) {
        let text = decode_input(&registry, 1, EXAMPLE_HEX, Format::Binary, false).unwrap();
        assert_eq!(text, "{1:1,3:2}/3");
    }

    #[rstest]
    fn test_decode_json(registry: CodecRegistry) {
        let json = decode_input(&registry, 1, EXAMPLE_HEX, Format::Binary, true).unwrap();
        assert_eq!(json, r#"{"dim":3,"indices":[0,2],"values":[1.0,2.0]}"#);
    }

    #[rstest]
    #[case(false, "NULL")]
    #[case(true, "null")]
    fn test_decode_null(registry: CodecRegistry, #[case] json: bool, #[case] expected: &str) {
        let out = decode_input(&registry, 1, "\\N", Format::Binary, json).unwrap();
        assert_eq!(out, expected);
    }

    #[rstest]
    fn test_decode_text(registry: CodecRegistry) {
        let text = decode_input(&registry, 1, "{3:2,1:1}/3", Format::Text, false).unwrap();
        assert_eq!(text, "{1:1,3:2}/3");
    }

    #[rstest]
    #[case("zz")]
    #[case("000000030000000100000000")]
    fn test_decode_rejects(registry: CodecRegistry, #[case] input: &str) {
        assert!(decode_input(&registry, 1, input, Format::Binary, false).is_err());
    }
}
