use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use rayon::prelude::*;

use sparsevec_codec::decode_text;
use sparsevec_dispatch::{CodecRegistry, Format, RegistryConfig, Value};

use crate::common::{build_registry, collect_inputs, requested_format};

pub fn run_encode(matches: &ArgMatches, config: &RegistryConfig) -> Result<()> {
    let (registry, oid) = build_registry(config)?;
    let format = requested_format(matches, config)?;
    let literals = collect_inputs(matches, "literals")?;

    info!("Encoding {} literal(s) as {}", literals.len(), format);

    let encoded = literals
        .par_iter()
        .map(|literal| encode_literal(&registry, oid, literal, format))
        .collect::<Result<Vec<String>>>()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for line in encoded {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}

///
/// Encode one literal. Binary output is rendered as lowercase hex.
///
pub fn encode_literal(
    registry: &CodecRegistry,
    oid: u32,
    literal: &str,
    format: Format,
) -> Result<String> {
    let vector =
        decode_text(literal).with_context(|| format!("Invalid sparsevec literal {:?}", literal))?;
    let value = Value::from(vector);

    let mut buf = Vec::new();
    let written = registry
        .encode_value(oid, &value, format, &mut buf)?
        .context("No registered codec can encode a sparsevec")?;

    match written {
        Format::Binary => Ok(hex::encode(buf)),
        Format::Text => Ok(String::from_utf8(buf)?),
    }
}
