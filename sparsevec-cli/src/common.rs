use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

use sparsevec_dispatch::consts::SPARSEVEC_TYPE_NAME;
use sparsevec_dispatch::{CodecRegistry, Format, RegistryConfig};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// `\N` is the NULL marker of COPY text output.
pub const NULL_MARKER: &str = "\\N";

/// Load the registry config given with `--config`, or the defaults.
pub fn load_config(matches: &ArgMatches) -> Result<RegistryConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => RegistryConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to read registry config {}", path)),
        None => Ok(RegistryConfig::default()),
    }
}

///
/// Install the log subscriber. `RUST_LOG` wins over `--log-level`, which wins
/// over the config file.
///
pub fn init_logging(matches: &ArgMatches, config: &RegistryConfig) -> Result<()> {
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .or(config.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))
}

/// Registry built from config, plus the OID it uses for sparsevec.
pub fn build_registry(config: &RegistryConfig) -> Result<(CodecRegistry, u32)> {
    let registry = CodecRegistry::from_config(config)?;
    let oid = registry
        .oid_for(SPARSEVEC_TYPE_NAME)
        .context("Registry config does not register the sparsevec type")?;
    Ok((registry, oid))
}

/// `--format`, falling back to the configured preference.
pub fn requested_format(matches: &ArgMatches, config: &RegistryConfig) -> Result<Format> {
    match matches.get_one::<String>("format") {
        Some(name) => Ok(name.parse::<Format>()?),
        None => Ok(config.preferred_format),
    }
}

/// Positional inputs, or non-empty stdin lines when there are none.
pub fn collect_inputs(matches: &ArgMatches, id: &str) -> Result<Vec<String>> {
    if let Some(values) = matches.get_many::<String>(id) {
        return Ok(values.cloned().collect());
    }

    let stdin = io::stdin();
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
