use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use crate::codec::{Codec, DecodePlan, EncodePlan};
use crate::codecs::{SparseVectorCodec, SparseVectorTextCodec};
use crate::config::RegistryConfig;
use crate::consts::SPARSEVEC_TYPE_NAME;
use crate::error::{DispatchError, Result};
use crate::format::Format;
use crate::value::{Value, ValueKind};

struct TypeEntry {
    name: String,
    codecs: Vec<Box<dyn Codec>>,
}

///
/// Maps type OIDs to the codecs that can handle them.
///
/// Each type has an ordered list of codecs. Planning walks the list and
/// returns the first plan offered, so registration order is negotiation
/// order. The registry is built once and then only read, so it can be shared
/// freely between threads.
///
#[derive(Default)]
pub struct CodecRegistry {
    types: HashMap<u32, TypeEntry>,
    oids: HashMap<String, u32>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Append `codec` to the codecs for `oid`.
    ///
    /// # Arguments
    /// - name: type name, e.g. `sparsevec`
    /// - oid: the OID the server reports for the type
    /// - codec: tried after any codec already registered for `oid`
    ///
    pub fn register(&mut self, name: &str, oid: u32, codec: Box<dyn Codec>) -> &mut Self {
        debug!("Registering codec {} for {} (oid {})", codec.name(), name, oid);

        self.oids.insert(name.to_string(), oid);
        self.types
            .entry(oid)
            .or_insert_with(|| TypeEntry {
                name: name.to_string(),
                codecs: Vec::new(),
            })
            .codecs
            .push(codec);
        self
    }

    /// Register the binary sparsevec codec, optionally followed by the text codec.
    pub fn register_sparsevec(&mut self, oid: u32, text_fallback: bool) -> &mut Self {
        self.register(SPARSEVEC_TYPE_NAME, oid, Box::new(SparseVectorCodec));
        if text_fallback {
            self.register(SPARSEVEC_TYPE_NAME, oid, Box::new(SparseVectorTextCodec));
        }
        self
    }

    pub fn with_sparsevec(oid: u32) -> Self {
        let mut registry = Self::new();
        registry.register_sparsevec(oid, true);
        registry
    }

    ///
    /// Build a registry from config.
    ///
    /// Only the `sparsevec` type is known; any other type name is rejected.
    /// Each name and each OID may appear once.
    ///
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let mut registry = Self::new();

        for registration in &config.types {
            if registration.name != SPARSEVEC_TYPE_NAME {
                return Err(DispatchError::UnknownTypeName(registration.name.clone()));
            }
            if registry.oids.contains_key(&registration.name)
                || registry.types.contains_key(&registration.oid)
            {
                return Err(DispatchError::DuplicateType {
                    name: registration.name.clone(),
                    oid: registration.oid,
                });
            }
            registry.register_sparsevec(registration.oid, config.text_fallback);
        }

        info!(
            "Codec registry ready with {} type(s), text fallback {}",
            registry.types.len(),
            if config.text_fallback { "on" } else { "off" }
        );

        Ok(registry)
    }

    /// Read a TOML config file and build the registry it describes.
    pub fn from_path(path: &Path) -> Result<Self> {
        let config = RegistryConfig::try_from(path)?;
        Self::from_config(&config)
    }

    pub fn oid_for(&self, name: &str) -> Option<u32> {
        self.oids.get(name).copied()
    }

    pub fn type_name(&self, oid: u32) -> Option<&str> {
        self.types.get(&oid).map(|entry| entry.name.as_str())
    }

    pub fn codecs(&self, oid: u32) -> Result<&[Box<dyn Codec>]> {
        self.types
            .get(&oid)
            .map(|entry| entry.codecs.as_slice())
            .ok_or(DispatchError::UnknownType(oid))
    }

    /// Preferred format of the first codec registered for `oid`.
    pub fn preferred_format(&self, oid: u32) -> Result<Format> {
        self.codecs(oid)?
            .first()
            .map(|codec| codec.preferred_format())
            .ok_or(DispatchError::UnknownType(oid))
    }

    /// First encode plan any codec for `oid` offers, `Ok(None)` if none applies.
    pub fn plan_encode(
        &self,
        oid: u32,
        value: &Value,
        format: Format,
    ) -> Result<Option<Box<dyn EncodePlan>>> {
        Ok(self
            .codecs(oid)?
            .iter()
            .find_map(|codec| codec.plan_encode(value, format)))
    }

    /// First decode plan any codec for `oid` offers, `Ok(None)` if none applies.
    pub fn plan_decode(
        &self,
        oid: u32,
        format: Format,
        target: ValueKind,
    ) -> Result<Option<Box<dyn DecodePlan>>> {
        Ok(self
            .codecs(oid)?
            .iter()
            .find_map(|codec| codec.plan_decode(format, target)))
    }

    ///
    /// Encode `value`, trying `preferred` first and then each codec's own
    /// preferred format.
    ///
    /// Returns the format that was written, or `None` when no codec for `oid`
    /// can encode this value at all (for example a pre-formatted text
    /// literal, which the caller should pass through unchanged).
    ///
    pub fn encode_value(
        &self,
        oid: u32,
        value: &Value,
        preferred: Format,
        buf: &mut Vec<u8>,
    ) -> Result<Option<Format>> {
        let codecs = self.codecs(oid)?;

        let candidates =
            std::iter::once(preferred).chain(codecs.iter().map(|codec| codec.preferred_format()));

        for format in candidates {
            if let Some(plan) = codecs.iter().find_map(|codec| codec.plan_encode(value, format)) {
                plan.encode(value, buf)?;
                return Ok(Some(format));
            }
        }

        debug!("No codec for oid {} can encode a {:?} value", oid, value.kind());
        Ok(None)
    }

    ///
    /// Decode a field into a dynamically-typed value.
    ///
    /// `None` input (a SQL NULL) gives `None` output. When no codec for `oid`
    /// has a plan for `format` the call fails with
    /// [`DispatchError::UnsupportedConversion`].
    ///
    pub fn decode_value(
        &self,
        oid: u32,
        format: Format,
        src: Option<&[u8]>,
    ) -> Result<Option<Value>> {
        let codecs = self.codecs(oid)?;

        let Some(src) = src else {
            return Ok(None);
        };

        let plan = codecs
            .iter()
            .find_map(|codec| codec.plan_decode(format, ValueKind::SparseVector))
            .ok_or_else(|| {
                DispatchError::UnsupportedConversion(format!(
                    "no codec for oid {} decodes {} format",
                    oid, format
                ))
            })?;

        Ok(Some(Value::SparseVector(plan.decode(src)?)))
    }
}
