//! End-to-end negotiation through the public API: values in, planned codecs,
//! bytes out and back.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::*;

use sparsevec_core::models::SparseVector;
use sparsevec_dispatch::{
    Codec, CodecRegistry, DispatchError, Format, RegistryConfig, SparseVectorCodec, Value,
    ValueKind,
};

const OID: u32 = 16390;

fn all_values() -> Vec<Value> {
    vec![
        Value::Null,
        Value::SparseVector(SparseVector::from_dense(&[1.0, 1.0, 2.0]).unwrap()),
        Value::Dense(vec![1.0, 1.0, 2.0]),
        Value::Text("{1:1,2:1,3:2}/3".to_string()),
        Value::Bytes(vec![0; 12]),
        Value::Int(1),
        Value::Float(1.0),
    ]
}

const ALL_KINDS: [ValueKind; 7] = [
    ValueKind::Null,
    ValueKind::SparseVector,
    ValueKind::Dense,
    ValueKind::Text,
    ValueKind::Bytes,
    ValueKind::Int,
    ValueKind::Float,
];

#[rstest]
fn test_encode_plan_matrix() {
    for value in all_values() {
        for format in [Format::Binary, Format::Text] {
            let planned = SparseVectorCodec.plan_encode(&value, format).is_some();
            let expected = value.kind() == ValueKind::SparseVector && format == Format::Binary;
            assert_eq!(planned, expected, "{:?} in {}", value.kind(), format);
        }
    }
}

#[rstest]
fn test_decode_plan_matrix() {
    for target in ALL_KINDS {
        for format in [Format::Binary, Format::Text] {
            let planned = SparseVectorCodec.plan_decode(format, target).is_some();
            let expected = target == ValueKind::SparseVector && format == Format::Binary;
            assert_eq!(planned, expected, "{:?} in {}", target, format);
        }
    }
}

#[rstest]
fn test_round_trip_through_registry() {
    let registry = CodecRegistry::with_sparsevec(OID);
    let value = Value::from(SparseVector::new(3, vec![0, 2], vec![1.0, 2.0]).unwrap());

    let mut buf = Vec::new();
    let format = registry
        .encode_value(OID, &value, Format::Binary, &mut buf)
        .unwrap();
    assert_eq!(format, Some(Format::Binary));
    assert_eq!(
        buf,
        [3u32, 2, 0, 0, 2, 0x3F800000, 0x40000000]
            .iter()
            .flat_map(|w| w.to_be_bytes())
            .collect::<Vec<u8>>()
    );

    let decoded = registry
        .decode_value(OID, Format::Binary, Some(buf.as_slice()))
        .unwrap();
    assert_eq!(decoded, Some(value));
}

#[rstest]
fn test_scan_into_typed_destination() {
    let registry = CodecRegistry::with_sparsevec(OID);
    let plan = registry
        .plan_decode(OID, Format::Text, ValueKind::SparseVector)
        .unwrap()
        .expect("text codec is registered");

    let mut embedding = SparseVector::default();
    plan.scan(b"{1:1,2:1,3:2}/3", &mut embedding).unwrap();
    assert_eq!(embedding.to_dense(), vec![1.0, 1.0, 2.0]);
}

#[rstest]
fn test_malformed_is_reported_not_defaulted() {
    let registry = CodecRegistry::with_sparsevec(OID);
    let result = registry.decode_value(OID, Format::Binary, Some(&[0u8; 4][..]));

    let err = result.unwrap_err();
    assert!(err.is_malformed());
    assert!(!matches!(err, DispatchError::UnsupportedConversion(_)));
}

#[rstest]
fn test_registry_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(
        &path,
        "preferred_format = \"binary\"\ntext_fallback = false\n\n[[types]]\nname = \"sparsevec\"\noid = 16390\n",
    )
    .unwrap();

    let config = RegistryConfig::try_from(path.as_path()).unwrap();
    let registry = CodecRegistry::from_config(&config).unwrap();

    assert_eq!(registry.oid_for("sparsevec"), Some(OID));
    assert!(matches!(
        registry.decode_value(OID, Format::Text, Some(b"{}/1".as_slice())),
        Err(DispatchError::UnsupportedConversion(_))
    ));
}

#[rstest]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(CodecRegistry::with_sparsevec(OID));

    let handles: Vec<_> = (1..=4u32)
        .map(|dim| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let value = Value::from(SparseVector::from_map([(dim - 1, 1.0)], dim).unwrap());
                let mut buf = Vec::new();
                registry
                    .encode_value(OID, &value, Format::Binary, &mut buf)
                    .unwrap();
                let decoded = registry
                    .decode_value(OID, Format::Binary, Some(buf.as_slice()))
                    .unwrap();
                (value, decoded)
            })
        })
        .collect();

    for handle in handles {
        let (value, decoded) = handle.join().unwrap();
        assert_eq!(decoded, Some(value));
    }
}
