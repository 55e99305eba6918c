//! Wire-level tests against hand-written byte sequences.
//!
//! Unit tests for the individual validation branches live next to the code in
//! src/binary.rs and src/text.rs.

use rstest::*;

use sparsevec_codec::{MalformedInput, decode_binary, decode_text, to_binary, to_text};
use sparsevec_core::SparseVectorError;
use sparsevec_core::models::SparseVector;

fn from_hex(words: &str) -> Vec<u8> {
    hex::decode(words.replace(' ', "")).expect("valid hex in test")
}

#[fixture]
fn example() -> SparseVector {
    SparseVector::new(3, vec![0, 2], vec![1.0, 2.0]).unwrap()
}

#[rstest]
fn test_documented_example(example: SparseVector) {
    let expected = from_hex("00000003 00000002 00000000 00000000 00000002 3F800000 40000000");

    let encoded = to_binary(&example).unwrap();
    assert_eq!(encoded, expected);

    let decoded = decode_binary(&encoded).unwrap();
    assert_eq!(decoded.iter().collect::<Vec<_>>(), vec![(0, 1.0), (2, 2.0)]);
    assert_eq!(decoded.dim(), 3);
}

#[rstest]
fn test_binary_and_text_agree(example: SparseVector) {
    let via_text = decode_text(&to_text(&example)).unwrap();
    let via_binary = decode_binary(&to_binary(&example).unwrap()).unwrap();
    assert_eq!(via_text, via_binary);
}

#[rstest]
fn test_dense_input_matches_server_output() {
    // the server prints `{1:1,2:1,3:2}/3` for '[1,1,2]'::sparsevec
    let dense = decode_text("[1,1,2]").unwrap();
    assert_eq!(to_text(&dense), "{1:1,2:1,3:2}/3");
    assert_eq!(dense.to_dense(), vec![1.0, 1.0, 2.0]);
}

#[rstest]
#[case("", MalformedInput::TruncatedHeader(0))]
#[case("00000003 00000001 000000", MalformedInput::TruncatedHeader(11))]
#[case(
    "00000003 00000001 00000000 00000000",
    MalformedInput::LengthMismatch { nnz: 1, expected: 8, actual: 4 }
)]
#[case(
    "00000003 00000001 00000000 00000000 3F800000 00",
    MalformedInput::LengthMismatch { nnz: 1, expected: 8, actual: 9 }
)]
#[case(
    "00000003 00000003 00000000 00000000 00000002 00000001 3F800000 3F800000 3F800000",
    MalformedInput::Invalid(SparseVectorError::UnorderedIndices { previous: 2, index: 1 })
)]
#[case(
    "00000003 00000001 00000000 00000003 3F800000",
    MalformedInput::Invalid(SparseVectorError::IndexOutOfBounds { index: 3, dim: 3 })
)]
fn test_rejected_inputs(#[case] hex: &str, #[case] expected: MalformedInput) {
    let bytes = from_hex(hex);
    assert_eq!(decode_binary(&bytes), Err(expected));
}

#[rstest]
fn test_parallel_decode_is_independent() {
    let vectors: Vec<SparseVector> = (1..=8u32)
        .map(|dim| SparseVector::from_map((0..dim).map(|i| (i, i as f32 + 0.5)), dim).unwrap())
        .collect();
    let encoded: Vec<Vec<u8>> = vectors.iter().map(|v| to_binary(v).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = encoded
            .iter()
            .map(|bytes| scope.spawn(move || decode_binary(bytes).unwrap()))
            .collect();

        for (handle, expected) in handles.into_iter().zip(&vectors) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
