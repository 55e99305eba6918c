use std::collections::BTreeMap;
use std::iter::FusedIterator;

use crate::errors::{Result, SparseVectorError};

///
/// A fixed-dimension vector that stores only its nonzero entries.
///
/// Indices are zero-based, strictly increasing and smaller than `dim`. Every
/// constructor checks this, so a `SparseVector` in hand is always valid and
/// code downstream can rely on sorted, unique, in-bounds indices.
///
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSparseVector"))]
pub struct SparseVector {
    dim: u32,
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    ///
    /// Create a sparse vector from explicit parts.
    ///
    /// # Arguments
    /// - dim: total length of the vector, including implicit zeros
    /// - indices: zero-based positions, strictly increasing
    /// - values: the value stored at each position in `indices`
    ///
    pub fn new(dim: u32, indices: Vec<u32>, values: Vec<f32>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(SparseVectorError::LengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }

        check_indices(dim, &indices)?;

        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// A vector of `dim` zeros.
    pub fn empty(dim: u32) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    ///
    /// Build a sparse vector from a dense slice, dropping exact zeros.
    ///
    /// `-0.0` compares equal to `0.0` and is dropped as well.
    ///
    pub fn from_dense(dense: &[f32]) -> Result<Self> {
        let dim = u32::try_from(dense.len())
            .map_err(|_| SparseVectorError::DimensionTooLarge(dense.len()))?;

        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.0)
            .map(|(index, &value)| (index as u32, value))
            .unzip();

        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    ///
    /// Build a sparse vector from unordered `(index, value)` pairs.
    ///
    /// Pairs are sorted by index and zero values are dropped. When an index
    /// appears more than once the last pair wins.
    ///
    /// # Arguments
    /// - entries: the pairs, in any order
    /// - dim: total length of the vector
    ///
    pub fn from_map<I>(entries: I, dim: u32) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, f32)>,
    {
        let sorted: BTreeMap<u32, f32> = entries.into_iter().collect();

        if let Some((&index, _)) = sorted.last_key_value() {
            if index >= dim {
                return Err(SparseVectorError::IndexOutOfBounds { index, dim });
            }
        }

        let (indices, values) = sorted
            .into_iter()
            .filter(|(_, value)| *value != 0.0)
            .unzip();

        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// Total dimensionality
    #[inline]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Number of stored (nonzero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `index`, `0.0` for positions that are not stored.
    pub fn get(&self, index: u32) -> f32 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate over stored entries as `(index, value)` pairs, in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    ///
    /// Iterate over all `dim` positions, yielding `0.0` where nothing is stored.
    ///
    /// Each call starts a fresh pass, so the dense form can be walked as often
    /// as needed without materializing it.
    ///
    pub fn dense_iter(&self) -> DenseIter<'_> {
        DenseIter {
            vector: self,
            position: 0,
            cursor: 0,
        }
    }

    /// Materialize the dense form.
    pub fn to_dense(&self) -> Vec<f32> {
        self.dense_iter().collect()
    }

    /// Split into `(dim, indices, values)`.
    pub fn into_parts(self) -> (u32, Vec<u32>, Vec<f32>) {
        (self.dim, self.indices, self.values)
    }
}

fn check_indices(dim: u32, indices: &[u32]) -> Result<()> {
    let mut previous: Option<u32> = None;

    for &index in indices {
        if index >= dim {
            return Err(SparseVectorError::IndexOutOfBounds { index, dim });
        }
        if let Some(previous) = previous {
            if index <= previous {
                return Err(SparseVectorError::UnorderedIndices { previous, index });
            }
        }
        previous = Some(index);
    }

    Ok(())
}

///
/// Dense view over a [`SparseVector`], see [`SparseVector::dense_iter`].
///
#[derive(Debug, Clone)]
pub struct DenseIter<'a> {
    vector: &'a SparseVector,
    position: u32,
    // next stored entry that has not been emitted yet
    cursor: usize,
}

impl Iterator for DenseIter<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.vector.dim {
            return None;
        }

        let value = match self.vector.indices.get(self.cursor) {
            Some(&index) if index == self.position => {
                self.cursor += 1;
                self.vector.values[self.cursor - 1]
            }
            _ => 0.0,
        };
        self.position += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.vector.dim - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DenseIter<'_> {}

impl FusedIterator for DenseIter<'_> {}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSparseVector {
    dim: u32,
    indices: Vec<u32>,
    values: Vec<f32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSparseVector> for SparseVector {
    type Error = SparseVectorError;

    fn try_from(raw: RawSparseVector) -> Result<Self> {
        SparseVector::new(raw.dim, raw.indices, raw.values)
    }
}
