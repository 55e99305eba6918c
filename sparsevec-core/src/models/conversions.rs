//! Conversions between [`SparseVector`] and `sprs` sparse vectors.
use sprs::{CsVec, CsVecView};

use crate::errors::{Result, SparseVectorError};
use crate::models::SparseVector;

impl From<&SparseVector> for CsVec<f32> {
    fn from(vector: &SparseVector) -> Self {
        let indices = vector.indices().iter().map(|&i| i as usize).collect();
        // sorted, unique and in bounds by construction
        CsVec::new(vector.dim() as usize, indices, vector.values().to_vec())
    }
}

impl TryFrom<CsVecView<'_, f32>> for SparseVector {
    type Error = SparseVectorError;

    fn try_from(view: CsVecView<'_, f32>) -> Result<Self> {
        let dim =
            u32::try_from(view.dim()).map_err(|_| SparseVectorError::DimensionTooLarge(view.dim()))?;

        // every index is below `dim`, which already fits in a u32
        let indices = view.indices().iter().map(|&i| i as u32).collect();

        SparseVector::new(dim, indices, view.data().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_round_trip_through_sprs() {
        let vector = SparseVector::new(6, vec![1, 4], vec![0.5, -2.0]).unwrap();
        let csvec: CsVec<f32> = (&vector).into();

        assert_eq!(csvec.dim(), 6);
        assert_eq!(csvec.indices(), &[1, 4]);

        let back = SparseVector::try_from(csvec.view()).unwrap();
        assert_eq!(back, vector);
    }
}
