use sparsevec_core::models::SparseVector;

///
/// A dynamically-typed value handed to, or produced by, a codec.
///
/// This is a closed set: a value either is a sparse vector or it is not, and
/// [`Value::as_sparse_vector`] is the single type test codecs rely on.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    SparseVector(SparseVector),
    Dense(Vec<f32>),
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

///
/// Type descriptor for a value or a destination slot.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    SparseVector,
    Dense,
    Text,
    Bytes,
    Int,
    Float,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::SparseVector(_) => ValueKind::SparseVector,
            Value::Dense(_) => ValueKind::Dense,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The sparse vector inside this value, if it holds one.
    pub fn as_sparse_vector(&self) -> Option<&SparseVector> {
        match self {
            Value::SparseVector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn into_sparse_vector(self) -> Option<SparseVector> {
        match self {
            Value::SparseVector(vector) => Some(vector),
            _ => None,
        }
    }
}

impl From<SparseVector> for Value {
    fn from(vector: SparseVector) -> Self {
        Value::SparseVector(vector)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
