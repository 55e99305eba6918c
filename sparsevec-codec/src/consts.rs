/// Width of every field in the binary layout.
pub const WORD_SIZE: usize = 4;

/// `dim`, `nnz` and one reserved word.
pub const HEADER_SIZE: usize = 3 * WORD_SIZE;

/// Bytes per stored entry: one u32 index plus one f32 value.
pub const ENTRY_SIZE: usize = 2 * WORD_SIZE;

/// Written into the reserved header word, never checked on decode.
pub const RESERVED: u32 = 0;
