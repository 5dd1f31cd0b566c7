use anyhow::Result;

/// Fallible construction from a table index
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Fallible conversion into a table index
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}
