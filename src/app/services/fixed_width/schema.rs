//! Field schema types for fixed-width record layouts
//!
//! A record layout is an ordered slice of [`FieldSpec`], typically a `const`
//! table next to the parser that owns it. Column positions are 0-based with
//! an exclusive end, converted once from the 1-based inclusive ranges the
//! format documentation uses.

/// Declared type of a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Raw text, padding preserved (trim at point of use).
    Character,
    Integer,
    Real,
}

/// One column of a fixed-width record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// First byte of the field, 0-based inclusive.
    pub start: usize,
    /// One past the last byte of the field.
    pub end: usize,
    pub kind: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: usize, end: usize, kind: FieldType) -> Self {
        Self {
            name,
            start,
            end,
            kind,
        }
    }
}
