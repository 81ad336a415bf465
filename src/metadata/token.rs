//! Metadata tokens as reported by the runtime.
//!
//! A token packs the metadata table id into its high byte and the row index into the remaining
//! 24 bits. Method-table lists handed out by the runtime carry the token of the type definition
//! each method table was built from, so matching two tokens only ever compares the row part:
//! the table byte is masked away on both sides.

use std::fmt;

/// Mask selecting the row part of a token
pub const TOKEN_ROW_MASK: u32 = 0x00FF_FFFF;

/// A metadata token
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(pub u32);

impl Token {
    /// The nil token, carried by types that have no metadata row (arrays, pointers)
    pub const NIL: Token = Token(0);

    /// The all-ones token some runtimes report for types without a usable definition
    pub const INVALID: Token = Token(u32::MAX);

    /// Creates a new token from a raw 32-bit value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Returns the raw token value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the table type from the token (high byte)
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row index from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & TOKEN_ROW_MASK
    }

    /// Returns true if this is a null token (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the token can be used for an exact-match lookup
    ///
    /// Both the nil token and the all-ones token are unusable.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.is_null() && *self != Self::INVALID
    }

    /// Compares two tokens with the table byte masked off
    #[must_use]
    pub fn same_row(&self, other: Token) -> bool {
        self.row() == other.row()
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
