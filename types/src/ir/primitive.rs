//! Primitive type variants.
//!
//! Primitive types are consolidated into a single enum rather than separate
//! `TypeKind` variants.

use core::fmt;

/// Primitive (member-less) types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Null,
    Undefined,
    Void,
    /// The empty type. An empty union normalizes to this.
    Never,
    Unknown,
    Any,
}

impl Primitive {
    /// Source keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::BigInt => "bigint",
            Primitive::Symbol => "symbol",
            Primitive::Null => "null",
            Primitive::Undefined => "undefined",
            Primitive::Void => "void",
            Primitive::Never => "never",
            Primitive::Unknown => "unknown",
            Primitive::Any => "any",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_keywords() {
        assert_eq!(Primitive::String.to_string(), "string");
        assert_eq!(Primitive::BigInt.to_string(), "bigint");
        assert_eq!(Primitive::Never.keyword(), "never");
    }
}
