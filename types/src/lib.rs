//! Heritage type representation with pluggable type builders.
//!
//! This crate provides the resolved-type model consumed by the extends-clause
//! checker. The same representation works with different storage strategies
//! (arena, RC-based).
//!
//! # Example
//!
//! ```
//! use heritage_types::{TypeBuilder, ArenaBuilder, TyDisplay};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! // type A = string | number;
//! let a = builder.union([builder.string(), builder.number()]);
//! assert_eq!(a.display(builder), "string | number");
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - generic type system
pub mod ir;

// Concrete builder implementations
pub mod arena_builder;
pub mod box_builder;

pub use ir::{
    Primitive, Ty, TyData, TyDisplay, TypeBuilder, TypeFlags, TypeFormatter, TypeKind, TypeView,
    TypeVisitor, types_equal,
};

pub use arena_builder::ArenaBuilder;
pub use box_builder::BoxBuilder;
