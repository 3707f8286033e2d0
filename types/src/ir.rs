//! Intermediate Representation (IR) for resolved types.
//!
//! This module contains the generic, builder-agnostic representation of types.
//! The IR is parameterized by the `TypeBuilder` trait, which allows different
//! implementations to choose how types are built and stored in memory.
//!
//! ## Structure
//!
//! - **Core types**: `TypeKind`, `Ty` - the logical structure of types
//! - **TypeBuilder trait**: Abstract interface for type construction and storage
//! - **TypeView trait**: Unified view over types from different builders
//! - **Generic algorithms**: Visitor pattern, structural equality
//! - **Display**: TypeScript-style pretty-printing

pub mod builder;
pub mod display;
pub mod primitive;
pub mod ty;
pub mod view;
pub mod visit;

pub use builder::TypeBuilder;
pub use display::{TyDisplay, TypeFormatter};
pub use primitive::Primitive;
pub use ty::{Ty, TyData, TypeFlags, TypeKind};
pub use view::{TypeView, types_equal};
pub use visit::TypeVisitor;
