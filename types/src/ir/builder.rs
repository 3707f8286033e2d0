//! TypeBuilder trait - unified type construction and storage abstraction.
//!
//! This trait combines:
//! - High-level type constructors (string(), object(), union(), etc.)
//! - Low-level storage management (interning)
//! - Pluggable storage strategies (arena, RC, etc.)

use crate::{Primitive, TyData, TypeKind, TypeView, types_equal};
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over type construction and storage.
///
/// This trait allows different implementations to choose how types
/// are built and stored in memory (arena, box, etc.) while keeping the
/// checking logic generic.
///
/// # Design
///
/// The builder pattern separates:
/// - **What a type is** (`TypeKind<B>`) - the logical structure
/// - **How types are stored** (`B::InternedTy`) - the representation
/// - **How to construct types** (`B::string()`, `B::union()`, etc.) - the API
///
/// The high-level constructors are where alias/union normalization lives:
/// `union` flattens, de-duplicates and collapses singleton unions, so the
/// types handed to a checker are already in canonical shape. Interning a
/// `TypeKind` directly skips all of that.
///
/// # Requirements
///
/// Builders must be `Copy` so they can be passed around cheaply.
///
/// # Example
///
/// ```
/// use heritage_types::{TypeBuilder, BoxBuilder, TyDisplay};
///
/// let builder = BoxBuilder::new();
/// let point = builder.object([("x", builder.number()), ("y", builder.number())]);
/// assert_eq!(point.display(builder), "{ x: number; y: number }");
/// ```
pub trait TypeBuilder: Copy + Clone + Debug + Eq {
    /// The type handle returned by this builder.
    ///
    /// This is what users interact with - it implements `TypeView`.
    type TypeView: crate::TypeView<Self> + Clone + Debug + Eq + Hash;

    /// The internal interned representation of a type.
    ///
    /// This is opaque to generic code - could be:
    /// - `&'arena TyData<B>` (arena)
    /// - `Rc<TyData<B>>` (box/rc)
    type InternedTy: Clone + Debug + Eq + Hash;

    /// The interned representation of a string (member names).
    type InternedStr: Clone + Debug + Eq + Hash + AsRef<str> + core::fmt::Display;

    /// Interned list of types (function parameters, union alternatives,
    /// intersection parts).
    type InternedTypes: Clone + Debug + Eq + Hash;

    /// Interned list of object members (name + type pairs).
    ///
    /// Members keep declaration order.
    type InternedMembers: Clone + Debug + Eq + Hash;

    // ========================================================================
    // High-level type constructors (ergonomic API)
    // ========================================================================

    /// Construct a generic type parameter.
    fn type_param(self, index: u16) -> Self::TypeView;

    /// Construct a primitive type.
    fn primitive(self, primitive: Primitive) -> Self::TypeView;

    fn string(self) -> Self::TypeView {
        self.primitive(Primitive::String)
    }

    fn number(self) -> Self::TypeView {
        self.primitive(Primitive::Number)
    }

    fn boolean(self) -> Self::TypeView {
        self.primitive(Primitive::Boolean)
    }

    /// Construct an Array type with the given element type.
    fn array(self, elem: Self::TypeView) -> Self::TypeView;

    /// Construct a Function type with parameters and return type.
    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView;

    /// Construct an Object type with the given members.
    ///
    /// Declaration order is kept. A repeated name overwrites the earlier
    /// member's type and keeps the earlier position.
    fn object(
        self,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView;

    /// Construct the empty object type `{}`.
    fn empty_object(self) -> Self::TypeView {
        self.object(core::iter::empty::<(&str, Self::TypeView)>())
    }

    /// Construct a normalized union.
    ///
    /// Nested unions are flattened and structurally equal alternatives are
    /// dropped (first occurrence wins). One surviving alternative is returned
    /// as itself; none yields `never`.
    fn union(self, alternatives: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView;

    /// Construct an intersection. Parts are kept exactly as given.
    fn intersection(self, parts: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView;

    // ========================================================================
    // Low-level internals (implementation details)
    // ========================================================================

    /// Intern a type kind, returning a handle.
    ///
    /// The implementation is responsible for:
    /// 1. Computing the type flags via `kind.compute_flags(self)`
    /// 2. Wrapping the kind in TyData { kind, flags }
    /// 3. Storing the TyData and returning a handle
    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy;

    /// Retrieve the type data (kind + flags) for an interned type.
    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self>;

    /// Intern a list of types.
    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<Self::TypeView>;

    /// Retrieve the interned type list.
    fn types_data(self, types: &Self::InternedTypes) -> &[Self::TypeView];

    /// Intern a list of object members (name + type pairs).
    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::InternedMembers;

    /// Retrieve the interned member list.
    fn members_data(
        self,
        members: &Self::InternedMembers,
    ) -> &[(Self::InternedStr, Self::TypeView)];
}

/// Flatten and de-duplicate union alternatives.
///
/// Shared by the concrete builders' `union` constructors.
pub(crate) fn normalize_union<B: TypeBuilder>(
    builder: B,
    alternatives: impl IntoIterator<Item = B::TypeView>,
) -> Vec<B::TypeView> {
    let mut out: Vec<B::TypeView> = Vec::new();
    for alt in alternatives {
        push_alternative(builder, &mut out, alt);
    }
    out
}

fn push_alternative<B: TypeBuilder>(builder: B, out: &mut Vec<B::TypeView>, alt: B::TypeView) {
    if let TypeKind::Union(nested) = alt.view(builder) {
        for inner in builder.types_data(nested) {
            push_alternative(builder, out, inner.clone());
        }
        return;
    }
    let seen = out
        .iter()
        .any(|existing| types_equal(existing.clone(), builder, alt.clone(), builder));
    if !seen {
        out.push(alt);
    }
}

/// Collapse repeated member names, keeping the first position and the last type.
pub(crate) fn dedup_members<S: AsRef<str>, T>(
    members: impl IntoIterator<Item = (S, T)>,
) -> Vec<(S, T)> {
    let mut out: Vec<(S, T)> = Vec::new();
    for (name, ty) in members {
        match out.iter_mut().find(|(n, _)| n.as_ref() == name.as_ref()) {
            Some(slot) => slot.1 = ty,
            None => out.push((name, ty)),
        }
    }
    out
}
