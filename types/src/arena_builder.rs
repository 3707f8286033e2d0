use crate::ir::builder::{dedup_members, normalize_union};
use crate::ir::{Primitive, TyData, TypeBuilder, TypeKind};
use alloc::vec::Vec;
use bumpalo::Bump;

/// Builder that uses arena allocation.
///
/// Types are allocated in a `Bump` arena. There is no deduplication, just
/// allocation; handles are `Copy` and live as long as the arena.
///
/// # Example
///
/// ```
/// use heritage_types::{TypeBuilder, ArenaBuilder, Primitive, TypeKind};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let num = TypeKind::Primitive(Primitive::Number).intern(builder);
/// let obj = builder.object([("n", num)]);
/// assert!(obj.is_object(builder));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Bump doesn't implement PartialEq/Eq/Hash: two builders are equal if they
// point to the same arena.
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TypeBuilder for ArenaBuilder<'arena> {
    type TypeView = crate::Ty<Self>;
    type InternedTy = &'arena TyData<Self>;
    type InternedStr = &'arena str;
    type InternedTypes = &'arena [crate::Ty<Self>];
    type InternedMembers = &'arena [(&'arena str, crate::Ty<Self>)];

    // ========================================================================
    // High-level type constructors
    // ========================================================================

    fn type_param(self, index: u16) -> Self::TypeView {
        TypeKind::TypeParam(index).intern(self)
    }

    fn primitive(self, primitive: Primitive) -> Self::TypeView {
        TypeKind::Primitive(primitive).intern(self)
    }

    fn array(self, elem: Self::TypeView) -> Self::TypeView {
        TypeKind::Array(elem).intern(self)
    }

    fn function(
        self,
        params: impl IntoIterator<Item = Self::TypeView>,
        ret: Self::TypeView,
    ) -> Self::TypeView {
        TypeKind::Function {
            params: self.intern_types(params),
            ret,
        }
        .intern(self)
    }

    fn object(
        self,
        members: impl IntoIterator<Item = (impl AsRef<str>, Self::TypeView)>,
    ) -> Self::TypeView {
        TypeKind::Object(self.intern_members(dedup_members(members))).intern(self)
    }

    fn union(self, alternatives: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView {
        let alternatives = normalize_union(self, alternatives);
        match alternatives.len() {
            0 => self.primitive(Primitive::Never),
            1 => alternatives[0],
            _ => TypeKind::Union(self.intern_types(alternatives)).intern(self),
        }
    }

    fn intersection(self, parts: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView {
        TypeKind::Intersection(self.intern_types(parts)).intern(self)
    }

    // ========================================================================
    // Low-level internals
    // ========================================================================

    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy {
        let flags = kind.compute_flags(self);
        self.arena.alloc(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        self.arena.alloc_slice_copy(&types)
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }

    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, crate::Ty<Self>)>,
    ) -> Self::InternedMembers {
        let members: Vec<(&'arena str, crate::Ty<Self>)> = data
            .into_iter()
            .map(|(name, ty)| {
                let interned_name: &'arena str = self.arena.alloc_str(name.as_ref());
                (interned_name, ty)
            })
            .collect();

        self.arena.alloc_slice_copy(&members)
    }

    fn members_data(
        self,
        members: &Self::InternedMembers,
    ) -> &[(Self::InternedStr, crate::Ty<Self>)] {
        members
    }
}
