use crate::ir::builder::{dedup_members, normalize_union};
use crate::ir::{Primitive, TyData, TypeBuilder, TypeKind};
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Builder that uses reference counting (no deduplication).
///
/// Types are allocated with `Rc` and no interning is performed.
/// This is useful for:
/// - Testing (simpler than arena)
/// - Short-lived types handed over by a resolver
///
/// # Example
///
/// ```
/// use heritage_types::{TypeBuilder, BoxBuilder, Primitive, TypeKind};
///
/// let builder = BoxBuilder::new();
/// let str_ty = TypeKind::Primitive(Primitive::String).intern(builder);
/// let arr_ty = TypeKind::Array(str_ty).intern(builder);
/// assert!(!arr_ty.is_object(builder));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for BoxBuilder {
    type TypeView = crate::Ty<Self>;
    type InternedTy = Rc<TyData<Self>>;
    type InternedStr = Rc<str>;
    type InternedTypes = Rc<[crate::Ty<Self>]>;
    type InternedMembers = Rc<[(Rc<str>, crate::Ty<Self>)]>;

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
        let mut alternatives = normalize_union(self, alternatives);
        match alternatives.len() {
            0 => self.primitive(Primitive::Never),
            1 => alternatives.remove(0),
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
        Rc::new(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        types.into()
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }

    fn intern_members(
        self,
        data: impl IntoIterator<Item = (impl AsRef<str>, crate::Ty<Self>)>,
    ) -> Self::InternedMembers {
        let members: Vec<(Rc<str>, crate::Ty<Self>)> = data
            .into_iter()
            .map(|(name, ty)| (Rc::from(name.as_ref()), ty))
            .collect();
        members.into()
    }

    fn members_data(
        self,
        members: &Self::InternedMembers,
    ) -> &[(Self::InternedStr, crate::Ty<Self>)] {
        members.as_ref()
    }
}
