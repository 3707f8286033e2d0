use super::{Primitive, TypeBuilder};
use crate::TypeView;
use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating various properties of a type.
    ///
    /// These flags are computed once when a type is interned and cached,
    /// so comparisons can reject mismatched types without a traversal.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        /// A union appears somewhere inside this type (including itself).
        const HAS_UNION = 1;
        /// A generic type parameter appears somewhere inside this type.
        const HAS_TYPE_PARAM = 1 << 1;
    }
}

/// Data for a type: kind + cached flags.
///
/// The builder computes flags once during interning. Structurally equal
/// types always carry equal flags.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TyData<B: TypeBuilder> {
    /// The actual type structure
    pub kind: TypeKind<B>,

    /// Cached properties for efficient queries
    pub flags: TypeFlags,
}

/// Logical structure of a resolved type.
///
/// Aliases are already expanded by the time a type is built: `type A =
/// string | number` is represented directly as a `Union`.
///
/// Only `Object`, `Union`, `Intersection` and `Primitive` matter to the
/// extends-clause rule. `TypeParam`, `Array` and `Function` are the
/// remaining shapes a resolved type can take.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind<B: TypeBuilder> {
    /// Generic type parameter, identified by its binding index.
    TypeParam(u16),

    /// Primitive types (string, number, boolean, ...)
    Primitive(Primitive),

    /// Array type with element type
    Array(B::TypeView),

    /// Function type with parameters and return type.
    Function {
        params: B::InternedTypes,
        ret: B::TypeView,
    },

    /// Object type with named members.
    ///
    /// Members keep declaration order. Names are unique within an object.
    Object(B::InternedMembers),

    /// Union of alternatives.
    ///
    /// When built through `TypeBuilder::union` there are always at least two
    /// structurally distinct alternatives and none of them is itself a union.
    Union(B::InternedTypes),

    /// Intersection of parts, in source order.
    Intersection(B::InternedTypes),
}

impl<B: TypeBuilder> TypeKind<B> {
    /// Compute type flags for this type kind.
    ///
    /// This is called by the builder during type creation to build
    /// the TyData. Flags are cached to avoid repeated traversals.
    pub fn compute_flags(&self, builder: B) -> TypeFlags {
        match self {
            TypeKind::TypeParam(_) => TypeFlags::HAS_TYPE_PARAM,
            TypeKind::Primitive(_) => TypeFlags::empty(),

            TypeKind::Array(elem) => elem.data(builder).flags,

            TypeKind::Function { params, ret } => {
                let mut flags = ret.data(builder).flags;
                for param in builder.types_data(params) {
                    flags |= param.data(builder).flags;
                }
                flags
            }

            TypeKind::Object(members) => {
                let mut flags = TypeFlags::empty();
                for (_name, member_ty) in builder.members_data(members) {
                    flags |= member_ty.data(builder).flags;
                }
                flags
            }

            TypeKind::Union(alternatives) => {
                let mut flags = TypeFlags::HAS_UNION;
                for alt in builder.types_data(alternatives) {
                    flags |= alt.data(builder).flags;
                }
                flags
            }

            TypeKind::Intersection(parts) => {
                let mut flags = TypeFlags::empty();
                for part in builder.types_data(parts) {
                    flags |= part.data(builder).flags;
                }
                flags
            }
        }
    }

    /// Intern this type kind into a Ty handle.
    ///
    /// This bypasses any normalization the high-level constructors perform.
    pub fn intern(self, builder: B) -> Ty<B> {
        Ty::new(builder.intern_ty(self))
    }
}

/// Handle to an interned type.
///
/// This is a lightweight wrapper around the builder's representation.
/// It can be cloned and used to retrieve the full type data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ty<B: TypeBuilder> {
    interned: B::InternedTy,
}

// Implement Copy when InternedTy is Copy (e.g., for ArenaBuilder)
impl<B: TypeBuilder> Copy for Ty<B> where B::InternedTy: Copy {}

impl<B: TypeBuilder> Ty<B> {
    /// Create a new type from an interned handle.
    pub fn new(interned: B::InternedTy) -> Self {
        Self { interned }
    }

    /// Get the interned representation (for internal use).
    pub fn interned(&self) -> &B::InternedTy {
        &self.interned
    }

    /// Get the full type data (kind + flags) by looking up in the builder.
    pub fn data(&self, builder: B) -> &TyData<B> {
        builder.ty_data(&self.interned)
    }

    /// Get the type kind by looking up in the builder.
    pub fn kind(&self, builder: B) -> &TypeKind<B> {
        &self.data(builder).kind
    }

    pub fn flags(&self, builder: B) -> TypeFlags {
        self.data(builder).flags
    }

    pub fn is_type_param(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::TypeParam(_))
    }

    pub fn is_primitive(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Primitive(_))
    }

    pub fn is_object(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Object(_))
    }

    pub fn is_union(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Union(_))
    }

    pub fn is_intersection(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Intersection(_))
    }

    /// Check if this is the given primitive.
    pub fn is(&self, primitive: Primitive, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Primitive(p) if *p == primitive)
    }
}

impl<B: TypeBuilder> fmt::Debug for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({:?})", self.interned)
    }
}
