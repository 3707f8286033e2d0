//! Cross-builder structural comparison of types.

use super::{Ty, TyData, TypeBuilder, TypeKind};

/// Structurally compare two types from potentially different builders.
///
/// Object members are compared in order, so `{ a; b }` and `{ b; a }` are
/// different. Union alternatives and intersection parts are compared in
/// order as well.
///
/// Types whose cached flags differ are unequal without further traversal.
///
/// # Example
///
/// ```
/// use heritage_types::{types_equal, TypeBuilder, ArenaBuilder, BoxBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let arena_builder = ArenaBuilder::new(&arena);
/// let box_builder = BoxBuilder::new();
///
/// let t1 = arena_builder.array(arena_builder.string());
/// let t2 = box_builder.array(box_builder.string());
///
/// assert!(types_equal(t1, arena_builder, t2, box_builder));
/// ```
pub fn types_equal<I1: TypeBuilder, I2: TypeBuilder>(
    ty1: I1::TypeView,
    builder1: I1,
    ty2: I2::TypeView,
    builder2: I2,
) -> bool {
    let lists_equal = |l1: &[I1::TypeView], l2: &[I2::TypeView]| {
        l1.len() == l2.len()
            && l1
                .iter()
                .zip(l2.iter())
                .all(|(t1, t2)| types_equal(t1.clone(), builder1, t2.clone(), builder2))
    };

    if ty1.data(builder1).flags != ty2.data(builder2).flags {
        return false;
    }

    match (ty1.view(builder1), ty2.view(builder2)) {
        (TypeKind::TypeParam(i1), TypeKind::TypeParam(i2)) => i1 == i2,
        (TypeKind::Primitive(p1), TypeKind::Primitive(p2)) => p1 == p2,

        (TypeKind::Array(e1), TypeKind::Array(e2)) => {
            types_equal(e1.clone(), builder1, e2.clone(), builder2)
        }

        (
            TypeKind::Function {
                params: p1,
                ret: r1,
            },
            TypeKind::Function {
                params: p2,
                ret: r2,
            },
        ) => {
            lists_equal(builder1.types_data(p1), builder2.types_data(p2))
                && types_equal(r1.clone(), builder1, r2.clone(), builder2)
        }

        (TypeKind::Object(m1), TypeKind::Object(m2)) => {
            let data1 = builder1.members_data(m1);
            let data2 = builder2.members_data(m2);

            data1.len() == data2.len()
                && data1.iter().zip(data2.iter()).all(|((n1, t1), (n2, t2))| {
                    n1.as_ref() == n2.as_ref()
                        && types_equal(t1.clone(), builder1, t2.clone(), builder2)
                })
        }

        (TypeKind::Union(a1), TypeKind::Union(a2))
        | (TypeKind::Intersection(a1), TypeKind::Intersection(a2)) => {
            lists_equal(builder1.types_data(a1), builder2.types_data(a2))
        }

        _ => false,
    }
}

/// TypeView trait for viewing types uniformly across different builders.
///
/// This trait provides a common interface for accessing type structure
/// regardless of which TypeBuilder was used to create the type.
pub trait TypeView<B: TypeBuilder>: Sized + Clone {
    /// View the structure of this type.
    fn view(&self, builder: B) -> &TypeKind<B>;

    /// Get the full type data including flags.
    fn data(&self, builder: B) -> &TyData<B>;
}

impl<B: TypeBuilder> TypeView<B> for Ty<B> {
    fn view(&self, builder: B) -> &TypeKind<B> {
        self.kind(builder)
    }

    fn data(&self, builder: B) -> &TyData<B> {
        self.data(builder)
    }
}
