use super::{TypeBuilder, TypeKind};
use crate::TypeView;

/// Trait for visiting types.
///
/// Implement this trait to traverse types without mutation.
/// The default implementation handles recursion automatically.
///
/// # Example
///
/// ```
/// use heritage_types::{TypeBuilder, TypeKind, TypeView, TypeVisitor, BoxBuilder};
///
/// struct ObjectCounter {
///     builder: BoxBuilder,
///     count: usize,
/// }
///
/// impl TypeVisitor<BoxBuilder> for ObjectCounter {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn visit(&mut self, ty: <BoxBuilder as TypeBuilder>::TypeView) {
///         if matches!(ty.view(self.builder), TypeKind::Object(_)) {
///             self.count += 1;
///         }
///         self.super_visit(ty);
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let a = builder.object([("a", builder.string())]);
/// let b = builder.object([("b", builder.empty_object())]);
/// let both = builder.intersection([a, b]);
///
/// let mut counter = ObjectCounter { builder, count: 0 };
/// counter.visit(both);
/// assert_eq!(counter.count, 3);
/// ```
pub trait TypeVisitor<B: TypeBuilder> {
    /// The builder the visited types belong to.
    fn builder(&self) -> B;

    /// Visit a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_visit` to recurse into nested types.
    fn visit(&mut self, ty: B::TypeView) {
        self.super_visit(ty)
    }

    /// Default recursion into nested types.
    ///
    /// Override `visit` instead of this method.
    fn super_visit(&mut self, ty: B::TypeView) {
        let builder = self.builder();
        match ty.view(builder) {
            TypeKind::TypeParam(_) | TypeKind::Primitive(_) => {}

            TypeKind::Array(elem) => {
                self.visit(elem.clone());
            }

            TypeKind::Function { params, ret } => {
                for param_ty in builder.types_data(params) {
                    self.visit(param_ty.clone());
                }
                self.visit(ret.clone());
            }

            TypeKind::Object(members) => {
                for (_name, member_ty) in builder.members_data(members) {
                    self.visit(member_ty.clone());
                }
            }

            TypeKind::Union(tys) | TypeKind::Intersection(tys) => {
                for inner in builder.types_data(tys) {
                    self.visit(inner.clone());
                }
            }
        }
    }
}
