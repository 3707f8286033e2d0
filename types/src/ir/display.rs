use super::{Ty, TypeBuilder, TypeKind, TypeVisitor};
use crate::TypeView;
use alloc::string::String;
use core::fmt::Write;

/// Binding strength of the type being printed, loosest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Function,
    Union,
    Intersection,
    Postfix,
}

/// Visitor that formats types with TypeScript syntax.
///
/// Composite operands are parenthesized only where precedence requires it:
/// `(string | number)[]`, `{ a: string } & (string | number)`.
pub struct TypeFormatter<B: TypeBuilder> {
    output: String,
    builder: B,
    context: Prec,
}

impl<B: TypeBuilder> TypeFormatter<B> {
    pub fn new(builder: B) -> Self {
        Self {
            output: String::new(),
            builder,
            context: Prec::Function,
        }
    }

    pub fn format(ty: B::TypeView, builder: B) -> String {
        let mut formatter = Self::new(builder);
        formatter.visit(ty);
        formatter.output
    }

    fn operand(&mut self, ty: B::TypeView, context: Prec) {
        let saved = core::mem::replace(&mut self.context, context);
        self.visit(ty);
        self.context = saved;
    }

    fn list(&mut self, tys: &[B::TypeView], sep: &str, context: Prec) {
        for (i, ty) in tys.iter().enumerate() {
            if i > 0 {
                self.output.push_str(sep);
            }
            self.operand(ty.clone(), context);
        }
    }
}

impl<B: TypeBuilder> TypeVisitor<B> for TypeFormatter<B> {
    fn builder(&self) -> B {
        self.builder
    }

    fn visit(&mut self, ty: B::TypeView) {
        let builder = self.builder;
        let own = match ty.view(builder) {
            TypeKind::Function { .. } => Prec::Function,
            TypeKind::Union(_) => Prec::Union,
            TypeKind::Intersection(parts) if !builder.types_data(parts).is_empty() => {
                Prec::Intersection
            }
            _ => Prec::Postfix,
        };
        let parens = own < self.context;
        if parens {
            self.output.push('(');
        }

        match ty.view(builder) {
            TypeKind::TypeParam(index) => {
                let _ = write!(self.output, "T{}", index);
            }
            TypeKind::Primitive(p) => {
                self.output.push_str(p.keyword());
            }
            TypeKind::Array(elem) => {
                self.operand(elem.clone(), Prec::Postfix);
                self.output.push_str("[]");
            }
            TypeKind::Function { params, ret } => {
                self.output.push('(');
                for (i, param_ty) in builder.types_data(params).iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    let _ = write!(self.output, "arg{}: ", i);
                    self.operand(param_ty.clone(), Prec::Function);
                }
                self.output.push_str(") => ");
                self.operand(ret.clone(), Prec::Function);
            }
            TypeKind::Object(members) => {
                let members = builder.members_data(members);
                if members.is_empty() {
                    self.output.push_str("{}");
                } else {
                    self.output.push_str("{ ");
                    for (i, (name, member_ty)) in members.iter().enumerate() {
                        if i > 0 {
                            self.output.push_str("; ");
                        }
                        let _ = write!(self.output, "{}: ", name);
                        self.operand(member_ty.clone(), Prec::Function);
                    }
                    self.output.push_str(" }");
                }
            }
            TypeKind::Union(alternatives) => {
                self.list(builder.types_data(alternatives), " | ", Prec::Intersection);
            }
            TypeKind::Intersection(parts) => {
                let parts = builder.types_data(parts);
                if parts.is_empty() {
                    // No surface syntax for this.
                    self.output.push_str("(empty intersection)");
                } else {
                    self.list(parts, " & ", Prec::Postfix);
                }
            }
        }

        if parens {
            self.output.push(')');
        }
    }
}

/// Extension trait to add display methods to type handles.
///
/// Generic code holding a `B::TypeView` should call `TypeFormatter::format`.
pub trait TyDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder<TypeView = Ty<B>>> TyDisplay<B> for Ty<B> {
    fn display(&self, builder: B) -> String {
        TypeFormatter::format(self.clone(), builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxBuilder, Primitive, TypeKind};

    #[test]
    fn test_format_primitives() {
        let builder = BoxBuilder::new();
        assert_eq!(TypeFormatter::format(builder.string(), builder), "string");
        assert_eq!(
            TypeFormatter::format(builder.primitive(Primitive::Undefined), builder),
            "undefined"
        );
    }

    #[test]
    fn test_format_object() {
        let builder = BoxBuilder::new();
        let ty = builder.object([("a", builder.string()), ("b", builder.number())]);
        assert_eq!(ty.display(builder), "{ a: string; b: number }");
        assert_eq!(builder.empty_object().display(builder), "{}");
    }

    #[test]
    fn test_format_union_in_intersection() {
        let builder = BoxBuilder::new();
        let a = builder.object([("a", builder.string())]);
        let u = builder.union([builder.string(), builder.number()]);
        let ty = builder.intersection([a, u]);
        assert_eq!(ty.display(builder), "{ a: string } & (string | number)");
    }

    #[test]
    fn test_format_intersection_in_union() {
        let builder = BoxBuilder::new();
        let a = builder.object([("a", builder.string())]);
        let b = builder.object([("b", builder.number())]);
        let ty = builder.union([builder.intersection([a, b]), builder.boolean()]);
        assert_eq!(ty.display(builder), "{ a: string } & { b: number } | boolean");
    }

    #[test]
    fn test_format_array_of_union() {
        let builder = BoxBuilder::new();
        let ty = builder.array(builder.union([builder.string(), builder.number()]));
        assert_eq!(ty.display(builder), "(string | number)[]");
    }

    #[test]
    fn test_format_function() {
        let builder = BoxBuilder::new();
        let f = builder.function([builder.string(), builder.type_param(0)], builder.boolean());
        assert_eq!(f.display(builder), "(arg0: string, arg1: T0) => boolean");

        let u = builder.union([f, builder.primitive(Primitive::Null)]);
        assert_eq!(
            u.display(builder),
            "((arg0: string, arg1: T0) => boolean) | null"
        );
    }

    #[test]
    fn test_format_empty_intersection() {
        let builder = BoxBuilder::new();
        let parts = builder.intern_types(alloc::vec::Vec::<crate::Ty<BoxBuilder>>::new());
        let ty = TypeKind::Intersection(parts).intern(builder);
        assert_eq!(ty.display(builder), "(empty intersection)");
    }
}
