use super::*;
use crate::span::Span;
use crate::test_utils::init_test_logging;
use crate::{String, ToString, Vec, vec};
use bumpalo::Bump;
use heritage_types::{ArenaBuilder, BoxBuilder, Primitive, TyDisplay, TypeBuilder};
use pretty_assertions::assert_eq;

fn clause<B: TypeBuilder>(ty: B::TypeView, span: core::ops::Range<usize>) -> HeritageClause<B> {
    HeritageClause {
        ty,
        span: Span(span),
    }
}

fn member<B: TypeBuilder>(
    name: &str,
    ty: B::TypeView,
    span: core::ops::Range<usize>,
) -> MemberDecl<B> {
    MemberDecl {
        name: name.to_string(),
        ty,
        span: Span(span),
    }
}

fn member_names<B: TypeBuilder>(checked: &CheckedInterface<B>) -> Vec<String> {
    checked.members.iter().map(|m| m.name.clone()).collect()
}

// ============================================================================
// Heritage clauses
// ============================================================================

#[test]
fn test_str_or_num_is_rejected() {
    init_test_logging();
    let builder = BoxBuilder::new();

    // type A = string | number;
    // interface StrOrNum extends A { a: string; }
    let a = builder.union([builder.string(), builder.number()]);
    let decl = InterfaceDecl {
        name: "StrOrNum".to_string(),
        span: Span(26..78),
        extends: vec![clause(a, 53..54)],
        members: vec![member("a", builder.string(), 59..69)],
    };

    let errors = check_interface(builder, &decl).expect_err("union base must be rejected");
    assert_eq!(errors.len(), 1);

    let diagnostic = errors[0].to_diagnostic();
    assert_eq!(
        diagnostic.message,
        "An interface can only extend an object type or intersection of object types with statically known members"
    );
    assert_eq!(diagnostic.span, Span(53..54));
    assert_eq!(diagnostic.code.as_deref(), Some("E001"));
    assert!(!has_valid_bases(builder, &decl));
}

#[test]
fn test_every_bad_clause_is_reported() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "I".to_string(),
        span: Span(0..40),
        extends: vec![
            clause(builder.number(), 14..20),
            clause(builder.object([("ok", builder.boolean())]), 22..24),
            clause(builder.type_param(0), 26..27),
        ],
        members: vec![],
    };

    let errors = check_interface(builder, &decl).expect_err("two bases are illegal");
    let spans: Vec<Span> = errors.iter().map(|e| e.kind.span()).collect();
    assert_eq!(spans, vec![Span(14..20), Span(26..27)]);
    assert!(errors.iter().all(|e| e.interface == "I"));
}

#[test]
fn test_rejection_reports_offending_part() {
    let builder = BoxBuilder::new();
    let base = builder.intersection([
        builder.object([("a", builder.string())]),
        builder.union([builder.string(), builder.number()]),
    ]);
    let decl = InterfaceDecl {
        name: "I".to_string(),
        span: Span(0..30),
        extends: vec![clause(base, 20..21)],
        members: vec![],
    };

    let errors = check_interface(builder, &decl).expect_err("union part is illegal");
    match &errors[0].kind {
        CheckErrorKind::InvalidExtendsBase {
            base,
            offending,
            offending_kind,
            path,
            ..
        } => {
            assert_eq!(base, "{ a: string } & (string | number)");
            assert_eq!(offending, "string | number");
            assert_eq!(*offending_kind, OffendingKind::Union);
            assert_eq!(path, &vec![1]);
        }
        other => panic!("Expected InvalidExtendsBase, got {:?}", other),
    }
}

#[test]
fn test_help_names_each_kind_of_memberless_base() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "I".to_string(),
        span: Span(0..60),
        extends: vec![
            clause(builder.intersection(std::iter::empty()), 10..20),
            clause(builder.array(builder.string()), 22..30),
            clause(builder.function(std::iter::empty(), builder.string()), 32..44),
        ],
        members: vec![],
    };

    let errors = check_interface(builder, &decl).expect_err("no base is legal");
    let help: Vec<_> = errors
        .iter()
        .map(|e| e.to_diagnostic().help.unwrap_or_default())
        .collect();
    assert_eq!(
        help,
        vec![
            "'(empty intersection)' is an intersection with no parts",
            "'string[]' is an array type which has no members",
            "'() => string' is a function type which has no members",
        ]
    );
}

// ============================================================================
// Member merging
// ============================================================================

#[test]
fn test_inherits_object_members() {
    let builder = BoxBuilder::new();
    let base = builder.object([("id", builder.number())]);
    let decl = InterfaceDecl {
        name: "Named".to_string(),
        span: Span(0..50),
        extends: vec![clause(base, 20..24)],
        members: vec![member("name", builder.string(), 27..40)],
    };

    let checked = check_interface(builder, &decl).expect("object base is legal");
    assert_eq!(checked.name, "Named");
    assert_eq!(member_names(&checked), vec!["id", "name"]);
    assert_eq!(
        checked.as_object(builder).display(builder),
        "{ id: number; name: string }"
    );
}

#[test]
fn test_inherits_intersection_members() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let base = builder.intersection([
        builder.object([("a", builder.string())]),
        builder.object([("b", builder.number())]),
    ]);
    let decl = InterfaceDecl {
        name: "AB".to_string(),
        span: Span(0..50),
        extends: vec![clause(base, 16..17)],
        members: vec![member("c", builder.boolean(), 20..30)],
    };

    let checked = check_interface(builder, &decl).expect("intersection of objects is legal");
    assert_eq!(member_names(&checked), vec!["a", "b", "c"]);
}

#[test]
fn test_own_member_replaces_inherited_in_place() {
    let builder = BoxBuilder::new();
    let base = builder.object([("kind", builder.string()), ("size", builder.number())]);
    let decl = InterfaceDecl {
        name: "Circle".to_string(),
        span: Span(0..60),
        extends: vec![clause(base, 20..25)],
        members: vec![member("kind", builder.primitive(Primitive::Never), 28..40)],
    };

    let checked = check_interface(builder, &decl).expect("object base is legal");
    assert_eq!(member_names(&checked), vec!["kind", "size"]);
    let kind = checked.member("kind").expect("kind is inherited");
    assert!(kind.ty.is(Primitive::Never, builder));
}

#[test]
fn test_multiple_bases_merge_in_clause_order() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "Both".to_string(),
        span: Span(0..60),
        extends: vec![
            clause(builder.object([("x", builder.number())]), 19..20),
            clause(
                builder.object([("y", builder.number()), ("x", builder.string())]),
                22..23,
            ),
        ],
        members: vec![],
    };

    let checked = check_interface(builder, &decl).expect("both bases are legal");
    assert_eq!(member_names(&checked), vec!["x", "y"]);
    let x = checked.member("x").expect("x is inherited");
    assert!(x.ty.is(Primitive::String, builder));
    assert!(has_valid_bases(builder, &decl));
}

#[test]
fn test_no_extends_clause() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "Empty".to_string(),
        span: Span(0..18),
        extends: vec![],
        members: vec![],
    };

    let checked = check_interface(builder, &decl).expect("nothing to reject");
    assert!(checked.members.is_empty());
    assert_eq!(checked.as_object(builder).display(builder), "{}");
}

// ============================================================================
// Own members
// ============================================================================

#[test]
fn test_duplicate_own_member() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "Dup".to_string(),
        span: Span(0..50),
        extends: vec![],
        members: vec![
            member("a", builder.string(), 16..26),
            member("b", builder.string(), 27..37),
            member("a", builder.number(), 38..48),
        ],
    };

    let errors = check_interface(builder, &decl).expect_err("a is declared twice");
    assert_eq!(
        errors,
        vec![CheckError::new(
            CheckErrorKind::DuplicateMember {
                name: "a".to_string(),
                span: Span(38..48),
                first: Span(16..26),
            },
            "Dup".to_string(),
        )]
    );
}

#[test]
fn test_errors_are_collected_across_kinds() {
    let builder = BoxBuilder::new();
    let decl = InterfaceDecl {
        name: "Bad".to_string(),
        span: Span(0..60),
        extends: vec![clause(builder.boolean(), 22..29)],
        members: vec![
            member("a", builder.string(), 32..42),
            member("a", builder.string(), 43..53),
        ],
    };

    let errors = check_interface(builder, &decl).expect_err("two problems");
    let codes: Vec<&str> = errors.iter().map(|e| e.kind.code()).collect();
    assert_eq!(codes, vec!["E001", "E002"]);
}
