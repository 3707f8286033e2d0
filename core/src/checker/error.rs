use alloc::string::ToString;

use super::extends::{OffendingKind, RuleViolation};
use crate::api::{Diagnostic, RelatedInfo};
use crate::span::Span;
use crate::{String, Vec, format};

/// Error found while checking an interface declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckError {
    pub kind: CheckErrorKind,
    /// Name of the interface being declared
    pub interface: String,
}

impl core::fmt::Display for CheckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

/// Specific kinds of check errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckErrorKind {
    /// The `extends` clause names a type without a static member set
    InvalidExtendsBase {
        /// The base as written (after alias expansion)
        base: String,
        /// The first part of `base` that broke the rule
        offending: String,
        offending_kind: OffendingKind,
        violation: RuleViolation,
        /// Intersection part indices from `base` to `offending`
        path: Vec<usize>,
        span: Span,
    },
    /// The same member name is declared twice in the interface body
    DuplicateMember { name: String, span: Span, first: Span },
}

impl CheckErrorKind {
    /// Get the span of the error
    pub fn span(&self) -> Span {
        match self {
            CheckErrorKind::InvalidExtendsBase { span, .. } => span.clone(),
            CheckErrorKind::DuplicateMember { span, .. } => span.clone(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CheckErrorKind::InvalidExtendsBase { .. } => "E001",
            CheckErrorKind::DuplicateMember { .. } => "E002",
        }
    }
}

impl CheckError {
    pub fn new(kind: CheckErrorKind, interface: String) -> Self {
        Self { kind, interface }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, help, related) = match &self.kind {
            CheckErrorKind::InvalidExtendsBase {
                base,
                offending,
                offending_kind,
                violation,
                path,
                ..
            } => {
                let subject = if path.is_empty() {
                    format!("'{}'", offending)
                } else {
                    format!(
                        "'{}' (part {} of '{}')",
                        offending,
                        path.iter()
                            .map(|i| i.to_string())
                            .collect::<Vec<_>>()
                            .join("."),
                        base
                    )
                };
                (
                    violation.to_string(),
                    Some(format!("{} is {}", subject, explain(*offending_kind))),
                    Vec::new(),
                )
            }
            CheckErrorKind::DuplicateMember { name, first, .. } => (
                format!(
                    "Duplicate member '{}' in interface '{}'",
                    name, self.interface
                ),
                Some("Each member of an interface must have a unique name".to_string()),
                crate::vec![RelatedInfo {
                    span: first.clone(),
                    message: format!("'{}' first declared here", name),
                }],
            ),
        };

        Diagnostic {
            message,
            span: self.kind.span(),
            related,
            help,
            code: Some(self.kind.code().to_string()),
        }
    }
}

fn explain(kind: OffendingKind) -> &'static str {
    match kind {
        OffendingKind::Union => "a union type whose members differ per alternative",
        OffendingKind::Primitive => "a primitive type which has no members",
        OffendingKind::TypeParam => "a type parameter whose members are not known statically",
        OffendingKind::Array => "an array type which has no members",
        OffendingKind::Function => "a function type which has no members",
        OffendingKind::EmptyIntersection => "an intersection with no parts",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec;
    use pretty_assertions::assert_eq;

    fn invalid_base(offending: &str, kind: OffendingKind, path: Vec<usize>) -> CheckError {
        CheckError::new(
            CheckErrorKind::InvalidExtendsBase {
                base: "{ a: string } & (string | number)".to_string(),
                offending: offending.to_string(),
                offending_kind: kind,
                violation: RuleViolation::NotAnObjectOrIntersectionOfObjects,
                path,
                span: Span(30..31),
            },
            "StrOrNum".to_string(),
        )
    }

    #[test]
    fn test_check_error_kind_span() {
        let error = invalid_base("string | number", OffendingKind::Union, vec![1]);
        assert_eq!(error.kind.span(), Span(30..31));
    }

    #[test]
    fn test_invalid_base_diagnostic() {
        let diagnostic =
            invalid_base("string | number", OffendingKind::Union, vec![]).to_diagnostic();

        assert_eq!(
            diagnostic.message,
            "An interface can only extend an object type or intersection of object types with statically known members"
        );
        assert_eq!(diagnostic.code, Some("E001".to_string()));
        assert_eq!(
            diagnostic.help,
            Some(
                "'string | number' is a union type whose members differ per alternative"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_invalid_base_help_names_part() {
        let diagnostic =
            invalid_base("string | number", OffendingKind::Union, vec![1]).to_diagnostic();
        assert_eq!(
            diagnostic.help.as_deref(),
            Some(
                "'string | number' (part 1 of '{ a: string } & (string | number)') is a union type whose members differ per alternative"
            )
        );
    }

    #[test]
    fn test_primitive_help() {
        let diagnostic = invalid_base("number", OffendingKind::Primitive, vec![]).to_diagnostic();
        assert_eq!(
            diagnostic.help.as_deref(),
            Some("'number' is a primitive type which has no members")
        );
    }

    #[test]
    fn test_array_help() {
        let diagnostic = invalid_base("string[]", OffendingKind::Array, vec![]).to_diagnostic();
        assert_eq!(
            diagnostic.help.as_deref(),
            Some("'string[]' is an array type which has no members")
        );
    }

    #[test]
    fn test_empty_intersection_help() {
        let diagnostic =
            invalid_base("(empty intersection)", OffendingKind::EmptyIntersection, vec![])
                .to_diagnostic();
        assert_eq!(
            diagnostic.help.as_deref(),
            Some("'(empty intersection)' is an intersection with no parts")
        );
    }

    #[test]
    fn test_type_param_help() {
        let diagnostic = invalid_base("T0", OffendingKind::TypeParam, vec![2]).to_diagnostic();
        assert_eq!(
            diagnostic.help.as_deref(),
            Some(
                "'T0' (part 2 of '{ a: string } & (string | number)') is a type parameter whose members are not known statically"
            )
        );
    }

    #[test]
    fn test_duplicate_member_diagnostic() {
        let error = CheckError::new(
            CheckErrorKind::DuplicateMember {
                name: "a".to_string(),
                span: Span(40..41),
                first: Span(30..31),
            },
            "I".to_string(),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.message, "Duplicate member 'a' in interface 'I'");
        assert_eq!(diagnostic.code, Some("E002".to_string()));
        assert_eq!(diagnostic.span, Span(40..41));
        assert_eq!(
            diagnostic.related,
            vec![RelatedInfo {
                span: Span(30..31),
                message: "'a' first declared here".to_string(),
            }]
        );
    }

    #[test]
    fn test_display_includes_code_and_help() {
        let error = invalid_base("number", OffendingKind::Primitive, vec![]);
        let rendered = error.to_string();
        assert!(rendered.starts_with("error: An interface can only extend"));
        assert!(rendered.contains(" [E001]"));
        assert!(rendered.contains("\nhelp: 'number' is a primitive type"));
    }
}
