//! Validation of the base type named in an interface's `extends` clause.
//!
//! Nominal extension merges the base's members into the extending
//! interface at declaration time, so the base must have one fixed,
//! statically known member set. Object types have one. Intersections of
//! such types have the combined set of their parts. Unions do not: the
//! members available differ per alternative. Primitives and the remaining
//! kinds have no member set at all.

use heritage_types::{TypeBuilder, TypeFormatter, TypeKind, TypeView};
use thiserror::Error;
use tracing::{debug, trace};

use crate::Vec;

/// Why a base type was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RuleViolation {
    #[error(
        "An interface can only extend an object type or intersection of object types with statically known members"
    )]
    NotAnObjectOrIntersectionOfObjects,
}

/// Shape of the type that broke the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffendingKind {
    Union,
    Primitive,
    TypeParam,
    Array,
    Function,
    /// An intersection with no parts.
    EmptyIntersection,
}

impl OffendingKind {
    pub fn name(&self) -> &'static str {
        match self {
            OffendingKind::Union => "union type",
            OffendingKind::Primitive => "primitive type",
            OffendingKind::TypeParam => "type parameter",
            OffendingKind::Array => "array type",
            OffendingKind::Function => "function type",
            OffendingKind::EmptyIntersection => "empty intersection",
        }
    }
}

impl core::fmt::Display for OffendingKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rejected base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection<B: TypeBuilder> {
    pub reason: RuleViolation,

    /// The first type that broke the rule. For an empty intersection this
    /// is the intersection itself.
    pub offending: B::TypeView,

    pub kind: OffendingKind,

    /// Intersection part indices leading from the candidate to `offending`.
    /// Empty when the candidate itself is at fault.
    pub path: Vec<usize>,
}

impl<B: TypeBuilder> Rejection<B> {
    fn new(offending: B::TypeView, kind: OffendingKind) -> Self {
        Self {
            reason: RuleViolation::NotAnObjectOrIntersectionOfObjects,
            offending,
            kind,
            path: Vec::new(),
        }
    }
}

/// Outcome of validating an extends-clause base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<B: TypeBuilder> {
    Accepted,
    Rejected(Rejection<B>),
}

impl<B: TypeBuilder> Verdict<B> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    pub fn rejection(&self) -> Option<&Rejection<B>> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }

    pub fn into_result(self) -> Result<(), Rejection<B>> {
        match self {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(rejection) => Err(rejection),
        }
    }
}

impl<B: TypeBuilder> From<Result<(), Rejection<B>>> for Verdict<B> {
    fn from(result: Result<(), Rejection<B>>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }
}

/// Decides whether a resolved type may be named in an `extends` clause.
///
/// Stateless: the validator only carries the builder needed to look into
/// types, and never modifies them.
///
/// # Example
///
/// ```
/// use heritage_core::ExtendsClauseValidator;
/// use heritage_core::types::{BoxBuilder, TypeBuilder};
///
/// let builder = BoxBuilder::new();
/// let validator = ExtendsClauseValidator::new(builder);
///
/// // type A = string | number;
/// let a = builder.union([builder.string(), builder.number()]);
/// assert!(validator.validate(a).is_rejected());
///
/// let b = builder.object([("a", builder.string())]);
/// assert!(validator.validate(b).is_accepted());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExtendsClauseValidator<B: TypeBuilder> {
    builder: B,
}

impl<B: TypeBuilder> ExtendsClauseValidator<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn validate(&self, candidate: B::TypeView) -> Verdict<B> {
        let verdict = Verdict::from(self.check(&candidate));
        debug!(
            candidate = %TypeFormatter::format(candidate.clone(), self.builder),
            accepted = verdict.is_accepted(),
            "Validated extends base"
        );
        verdict
    }

    fn check(&self, candidate: &B::TypeView) -> Result<(), Rejection<B>> {
        match candidate.view(self.builder) {
            TypeKind::Object(_) => Ok(()),

            TypeKind::Intersection(parts) => {
                let parts = self.builder.types_data(parts);
                if parts.is_empty() {
                    return Err(Rejection::new(
                        candidate.clone(),
                        OffendingKind::EmptyIntersection,
                    ));
                }
                for (index, part) in parts.iter().enumerate() {
                    trace!(
                        index,
                        part = %TypeFormatter::format(part.clone(), self.builder),
                        "Checking intersection part"
                    );
                    self.check(part).map_err(|mut rejection| {
                        rejection.path.insert(0, index);
                        rejection
                    })?;
                }
                Ok(())
            }

            TypeKind::Union(_) => Err(Rejection::new(candidate.clone(), OffendingKind::Union)),
            TypeKind::Primitive(_) => {
                Err(Rejection::new(candidate.clone(), OffendingKind::Primitive))
            }
            TypeKind::TypeParam(_) => {
                Err(Rejection::new(candidate.clone(), OffendingKind::TypeParam))
            }
            TypeKind::Array(_) => Err(Rejection::new(candidate.clone(), OffendingKind::Array)),
            TypeKind::Function { .. } => {
                Err(Rejection::new(candidate.clone(), OffendingKind::Function))
            }
        }
    }
}

/// Validate `candidate` with a one-off [`ExtendsClauseValidator`].
pub fn validate_extends<B: TypeBuilder>(builder: B, candidate: B::TypeView) -> Verdict<B> {
    ExtendsClauseValidator::new(builder).validate(candidate)
}
