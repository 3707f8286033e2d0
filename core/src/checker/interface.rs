//! Checking of interface declarations.

use hashbrown::HashMap;
use heritage_types::{TypeBuilder, TypeFormatter};
use tracing::debug;

use super::error::{CheckError, CheckErrorKind};
use super::extends::Verdict;
use super::members::{Member, base_members};
use crate::span::Span;
use crate::{String, ToString, Vec};

/// One entry of an interface's `extends` list, already resolved.
#[derive(Debug, Clone)]
pub struct HeritageClause<B: TypeBuilder> {
    /// The base type after alias expansion.
    pub ty: B::TypeView,
    /// Where the base is named in source.
    pub span: Span,
}

/// A member declared in the interface body.
#[derive(Debug, Clone)]
pub struct MemberDecl<B: TypeBuilder> {
    pub name: String,
    pub ty: B::TypeView,
    pub span: Span,
}

/// A resolved `interface Name extends A, B { ... }` declaration.
#[derive(Debug, Clone)]
pub struct InterfaceDecl<B: TypeBuilder> {
    pub name: String,
    pub span: Span,
    pub extends: Vec<HeritageClause<B>>,
    pub members: Vec<MemberDecl<B>>,
}

/// An interface whose bases were all accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedInterface<B: TypeBuilder> {
    pub name: String,
    /// Inherited members first (in clause order), then own members. A later
    /// member with an existing name replaces that member's type in place.
    pub members: Vec<Member<B>>,
}

impl<B: TypeBuilder> CheckedInterface<B> {
    pub fn member(&self, name: &str) -> Option<&Member<B>> {
        self.members.iter().find(|m| m.name == name)
    }

    /// The interface's member set as an object type.
    pub fn as_object(&self, builder: B) -> B::TypeView {
        builder.object(self.members.iter().map(|m| (m.name.as_str(), m.ty.clone())))
    }
}

/// Check an interface declaration.
///
/// Every heritage clause is validated and every duplicated own member is
/// reported; errors are collected rather than stopping at the first one.
pub fn check_interface<B: TypeBuilder>(
    builder: B,
    decl: &InterfaceDecl<B>,
) -> Result<CheckedInterface<B>, Vec<CheckError>> {
    let mut errors = Vec::new();
    let mut merged = MemberSet::default();

    for clause in &decl.extends {
        match base_members(builder, clause.ty.clone()) {
            Ok(members) => {
                for member in members {
                    merged.insert(member);
                }
            }
            Err(rejection) => {
                debug!(
                    interface = %decl.name,
                    base = %TypeFormatter::format(clause.ty.clone(), builder),
                    "Rejected extends base"
                );
                errors.push(CheckError::new(
                    CheckErrorKind::InvalidExtendsBase {
                        base: TypeFormatter::format(clause.ty.clone(), builder),
                        offending: TypeFormatter::format(rejection.offending.clone(), builder),
                        offending_kind: rejection.kind,
                        violation: rejection.reason,
                        path: rejection.path,
                        span: clause.span.clone(),
                    },
                    decl.name.clone(),
                ));
            }
        }
    }

    let mut own: HashMap<&str, &Span> = HashMap::new();
    for member in &decl.members {
        if let Some(first) = own.get(member.name.as_str()) {
            errors.push(CheckError::new(
                CheckErrorKind::DuplicateMember {
                    name: member.name.clone(),
                    span: member.span.clone(),
                    first: (*first).clone(),
                },
                decl.name.clone(),
            ));
            continue;
        }
        own.insert(member.name.as_str(), &member.span);
        merged.insert(Member {
            name: member.name.clone(),
            ty: member.ty.clone(),
        });
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    debug!(
        interface = %decl.name,
        members = merged.members.len(),
        "Interface checked"
    );
    Ok(CheckedInterface {
        name: decl.name.clone(),
        members: merged.members,
    })
}

/// `true` when every heritage clause of `decl` names a legal base.
pub fn has_valid_bases<B: TypeBuilder>(builder: B, decl: &InterfaceDecl<B>) -> bool {
    decl.extends
        .iter()
        .map(|clause| super::extends::validate_extends(builder, clause.ty.clone()))
        .all(|verdict| matches!(verdict, Verdict::Accepted))
}

/// Ordered members with by-name replacement.
struct MemberSet<B: TypeBuilder> {
    members: Vec<Member<B>>,
    index: HashMap<String, usize>,
}

impl<B: TypeBuilder> Default for MemberSet<B> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<B: TypeBuilder> MemberSet<B> {
    fn insert(&mut self, member: Member<B>) {
        match self.index.get(member.name.as_str()) {
            Some(&slot) => self.members[slot].ty = member.ty,
            None => {
                self.index.insert(member.name.to_string(), self.members.len());
                self.members.push(member);
            }
        }
    }
}
