//! Member sets of legal extends-clause bases.

use heritage_types::{TypeBuilder, TypeKind, TypeView};

use super::extends::{ExtendsClauseValidator, Rejection};
use crate::{String, ToString, Vec};

/// A named member contributed to an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<B: TypeBuilder> {
    pub name: String,
    pub ty: B::TypeView,
}

/// Statically known members of a legal base type.
///
/// Objects contribute their members in declaration order; intersections
/// contribute their parts' members left to right. A name that appears in
/// several parts is listed once per occurrence: conflicting member types
/// are not diagnosed here.
///
/// Fails with the validator's rejection when `candidate` is not a legal base.
pub fn base_members<B: TypeBuilder>(
    builder: B,
    candidate: B::TypeView,
) -> Result<Vec<Member<B>>, Rejection<B>> {
    ExtendsClauseValidator::new(builder)
        .validate(candidate.clone())
        .into_result()?;

    let mut members = Vec::new();
    collect(builder, &candidate, &mut members);
    Ok(members)
}

fn collect<B: TypeBuilder>(builder: B, ty: &B::TypeView, out: &mut Vec<Member<B>>) {
    match ty.view(builder) {
        TypeKind::Object(members) => {
            out.extend(builder.members_data(members).iter().map(|(name, ty)| Member {
                name: name.as_ref().to_string(),
                ty: ty.clone(),
            }));
        }
        TypeKind::Intersection(parts) => {
            for part in builder.types_data(parts) {
                collect(builder, part, out);
            }
        }
        // Unreachable after validation.
        _ => {}
    }
}
