pub mod error;
pub mod extends;
pub mod interface;
pub mod members;

#[cfg(test)]
mod interface_test;

pub use error::{CheckError, CheckErrorKind};
pub use extends::{
    ExtendsClauseValidator, OffendingKind, Rejection, RuleViolation, Verdict, validate_extends,
};
pub use interface::{
    CheckedInterface, HeritageClause, InterfaceDecl, MemberDecl, check_interface, has_valid_bases,
};
pub use members::{Member, base_members};
