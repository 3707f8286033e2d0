//! Heritage - extends-clause checking for a structural type checker
//!
//! # Overview
//!
//! An interface can only extend an object type, or an intersection of
//! object types, with statically known members. This crate checks that
//! rule over resolved types and renders the resulting diagnostics.
//!
//! # Quick Start
//!
//! ```
//! use heritage::types::{BoxBuilder, TypeBuilder};
//! use heritage::{HeritageClause, InterfaceDecl, MemberDecl, Span, check_interface};
//!
//! let source = "type A = string | number;\ninterface StrOrNum extends A {\n  a: string;\n}\n";
//! let builder = BoxBuilder::new();
//!
//! // The resolver hands us `A` already expanded to its union.
//! let decl = InterfaceDecl {
//!     name: "StrOrNum".to_string(),
//!     span: Span::new(26, 71),
//!     extends: vec![HeritageClause {
//!         ty: builder.union([builder.string(), builder.number()]),
//!         span: Span::new(53, 54),
//!     }],
//!     members: vec![MemberDecl {
//!         name: "a".to_string(),
//!         ty: builder.string(),
//!         span: Span::new(59, 69),
//!     }],
//! };
//!
//! let errors = check_interface(builder, &decl).unwrap_err();
//! let rendered = heritage::render_check_errors_to_string_no_color(source, &errors);
//! assert!(rendered.contains("An interface can only extend an object type"));
//! ```

pub mod error_renderer;

pub use heritage_core::api::{Diagnostic, RelatedInfo};
pub use heritage_core::{
    CheckError, CheckErrorKind, CheckedInterface, ExtendsClauseValidator, HeritageClause,
    InterfaceDecl, Member, MemberDecl, OffendingKind, Rejection, RuleViolation, Span, Verdict,
    base_members, check_interface, has_valid_bases, validate_extends,
};
pub use heritage_types as types;

pub use error_renderer::{
    render_check_errors, render_check_errors_to_string_no_color, render_diagnostics,
    render_diagnostics_to, render_diagnostics_to_string, render_diagnostics_to_string_no_color,
};
