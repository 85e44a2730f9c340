mod ast;
mod diagnostics;
mod validate;
mod walk;

pub use crate::ast::{
    ApplicationExpression, CompoundExpression, Declaration, DefDeclaration, DefExpression,
    DotExpression, Expression, FunctionType, GenericIdentifier, GenericType, Identifier,
    IdentifierType, IfExpression, InlineExpression, LambdaExpression, LetExpression,
    LetRecExpression, Literal, MatchExpression, MatchPart, Module, Operator, OperatorExpression,
    QualifiedIdentifier, RecordExpression, RecordPart, RecordType, RecordTypePart, ShapeError,
    TupleType, Type, UnaryExpression, VariantDeclaration, VariantExpression, VariantPart,
};
pub use crate::diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use crate::validate::{validate_expression, validate_module, validate_type};
pub use crate::walk::{walk_expression, walk_module, walk_type};
