use std::hash::{Hash, Hasher};
use std::mem;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by checked constructors when a node's required shape
/// is violated. The builder refuses to produce the node rather than
/// yield a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("qualified identifier must contain at least one segment")]
    EmptyQualifiedIdentifier,
    #[error("compound expression must contain at least one expression")]
    EmptyCompound,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// A dotted path of identifiers, e.g. `a.b.c`. Never empty.
///
/// A single-segment path is still a path: it is not interchangeable
/// with a bare [`Identifier`] and never compares equal to one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedIdentifier {
    pub ids: Vec<Identifier>,
}

impl QualifiedIdentifier {
    pub fn new(ids: Vec<Identifier>) -> Result<Self, ShapeError> {
        if ids.is_empty() {
            return Err(ShapeError::EmptyQualifiedIdentifier);
        }
        Ok(Self { ids })
    }
}

/// A type-variable name. Separate namespace from value identifiers, so
/// a separate node kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericIdentifier {
    pub name: String,
}

impl GenericIdentifier {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
}

impl Operator {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

/// A typed constant. One case per primitive kind; there is no variant
/// that can hold two different kinds and no implicit coercion between
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Literal {
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

// Float cases compare and hash by bit pattern. Equality over literal
// nodes must stay reflexive (a NaN literal equals itself) and Hash must
// agree with Eq, neither of which IEEE `==` provides.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            (Literal::Integer(a), Literal::Integer(b)) => a == b,
            (Literal::Long(a), Literal::Long(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
            (Literal::Double(a), Literal::Double(b)) => a.to_bits() == b.to_bits(),
            (Literal::String(a), Literal::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Literal::Boolean(value) => value.hash(state),
            Literal::Integer(value) => value.hash(state),
            Literal::Long(value) => value.hash(state),
            Literal::Float(value) => value.to_bits().hash(state),
            Literal::Double(value) => value.to_bits().hash(state),
            Literal::String(value) => value.hash(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordPart {
    pub id: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantPart {
    pub id: Identifier,
    pub ty: Type,
}

/// One match arm. Whether `params` agrees with the constructor's
/// payload arity is a downstream checker's question; the tree records
/// what was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPart {
    pub id: Identifier,
    pub params: Vec<Identifier>,
    pub guard: Option<Expression>,
    pub body: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordTypePart {
    pub name: Identifier,
    pub ty: Type,
}

/// The computation tree. A closed sum: consumers dispatch exhaustively,
/// and adding a variant breaks every non-wildcard `match` at compile
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Dot(DotExpression),
    Unary(UnaryExpression),
    Application(ApplicationExpression),
    Operator(OperatorExpression),
    If(IfExpression),
    Lambda(LambdaExpression),
    /// An explicit hole: an intentionally incomplete expression with no
    /// payload. Its interpretation belongs to later phases.
    Partial,
    LetRec(LetRecExpression),
    Let(LetExpression),
    Def(DefExpression),
    Record(RecordExpression),
    Compound(CompoundExpression),
    Inline(InlineExpression),
    Variant(VariantExpression),
    Match(MatchExpression),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DotExpression {
    pub lhs: Box<Expression>,
    pub rhs: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub op: Operator,
    pub expression: Box<Expression>,
}

/// Function application. Multi-argument calls are curried chains of
/// this node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationExpression {
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// Infix operator application. Precedence and associativity are the
/// parser's concern; the tree only records the nesting it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorExpression {
    pub lhs: Box<Expression>,
    pub op: Operator,
    pub rhs: Box<Expression>,
}

/// Both branches are required: there is no statement-`if`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IfExpression {
    pub cond: Box<Expression>,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// Single-parameter anonymous function; multi-argument functions are
/// curried chains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LambdaExpression {
    pub id: Identifier,
    pub body: Box<Expression>,
}

/// Recursive binding: `id` is visible inside `lhs` (its own definition)
/// as well as in the body `rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetRecExpression {
    pub id: Identifier,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// Non-recursive binding: `id` is visible only in the body `rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetExpression {
    pub id: Identifier,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// A third binding form with the same shape as `Let`/`LetRec`. Its
/// scoping rules (recursive or not) are left to the consuming phase;
/// nothing in this layer assumes either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefExpression {
    pub id: Identifier,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// Record construction from an ordered field list. Duplicate field ids
/// are representable here and rejected by the well-formedness pass, not
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordExpression {
    pub parts: Vec<RecordPart>,
}

/// An ordered sequence of expressions; the value of the whole is the
/// value of the last element. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundExpression {
    pub expressions: Vec<Expression>,
}

impl CompoundExpression {
    pub fn new(expressions: Vec<Expression>) -> Result<Self, ShapeError> {
        if expressions.is_empty() {
            return Err(ShapeError::EmptyCompound);
        }
        Ok(Self { expressions })
    }
}

/// Embedded foreign source text tagged by a dialect identifier. Opaque
/// here; only a code generator interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineExpression {
    pub id: Identifier,
    pub text: String,
}

/// A local algebraic type scoped over `expression`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantExpression {
    pub id: Identifier,
    pub parts: Vec<VariantPart>,
    pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchExpression {
    pub expression: Box<Expression>,
    pub parts: Vec<MatchPart>,
}

impl MatchExpression {
    /// Trial the arms in order for a discriminant carrying
    /// `constructor`: the first arm whose id matches and whose guard
    /// (if any) holds is selected; a failed guard falls through to the
    /// next arm.
    ///
    /// Guard truth requires evaluation, which this layer does not do,
    /// so it is delegated to the caller.
    pub fn select_arm<F>(&self, constructor: &Identifier, mut guard_holds: F) -> Option<&MatchPart>
    where
        F: FnMut(&Expression) -> bool,
    {
        self.parts.iter().find(|part| {
            part.id == *constructor
                && part
                    .guard
                    .as_ref()
                    .map_or(true, |guard| guard_holds(guard))
        })
    }
}

/// The type algebra. Closed sum; same dispatch contract as
/// [`Expression`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Identifier(IdentifierType),
    Generic(GenericType),
    Tuple(TupleType),
    Function(FunctionType),
    Record(RecordType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentifierType {
    pub id: QualifiedIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericType {
    pub id: GenericIdentifier,
}

/// A binary pair type. n-ary tuples are nested pairs; which way they
/// nest is the parser's decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleType {
    pub lhs: Box<Type>,
    pub rhs: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    pub lhs: Box<Type>,
    pub rhs: Box<Type>,
}

/// Duplicate field names are representable and left to the
/// well-formedness pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordType {
    pub parts: Vec<RecordTypePart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Declaration {
    Def(DefDeclaration),
    Variant(VariantDeclaration),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefDeclaration {
    pub name: Identifier,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantDeclaration {
    pub name: Identifier,
    pub parts: Vec<VariantPart>,
}

/// A compilation unit: an ordered sequence of declarations. Order is
/// load order and must survive traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    pub declarations: Vec<Declaration>,
}

impl Module {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}
