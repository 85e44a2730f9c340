//! Property-based tests over structural equality and the serde derives.
//!
//! Strategies generate bounded random expressions; float literals are
//! kept finite because JSON has no NaN or infinities, and serde_json's
//! `float_roundtrip` feature is enabled so finite doubles decode to the
//! exact value that was written. The NaN edge cases get their own
//! deterministic tests below.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use vel_compiler::{
    ApplicationExpression, DotExpression, Expression, Identifier, LambdaExpression, LetExpression,
    Literal, QualifiedIdentifier, RecordExpression, RecordPart,
};

fn arb_identifier() -> impl Strategy<Value = Identifier> {
    "[a-z][a-z0-9]{0,5}".prop_map(Identifier::new)
}

fn arb_literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        any::<bool>().prop_map(Literal::Boolean),
        any::<i32>().prop_map(Literal::Integer),
        any::<i64>().prop_map(Literal::Long),
        (-1.0e6f32..1.0e6).prop_map(Literal::Float),
        (-1.0e12f64..1.0e12).prop_map(Literal::Double),
        "[a-z ]{0,8}".prop_map(Literal::String),
    ]
}

fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        arb_identifier().prop_map(Expression::Identifier),
        arb_literal().prop_map(Expression::Literal),
        Just(Expression::Partial),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), arb_identifier()).prop_map(|(lhs, rhs)| {
                Expression::Dot(DotExpression {
                    lhs: Box::new(lhs),
                    rhs,
                })
            }),
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| {
                Expression::Application(ApplicationExpression {
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                })
            }),
            (arb_identifier(), inner.clone(), inner.clone()).prop_map(|(id, lhs, rhs)| {
                Expression::Let(LetExpression {
                    id,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                })
            }),
            (arb_identifier(), inner.clone()).prop_map(|(id, body)| {
                Expression::Lambda(LambdaExpression {
                    id,
                    body: Box::new(body),
                })
            }),
            proptest::collection::vec((arb_identifier(), inner), 1..4).prop_map(|fields| {
                Expression::Record(RecordExpression {
                    parts: fields
                        .into_iter()
                        .map(|(id, value)| RecordPart { id, value })
                        .collect(),
                })
            }),
        ]
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn equality_is_reflexive(expression in arb_expression()) {
        prop_assert_eq!(&expression, &expression);
    }

    #[test]
    fn clone_preserves_equality_and_hash(expression in arb_expression()) {
        let copy = expression.clone();
        prop_assert_eq!(&copy, &expression);
        prop_assert_eq!(hash_of(&copy), hash_of(&expression));
    }

    #[test]
    fn equality_is_symmetric(a in arb_expression(), b in arb_expression()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn distinct_literal_values_are_unequal(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        prop_assert_ne!(Literal::Integer(a), Literal::Integer(b));
    }

    #[test]
    fn serde_round_trip_preserves_equality(expression in arb_expression()) {
        let encoded = serde_json::to_string(&expression).unwrap();
        let decoded: Expression = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, expression);
    }
}

#[test]
fn double_literal_survives_json_exactly() {
    // A double whose shortest JSON form needs correctly rounded parsing
    // to come back bit-identical.
    let literal = Literal::Double(476628620186.72876);
    let encoded = serde_json::to_string(&literal).unwrap();
    let decoded: Literal = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, literal);
}

#[test]
fn nan_literal_equals_itself() {
    let literal = Literal::Double(f64::NAN);
    assert_eq!(literal, literal.clone());
    assert_eq!(hash_of(&literal), hash_of(&literal.clone()));
}

#[test]
fn literal_kinds_do_not_coerce() {
    assert_ne!(Literal::Integer(5), Literal::Long(5));
    assert_ne!(Literal::Float(1.0), Literal::Double(1.0));
    assert_ne!(Literal::Boolean(true), Literal::Integer(1));
}

#[test]
fn negative_zero_is_distinct_from_zero() {
    assert_ne!(Literal::Double(0.0), Literal::Double(-0.0));
}

#[test]
fn field_values_read_back_unchanged() {
    let identifier = Identifier::new("count");
    assert_eq!(identifier.name, "count");

    let path = QualifiedIdentifier::new(vec![
        Identifier::new("core"),
        Identifier::new("list"),
        Identifier::new("map"),
    ])
    .unwrap();
    let segments: Vec<&str> = path.ids.iter().map(|id| id.name.as_str()).collect();
    assert_eq!(segments, ["core", "list", "map"]);
}

#[test]
fn single_segment_path_is_its_own_node_kind() {
    // A one-segment qualified identifier and a bare identifier carry the
    // same text but are different node kinds; equality only exists
    // within a kind.
    let bare = Identifier::new("list");
    let path = QualifiedIdentifier::new(vec![bare.clone()]).unwrap();
    assert_eq!(path.ids.len(), 1);

    let other_path = QualifiedIdentifier::new(vec![Identifier::new("list")]).unwrap();
    assert_eq!(path, other_path);

    // Their structural encodings differ: one is a name, the other a
    // path holding one name.
    assert_ne!(
        serde_json::to_string(&bare).unwrap(),
        serde_json::to_string(&path).unwrap()
    );
}
