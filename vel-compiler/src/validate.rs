//! Well-formedness checks over a built tree.
//!
//! The tree itself stays permissive: a parser may build a record with
//! two fields of the same name, and this pass is where that gets
//! reported. Checks that need binding or type context (match-arm arity,
//! unbound identifiers, exhaustiveness) belong to later phases and are
//! deliberately not attempted here.

use std::collections::HashSet;

use crate::ast::{
    Declaration, Expression, MatchPart, Module, RecordPart, RecordTypePart, Type, VariantPart,
};
use crate::diagnostics::Diagnostics;
use crate::walk::{walk_expression, walk_type};

pub fn validate_module(module: &Module) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for declaration in &module.declarations {
        match declaration {
            Declaration::Def(def) => {
                check_expression(&def.expression, &mut diagnostics);
            }
            Declaration::Variant(variant) => {
                check_constructors(&variant.name.name, &variant.parts, &mut diagnostics);
                for part in &variant.parts {
                    check_type(&part.ty, &mut diagnostics);
                }
            }
        }
    }
    diagnostics
}

pub fn validate_expression(expression: &Expression) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    check_expression(expression, &mut diagnostics);
    diagnostics
}

pub fn validate_type(ty: &Type) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    check_type(ty, &mut diagnostics);
    diagnostics
}

fn check_expression(root: &Expression, diagnostics: &mut Diagnostics) {
    walk_expression(root, |expression| match expression {
        Expression::Record(record) => {
            check_record_fields(&record.parts, diagnostics);
        }
        Expression::Variant(variant) => {
            check_constructors(&variant.id.name, &variant.parts, diagnostics);
            for part in &variant.parts {
                check_type(&part.ty, diagnostics);
            }
        }
        Expression::Match(match_expression) => {
            check_match_arms(&match_expression.parts, diagnostics);
        }
        _ => {}
    });
}

fn check_type(root: &Type, diagnostics: &mut Diagnostics) {
    walk_type(root, |ty| {
        if let Type::Record(record) = ty {
            check_record_type_fields(&record.parts, diagnostics);
        }
    });
}

fn check_record_fields(parts: &[RecordPart], diagnostics: &mut Diagnostics) {
    let mut seen = HashSet::new();
    for part in parts {
        if !seen.insert(part.id.name.as_str()) {
            diagnostics.push_error(format!(
                "duplicate field '{}' in record expression",
                part.id.name
            ));
        }
    }
}

fn check_record_type_fields(parts: &[RecordTypePart], diagnostics: &mut Diagnostics) {
    let mut seen = HashSet::new();
    for part in parts {
        if !seen.insert(part.name.name.as_str()) {
            diagnostics.push_error(format!(
                "duplicate field '{}' in record type",
                part.name.name
            ));
        }
    }
}

fn check_constructors(owner: &str, parts: &[VariantPart], diagnostics: &mut Diagnostics) {
    let mut seen = HashSet::new();
    for part in parts {
        if !seen.insert(part.id.name.as_str()) {
            diagnostics.push_error(format!(
                "duplicate constructor '{}' in variant '{}'",
                part.id.name, owner
            ));
        }
    }
}

// An arm is unreachable once an earlier arm matched the same
// constructor without a guard. Guarded arms may fall through, so they
// do not seal a constructor.
fn check_match_arms(parts: &[MatchPart], diagnostics: &mut Diagnostics) {
    let mut sealed = HashSet::new();
    for part in parts {
        if sealed.contains(part.id.name.as_str()) {
            diagnostics.push_warning(format!(
                "unreachable match arm for constructor '{}'",
                part.id.name
            ));
        } else if part.guard.is_none() {
            sealed.insert(part.id.name.as_str());
        }
    }
}
