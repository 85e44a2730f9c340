//! Iterative pre-order traversal over the syntax tree.
//!
//! Curried applications and arrow types nest proportionally to source
//! size, so traversal runs on an explicit work-list instead of the call
//! stack.

use crate::ast::{Declaration, Expression, Module, Type};

/// Visit `root` and every expression beneath it in pre-order, children
/// in source order.
pub fn walk_expression<'a, F>(root: &'a Expression, mut visit: F)
where
    F: FnMut(&'a Expression),
{
    let mut stack = vec![root];
    let mut children = Vec::new();
    while let Some(expression) = stack.pop() {
        visit(expression);
        expression_children(expression, &mut children);
        stack.extend(children.drain(..).rev());
    }
}

/// Visit `root` and every type beneath it in pre-order, children in
/// source order.
pub fn walk_type<'a, F>(root: &'a Type, mut visit: F)
where
    F: FnMut(&'a Type),
{
    let mut stack = vec![root];
    let mut children = Vec::new();
    while let Some(ty) = stack.pop() {
        visit(ty);
        type_children(ty, &mut children);
        stack.extend(children.drain(..).rev());
    }
}

/// Visit the declarations of a module in declaration order.
pub fn walk_module<'a, F>(module: &'a Module, mut visit: F)
where
    F: FnMut(&'a Declaration),
{
    for declaration in &module.declarations {
        visit(declaration);
    }
}

fn expression_children<'a>(expression: &'a Expression, out: &mut Vec<&'a Expression>) {
    match expression {
        Expression::Identifier(_)
        | Expression::Literal(_)
        | Expression::Partial
        | Expression::Inline(_) => {}
        Expression::Dot(dot) => out.push(&dot.lhs),
        Expression::Unary(unary) => out.push(&unary.expression),
        Expression::Application(application) => {
            out.push(&application.lhs);
            out.push(&application.rhs);
        }
        Expression::Operator(operator) => {
            out.push(&operator.lhs);
            out.push(&operator.rhs);
        }
        Expression::If(if_expression) => {
            out.push(&if_expression.cond);
            out.push(&if_expression.lhs);
            out.push(&if_expression.rhs);
        }
        Expression::Lambda(lambda) => out.push(&lambda.body),
        Expression::LetRec(let_rec) => {
            out.push(&let_rec.lhs);
            out.push(&let_rec.rhs);
        }
        Expression::Let(let_expression) => {
            out.push(&let_expression.lhs);
            out.push(&let_expression.rhs);
        }
        Expression::Def(def) => {
            out.push(&def.lhs);
            out.push(&def.rhs);
        }
        Expression::Record(record) => {
            for part in &record.parts {
                out.push(&part.value);
            }
        }
        Expression::Compound(compound) => {
            for expression in &compound.expressions {
                out.push(expression);
            }
        }
        Expression::Variant(variant) => out.push(&variant.expression),
        Expression::Match(match_expression) => {
            out.push(&match_expression.expression);
            for part in &match_expression.parts {
                if let Some(guard) = &part.guard {
                    out.push(guard);
                }
                out.push(&part.body);
            }
        }
    }
}

fn type_children<'a>(ty: &'a Type, out: &mut Vec<&'a Type>) {
    match ty {
        Type::Identifier(_) | Type::Generic(_) => {}
        Type::Tuple(tuple) => {
            out.push(&tuple.lhs);
            out.push(&tuple.rhs);
        }
        Type::Function(function) => {
            out.push(&function.lhs);
            out.push(&function.rhs);
        }
        Type::Record(record) => {
            for part in &record.parts {
                out.push(&part.ty);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, LetExpression, Literal, Operator, OperatorExpression};

    #[test]
    fn preorder_visits_children_in_source_order() {
        // let x = 1 + 2 in x
        let expression = Expression::Let(LetExpression {
            id: Identifier::new("x"),
            lhs: Box::new(Expression::Operator(OperatorExpression {
                lhs: Box::new(Expression::Literal(Literal::Integer(1))),
                op: Operator::new("+"),
                rhs: Box::new(Expression::Literal(Literal::Integer(2))),
            })),
            rhs: Box::new(Expression::Identifier(Identifier::new("x"))),
        });

        let mut kinds = Vec::new();
        walk_expression(&expression, |expression| {
            kinds.push(match expression {
                Expression::Let(_) => "let",
                Expression::Operator(_) => "op",
                Expression::Literal(Literal::Integer(1)) => "one",
                Expression::Literal(Literal::Integer(2)) => "two",
                Expression::Identifier(_) => "x",
                _ => "other",
            });
        });
        assert_eq!(kinds, ["let", "op", "one", "two", "x"]);
    }

    #[test]
    fn match_guards_are_visited() {
        use crate::ast::{MatchExpression, MatchPart};

        let match_expression = MatchExpression {
            expression: Box::new(Expression::Identifier(Identifier::new("subject"))),
            parts: vec![MatchPart {
                id: Identifier::new("Some"),
                params: vec![Identifier::new("v")],
                guard: Some(Expression::Identifier(Identifier::new("flag"))),
                body: Expression::Identifier(Identifier::new("v")),
            }],
        };

        let mut visited = 0usize;
        walk_expression(&Expression::Match(match_expression), |_| visited += 1);
        // match node, scrutinee, guard, body
        assert_eq!(visited, 4);
    }
}
