use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::lexer::tokens::{Token, TokenKind};

/// Binary operator precedence, lowest first. `Default` is the floor no operator binds at.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();
        map.insert("||", BindingPower::LogicalOr);

        map.insert("&&", BindingPower::LogicalAnd);

        map.insert("|", BindingPower::BitwiseOr);

        map.insert("^", BindingPower::BitwiseXor);

        map.insert("&", BindingPower::BitwiseAnd);

        for op in ["==", "===", "!=", "!=="] {
            map.insert(op, BindingPower::Equality);
        }

        for op in ["<", ">", "<=", ">=", "in", "instanceof"] {
            map.insert(op, BindingPower::Relational);
        }

        for op in ["<<", ">>", ">>>"] {
            map.insert(op, BindingPower::Shift);
        }

        map.insert("+", BindingPower::Additive);
        map.insert("-", BindingPower::Additive);

        map.insert("*", BindingPower::Multiplicative);
        map.insert("/", BindingPower::Multiplicative);
        map.insert("%", BindingPower::Multiplicative);
        map
    };

    pub static ref UNARY_PREFIX: HashSet<&'static str> =
        ["typeof", "void", "delete", "--", "++", "!", "~", "-", "+"].into_iter().collect();

    pub static ref UNARY_POSTFIX: HashSet<&'static str> = ["--", "++"].into_iter().collect();

    pub static ref ASSIGNMENT: HashSet<&'static str> =
        ["=", "+=", "-=", "*=", "/=", "%=", "<<=", ">>=", ">>>=", "&=", "^=", "|="].into_iter().collect();
}

/// Binding power of a binary operator token; `Default` for anything else.
pub fn binding_power(token: &Token) -> BindingPower {
    if token.kind != TokenKind::Operator {
        return BindingPower::Default;
    }

    BP_LOOKUP
        .get(token.value.as_str())
        .copied()
        .unwrap_or(BindingPower::Default)
}

pub fn is_unary_prefix(token: &Token) -> bool {
    token.kind == TokenKind::Operator && UNARY_PREFIX.contains(token.value.as_str())
}

pub fn is_unary_postfix(token: &Token) -> bool {
    token.kind == TokenKind::Operator && UNARY_POSTFIX.contains(token.value.as_str())
}

pub fn is_assignment(token: &Token) -> bool {
    token.kind == TokenKind::Operator && ASSIGNMENT.contains(token.value.as_str())
}
