//! The closed value model produced by synthesis.
//!
//! Synthesized props are an explicit tagged tree rather than untyped JSON so
//! every consumer can exhaustively match, including on the function
//! placeholders that stand in for callback props.

use std::collections::BTreeMap;

use swc_ecma_ast::{Expr, Lit, TsEnumDecl, TsEnumMemberId, UnaryOp};

/// A synthesized sample value.
///
/// `Object` preserves member insertion order (declaration order of the
/// interface it was synthesized from).
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Array(Vec<MockValue>),
    Object(Vec<(String, MockValue)>),
    /// Stand-in for a callback prop. Invoking it (in the consuming preview
    /// surface) only records its arguments.
    Function { name: String },
}

/// Value of one enum member.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValue {
    Str(String),
    Int(i64),
}

/// One `(member name, value)` pair of an enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: EnumValue,
}

/// Ordered members of an enum declaration, preserving declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    pub members: Vec<EnumMember>,
}

impl EnumDescriptor {
    /// Compute all member values of an enum declaration.
    ///
    /// An unspecified member's value is the previous numeric value + 1,
    /// starting at 0 when no explicit numeric initializer precedes it.
    /// String-valued members never participate in the implicit counter.
    pub fn from_decl(decl: &TsEnumDecl) -> Self {
        let mut members = Vec::new();
        let mut counter: i64 = 0;

        for member in &decl.members {
            let name = match &member.id {
                TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
                TsEnumMemberId::Str(s) => s.value.as_str().unwrap_or_default().to_string(),
            };

            let value = if let Some(Expr::Lit(Lit::Str(s))) = member.init.as_deref() {
                EnumValue::Str(s.value.as_str().unwrap_or_default().to_string())
            } else if let Some(n) = member.init.as_deref().and_then(numeric_init) {
                counter = n + 1;
                EnumValue::Int(n)
            } else {
                // No initializer (or one we cannot evaluate): implicit counter.
                let v = counter;
                counter += 1;
                EnumValue::Int(v)
            };

            members.push(EnumMember { name, value });
        }

        EnumDescriptor { members }
    }

    /// The sample value used for a field of this enum type: the first
    /// member's value.
    pub fn sample(&self) -> Option<MockValue> {
        self.members.first().map(|m| match &m.value {
            EnumValue::Str(s) => MockValue::String(s.clone()),
            EnumValue::Int(i) => MockValue::Number(*i as f64),
        })
    }
}

/// Evaluate an explicit numeric initializer: a number literal, possibly
/// behind a unary minus. Fractional values truncate toward zero.
fn numeric_init(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Lit(Lit::Num(n)) => Some(n.value as i64),
        Expr::Unary(unary) if unary.op == UnaryOp::Minus => {
            if let Expr::Lit(Lit::Num(n)) = &*unary.arg {
                Some(-(n.value as i64))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Side channel mapping field names to the enum behind them.
///
/// Populated only for fields whose resolved declared type is an enum; travels
/// alongside a `MockValue`, never embedded in it.
pub type EnumMetadata = BTreeMap<String, EnumDescriptor>;

/// A synthesized value tree together with its enum metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PropsBundle {
    pub value: MockValue,
    pub enums: EnumMetadata,
}
