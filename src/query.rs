//! Query expressions
//!
//! A query is a small predicate tree over named fields. Only equality
//! comparisons joined with `&&` can be turned into REST parameters; anything
//! else is rejected by [`extract_parameters`].
//!
//! # Example
//!
//! ```
//! use twaccount::query::{extract_parameters, QueryExpression, QueryField};
//!
//! const FIELDS: &[QueryField] = &[QueryField::new("Type", "Type")];
//!
//! let expr = QueryExpression::eq("Type", 1);
//! let params = extract_parameters(&expr, FIELDS).unwrap();
//! assert_eq!(params.get("Type").map(String::as_str), Some("1"));
//! ```

use crate::error::ProcessorError;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to string-encoded value, ready for a query string
pub type ParameterMap = BTreeMap<String, String>;

/// Literal operand of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Integers and enumeration codes
    Int(i64),
    Bool(bool),
    Text(String),
}

impl QueryValue {
    /// Locale-independent string encoding used in URLs
    pub fn to_param_string(&self) -> String {
        match self {
            QueryValue::Int(n) => n.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => write!(f, "{:?}", s),
            other => f.write_str(&other.to_param_string()),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

/// Non-equality comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::NotEqual => "!=",
            Comparison::LessThan => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterThan => ">",
            Comparison::GreaterOrEqual => ">=",
        }
    }
}

/// Predicate tree over named fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpression {
    /// Constant predicate; `true` places no constraint on the query
    Literal(bool),
    FieldEquals {
        field: String,
        value: QueryValue,
    },
    Compare {
        field: String,
        op: Comparison,
        value: QueryValue,
    },
    And(Box<QueryExpression>, Box<QueryExpression>),
    Or(Box<QueryExpression>, Box<QueryExpression>),
    Not(Box<QueryExpression>),
}

impl QueryExpression {
    /// `field == value`
    pub fn eq(field: &str, value: impl Into<QueryValue>) -> Self {
        QueryExpression::FieldEquals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// `field <op> value`
    pub fn compare(field: &str, op: Comparison, value: impl Into<QueryValue>) -> Self {
        QueryExpression::Compare {
            field: field.to_string(),
            op,
            value: value.into(),
        }
    }

    /// `self && other`
    pub fn and(self, other: QueryExpression) -> Self {
        QueryExpression::And(Box::new(self), Box::new(other))
    }

    /// `self || other`
    pub fn or(self, other: QueryExpression) -> Self {
        QueryExpression::Or(Box::new(self), Box::new(other))
    }

    /// `!self`
    pub fn negate(self) -> Self {
        QueryExpression::Not(Box::new(self))
    }
}

impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryExpression::Literal(b) => write!(f, "{}", b),
            QueryExpression::FieldEquals { field, value } => write!(f, "{} == {}", field, value),
            QueryExpression::Compare { field, op, value } => {
                write!(f, "{} {} {}", field, op.symbol(), value)
            }
            QueryExpression::And(l, r) => write!(f, "({} && {})", l, r),
            QueryExpression::Or(l, r) => write!(f, "({} || {})", l, r),
            QueryExpression::Not(inner) => write!(f, "!({})", inner),
        }
    }
}

/// A field a processor accepts in query expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryField {
    /// Name used in expressions and parameter maps
    pub name: &'static str,
    /// Name used in the request query string
    pub wire_name: &'static str,
}

impl QueryField {
    pub const fn new(name: &'static str, wire_name: &'static str) -> Self {
        Self { name, wire_name }
    }
}

/// Look up the query-string name for a parameter key.
/// Keys that are not declared fields pass through unchanged.
pub fn wire_name<'a>(fields: &'a [QueryField], key: &'a str) -> &'a str {
    fields
        .iter()
        .find(|f| f.name == key)
        .map(|f| f.wire_name)
        .unwrap_or(key)
}

/// Walk `expr` and collect `field == value` pairs for the given fields.
///
/// Fails with [`ProcessorError::UnsupportedExpression`] naming the offending
/// node when the tree contains `||`, `!`, a range comparison, a constant
/// `false`, a comparison on an undeclared field, or two different values for
/// the same field.
pub fn extract_parameters(
    expr: &QueryExpression,
    fields: &[QueryField],
) -> Result<ParameterMap, ProcessorError> {
    let mut params = ParameterMap::new();
    collect(expr, fields, &mut params)?;
    tracing::debug!("extracted {} query parameter(s) from {}", params.len(), expr);
    Ok(params)
}

fn collect(
    expr: &QueryExpression,
    fields: &[QueryField],
    params: &mut ParameterMap,
) -> Result<(), ProcessorError> {
    match expr {
        QueryExpression::Literal(true) => Ok(()),
        QueryExpression::And(l, r) => {
            collect(l, fields, params)?;
            collect(r, fields, params)
        }
        QueryExpression::FieldEquals { field, value } => {
            if !fields.iter().any(|f| f.name == field.as_str()) {
                return Err(unsupported(expr));
            }
            let encoded = value.to_param_string();
            if params.get(field.as_str()).is_some_and(|existing| *existing != encoded) {
                return Err(unsupported(expr));
            }
            params.insert(field.clone(), encoded);
            Ok(())
        }
        QueryExpression::Literal(false)
        | QueryExpression::Compare { .. }
        | QueryExpression::Or(..)
        | QueryExpression::Not(..) => Err(unsupported(expr)),
    }
}

fn unsupported(expr: &QueryExpression) -> ProcessorError {
    ProcessorError::UnsupportedExpression {
        node: expr.to_string(),
    }
}
