//! Runtime value representation for the structural matcher.
//!
//! Defines the Value enum covering the dynamic data universe that patterns
//! are matched against: primitives, ordered lists, string-keyed records,
//! and the two absent-value sentinels.

use indexmap::IndexMap;
use num_bigint::BigInt;

/// A dynamic, tree-shaped data value.
///
/// The not-a-number sentinel is carried inside `Number` as an `f64::NAN`
/// payload; it is a number that never compares equal to itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string
    String(String),
    /// 64-bit floating point number
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Arbitrary-precision integer
    BigInt(BigInt),

    /// Ordered list of values
    List(Vec<Value>),
    /// String-keyed record, insertion-ordered
    Record(IndexMap<String, Value>),

    /// Explicit null
    Null,
    /// Absent value
    Undefined,
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Number(_) => "Number",
            Value::Boolean(_) => "Boolean",
            Value::BigInt(_) => "BigInt",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
            Value::Null => "Null",
            Value::Undefined => "Undefined",
        }
    }

    /// Build a record value from key/value pairs, preserving pair order
    pub fn record<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Convert to string representation (for display and diagnostics)
    pub fn to_string_repr(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{:.1}", n) // Show 1.0 instead of 1
                } else {
                    n.to_string()
                }
            }
            Value::Boolean(b) => b.to_string(),
            Value::BigInt(n) => format!("{}n", n),
            Value::List(items) => {
                let item_strings: Vec<String> = items.iter().map(|v| v.to_string_repr()).collect();
                format!("[{}]", item_strings.join(", "))
            }
            Value::Record(fields) => {
                let entries: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.to_string_repr()))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_repr())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from("hello").type_name(), "String");
        assert_eq!(Value::from(42.0).type_name(), "Number");
        assert_eq!(Value::from(true).type_name(), "Boolean");
        assert_eq!(Value::from(BigInt::from(7)).type_name(), "BigInt");
        assert_eq!(Value::List(vec![]).type_name(), "List");
        assert_eq!(Value::record::<&str, _>([]).type_name(), "Record");
        assert_eq!(Value::Null.type_name(), "Null");
        assert_eq!(Value::Undefined.type_name(), "Undefined");
    }

    #[test]
    fn test_display_rendering() {
        let value = Value::record([
            ("name", Value::from("ada")),
            ("scores", Value::List(vec![Value::from(1.0), Value::from(2.5)])),
        ]);
        assert_eq!(value.to_string(), "{name: ada, scores: [1.0, 2.5]}");
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(Value::Null, Value::Undefined);
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::Undefined, Value::Undefined);
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }
}
