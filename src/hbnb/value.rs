//! Attribute values and the closed literal grammar.
//!
//! User input is only ever interpreted through [`Value::parse_literal`]: a
//! quoted string, an integer, a float, or a flat quoted-key mapping literal.
//! Anything else stays a raw string. There is no expression evaluation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Runtime representation of an object attribute.
///
/// Serializes untagged, so store files carry plain JSON scalars, arrays,
/// and objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
    Map(BTreeMap<String, Value>),
}

/// The type of a [`Value`], used for schema defaults and update coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Str,
    List,
    Map,
}

impl Kind {
    pub fn default_value(self) -> Value {
        match self {
            Kind::Int => Value::Int(0),
            Kind::Float => Value::Float(0.0),
            Kind::Str => Value::Str(String::new()),
            Kind::List => Value::List(Vec::new()),
            Kind::Map => Value::Map(BTreeMap::new()),
        }
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    /// Interpret raw text with the restricted literal grammar.
    ///
    /// Never fails: text that matches no literal form is kept as a raw
    /// string, which is what `create` relies on.
    pub fn parse_literal(raw: &str) -> Value {
        let t = raw.trim();
        if let Some(s) = unquote(t) {
            return Value::Str(s.to_string());
        }
        if let Ok(i) = t.parse::<i64>() {
            return Value::Int(i);
        }
        if looks_numeric(t) {
            if let Ok(f) = t.parse::<f64>() {
                return Value::Float(f);
            }
        }
        if t.starts_with('{') && t.ends_with('}') {
            if let Some(map) = parse_map_literal(t) {
                return Value::Map(map);
            }
        }
        Value::Str(raw.to_string())
    }

    /// Coerce raw text to a given kind, for `update` on an existing
    /// attribute. `None` means the coercion failed and the caller should
    /// fall back to the raw string.
    pub fn coerce(kind: Kind, raw: &str) -> Option<Value> {
        match kind {
            Kind::Str => Some(Value::Str(raw.to_string())),
            Kind::Int => raw.trim().parse::<i64>().ok().map(Value::Int),
            Kind::Float => raw.trim().parse::<f64>().ok().map(Value::Float),
            Kind::List | Kind::Map => None,
        }
    }
}

/// Parse a flat mapping literal: `{'key': value, ...}` with quoted string
/// keys and scalar values. Nesting is not part of the grammar.
pub fn parse_map_literal(s: &str) -> Option<BTreeMap<String, Value>> {
    let inner = s.trim().strip_prefix('{')?.strip_suffix('}')?.trim();
    let mut map = BTreeMap::new();
    if inner.is_empty() {
        return Some(map);
    }
    for entry in split_entries(inner) {
        let (k, v) = entry.split_once(':')?;
        let key = unquote(k.trim())?;
        let value = scalar_literal(v.trim())?;
        map.insert(key.to_string(), value);
    }
    Some(map)
}

/// Split mapping entries on commas that sit outside quotes.
fn split_entries(inner: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ',' => {
                entries.push(&inner[start..i]);
                start = i + 1;
            }
            None => {}
        }
    }
    entries.push(&inner[start..]);
    entries
}

/// A mapping value: quoted string, integer, or float. Nothing else.
fn scalar_literal(raw: &str) -> Option<Value> {
    if let Some(s) = unquote(raw) {
        return Some(Value::Str(s.to_string()));
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::Int(i));
    }
    if looks_numeric(raw) {
        if let Ok(f) = raw.parse::<f64>() {
            return Some(Value::Float(f));
        }
    }
    None
}

fn unquote(s: &str) -> Option<&str> {
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return Some(&s[1..s.len() - 1]);
        }
    }
    None
}

// Keeps words like "inf" or "nan" from parsing as floats.
fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}'", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}
