//! Typed attribute values and the token coercer.
//!
//! Client data files carry every value as text. A token is coerced into one
//! of four shapes:
//! ```text
//! {a;b;c}   -> TextList(["a", "b", "c"])
//! [123]     -> Int(123)
//! true      -> Bool(true)
//! [Name]    -> Text("Name")
//! ```
//! Malformed tokens never fail; they fall through to `Text`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opening marker of a list token.
const LIST_OPEN: char = '{';
/// Separator between list elements.
const LIST_SEPARATOR: char = ';';

/// A single attribute value from a client data record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(i64),
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
}

impl AttrValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    /// Lowercase every element of a list value in place. Other shapes are untouched.
    pub fn lowercase_list(&mut self) {
        if let Self::TextList(items) = self {
            for item in items.iter_mut() {
                *item = item.to_lowercase();
            }
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::TextList(items) => write!(f, "{{{}}}", items.join(";")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Strip one leading `[` and one trailing `]`, each independently.
pub fn unwrap_markers(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}

/// Coerce a raw token into a typed value.
///
/// The token is trimmed first. List tokens lose their outer braces and are
/// split on `;`, with each element unwrapped of `[`/`]`. Scalars are
/// unwrapped, then tried as an all-digit integer, then as a boolean, and
/// otherwise kept as text.
pub fn coerce(token: &str) -> AttrValue {
    let token = token.trim();

    if token.starts_with(LIST_OPEN) {
        let inner = strip_outer(token);
        return AttrValue::TextList(
            inner
                .split(LIST_SEPARATOR)
                .map(|item| unwrap_markers(item).to_string())
                .collect(),
        );
    }

    let s = unwrap_markers(token);
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        // Out-of-range digit runs stay textual.
        if let Ok(n) = s.parse::<i64>() {
            return AttrValue::Int(n);
        }
    }
    match s {
        "true" => AttrValue::Bool(true),
        "false" => AttrValue::Bool(false),
        _ => AttrValue::Text(s.to_string()),
    }
}

/// Drop the first and last character of a list token.
fn strip_outer(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
