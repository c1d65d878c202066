//! Format-agnostic document tree.
//!
//! Both JSON and YAML deserialize into [`Document`] through serde, and a
//! [`Document`] serializes back into either format. Mapping keys keep their
//! insertion order end to end.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered string-keyed mapping used by [`Document::Object`].
pub type Map = IndexMap<String, Document>;

/// Failure to parse or emit a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// JSON grammar or emitter error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// YAML grammar or emitter error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Map key serde_json uses to hand over the raw text of a number when its
/// `arbitrary_precision` feature is on.
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Numeric scalar.
///
/// Integers that fit `u64` / `i64` stay exact and finite decimals are `f64`.
/// Anything else keeps its literal text so nothing is rounded away.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Non-negative integer.
    PosInt(u64),
    /// Negative integer.
    NegInt(i64),
    /// Floating point value.
    Float(f64),
    /// Integer beyond 64 bits or a decimal beyond `f64` range, as written.
    Big(String),
}

impl Number {
    /// Classify a JSON number literal.
    #[must_use]
    pub fn from_literal(text: &str) -> Self {
        if let Ok(n) = text.parse::<u64>() {
            return Self::PosInt(n);
        }
        if let Ok(n) = text.parse::<i64>() {
            return Self::from(n);
        }
        let is_integer = !text.contains(['.', 'e', 'E']);
        match text.parse::<f64>() {
            Ok(f) if !is_integer && f.is_finite() => Self::Float(f),
            _ => Self::Big(text.to_owned()),
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::PosInt(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        u64::try_from(n).map_or(Self::NegInt(n), Self::PosInt)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosInt(n) => write!(f, "{n}"),
            Self::NegInt(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Big(text) => f.write_str(text),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::PosInt(n) => serializer.serialize_u64(*n),
            Self::NegInt(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Big(text) => {
                // 128-bit integers are native to both emitters; wider literals
                // only come from JSON and go back out through serde_json.
                if let Ok(n) = text.parse::<u128>() {
                    serializer.serialize_u128(n)
                } else if let Ok(n) = text.parse::<i128>() {
                    serializer.serialize_i128(n)
                } else {
                    text.parse::<serde_json::Number>()
                        .map_err(<S::Error as ser::Error>::custom)?
                        .serialize(serializer)
                }
            }
        }
    }
}

/// A parsed JSON or YAML document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    /// `null` / `~`.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered sequence.
    Array(Vec<Document>),
    /// Mapping with insertion-ordered keys.
    Object(Map),
}

impl Document {
    /// Parse JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse YAML text.
    ///
    /// A stream with no content (only blank lines or comments) is the empty
    /// YAML document and parses as [`Document::Null`].
    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        if is_empty_yaml(text) {
            return Ok(Self::Null);
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Emit JSON with two-space indentation.
    ///
    /// Non-ASCII characters are written literally and there is no trailing
    /// newline.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Emit block-style YAML without the final line break.
    pub fn to_yaml_block(&self) -> Result<String, DocumentError> {
        let mut yaml = serde_yaml::to_string(self)?;
        if yaml.ends_with('\n') {
            yaml.pop();
        }
        Ok(yaml)
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns the string if this is a `String` variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if this is an `Object` variant.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the items if this is an `Array` variant.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if this is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

fn is_empty_yaml(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u64> for Document {
    fn from(n: u64) -> Self {
        Self::Number(Number::PosInt(n))
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<f64> for Document {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

impl FromIterator<Document> for Document {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Document)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().collect())
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON or YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Document::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Document::Number(Number::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Document::Number(Number::PosInt(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(Document::Number(Number::from_literal(&v.to_string())))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(Document::Number(Number::from_literal(&v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Document::Number(Number::Float(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Document::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Document::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Document::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Document::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Document::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Document::Array(items))
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let Some(MapKey(first)) = map.next_key()? else {
            return Ok(Document::Object(Map::new()));
        };
        if first == JSON_NUMBER_TOKEN {
            let text: String = map.next_value()?;
            return Ok(Document::Number(Number::from_literal(&text)));
        }

        let mut entries = Map::with_capacity(map.size_hint().unwrap_or(0).min(4096) + 1);
        entries.insert(first, map.next_value()?);
        // Duplicate keys keep their first position and take the last value.
        while let Some(MapKey(key)) = map.next_key()? {
            let value = map.next_value()?;
            entries.insert(key, value);
        }
        Ok(Document::Object(entries))
    }
}

/// Mapping key that accepts any scalar.
///
/// JSON keys are always strings; YAML allows `1: a` or `true: b`, which are
/// stringified here so both formats land in the same [`Map`].
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl Visitor<'_> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar mapping key")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(MapKey(Number::Float(v).to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MapKey(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MapKey(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MapKey("null".to_owned()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(MapKey("null".to_owned()))
    }
}
