//! Insertion-ordered dictionary values.

use std::fmt;

use crate::write::render_tuple;

/// A value in an OpenFOAM dictionary: a scalar or a nested sub-dictionary.
///
/// Scalars render through their natural display form; no quoting or escaping
/// is applied, so callers supply tokens that are already valid in the target
/// syntax (`Gauss linear`, `(0 0)`, `1e-06`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum FoamValue {
    Int(i64),
    Float(f64),
    Str(String),
    Dict(FoamDict),
}

impl FoamValue {
    pub fn as_dict(&self) -> Option<&FoamDict> {
        match self {
            FoamValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, FoamValue::Dict(_))
    }
}

impl fmt::Display for FoamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoamValue::Int(i) => write!(f, "{}", i),
            FoamValue::Float(x) => write!(f, "{}", x),
            FoamValue::Str(s) => write!(f, "{}", s),
            FoamValue::Dict(d) => {
                // Sub-dictionaries are normally rendered by the block
                // serializer; displaying one inline uses the same body form.
                write!(f, "{{")?;
                for (key, value) in d.iter() {
                    match value {
                        FoamValue::Dict(_) => write!(f, "{}{}", key, value)?,
                        _ => write!(f, "{} {};", key, value)?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<i64> for FoamValue {
    fn from(v: i64) -> Self {
        FoamValue::Int(v)
    }
}

impl From<i32> for FoamValue {
    fn from(v: i32) -> Self {
        FoamValue::Int(v as i64)
    }
}

impl From<u32> for FoamValue {
    fn from(v: u32) -> Self {
        FoamValue::Int(v as i64)
    }
}

impl From<f64> for FoamValue {
    fn from(v: f64) -> Self {
        FoamValue::Float(v)
    }
}

impl From<&str> for FoamValue {
    fn from(v: &str) -> Self {
        FoamValue::Str(v.to_string())
    }
}

impl From<String> for FoamValue {
    fn from(v: String) -> Self {
        FoamValue::Str(v)
    }
}

impl From<FoamDict> for FoamValue {
    fn from(v: FoamDict) -> Self {
        FoamValue::Dict(v)
    }
}

impl From<[f64; 3]> for FoamValue {
    fn from(v: [f64; 3]) -> Self {
        FoamValue::Str(render_tuple(&v))
    }
}

/// A nested, insertion-ordered mapping from key to [`FoamValue`].
///
/// Insertion order is significant: it determines serialization order and is
/// preserved verbatim. `set` on an existing key replaces the value in place
/// without moving the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoamDict {
    entries: Vec<(String, FoamValue)>,
}

impl FoamDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Replacement keeps the original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FoamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FoamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FoamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<FoamValue>, const N: usize> From<[(K, V); N]> for FoamDict {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<FoamValue>> FromIterator<(K, V)> for FoamDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = FoamDict::new();
        for (k, v) in iter {
            dict.set(k, v);
        }
        dict
    }
}
