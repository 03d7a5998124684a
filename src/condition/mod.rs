#[allow(non_upper_case_globals)]
pub mod op;

mod variant;

pub use {op::{ConditionOp, SetQualifier}, variant::Variant};

use {
    chrono::{DateTime, SecondsFormat, Utc},
    serde::{
        ser::{SerializeMap, SerializeSeq, Serializer},
        Serialize,
    },
    std::slice::Iter,
};

/// One or more values for a condition key. Scalars normalize to a
/// one-element list; booleans and numbers are rendered to their string
/// forms, matching how the IAM console displays them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionValues {
    values: Vec<String>,
}

impl ConditionValues {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.values.iter()
    }

    pub fn to_vec(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }

    pub(crate) fn append(&mut self, mut other: ConditionValues) {
        self.values.append(&mut other.values);
    }
}

impl From<&str> for ConditionValues {
    fn from(value: &str) -> Self {
        Self {
            values: vec![value.to_string()],
        }
    }
}

impl From<String> for ConditionValues {
    fn from(value: String) -> Self {
        Self {
            values: vec![value],
        }
    }
}

impl From<bool> for ConditionValues {
    fn from(value: bool) -> Self {
        Self {
            values: vec![value.to_string()],
        }
    }
}

impl From<i64> for ConditionValues {
    fn from(value: i64) -> Self {
        Self {
            values: vec![value.to_string()],
        }
    }
}

impl From<f64> for ConditionValues {
    fn from(value: f64) -> Self {
        Self {
            values: vec![value.to_string()],
        }
    }
}

impl From<DateTime<Utc>> for ConditionValues {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            values: vec![value.to_rfc3339_opts(SecondsFormat::Millis, true)],
        }
    }
}

impl From<Vec<String>> for ConditionValues {
    fn from(values: Vec<String>) -> Self {
        Self {
            values,
        }
    }
}

impl From<Vec<&str>> for ConditionValues {
    fn from(values: Vec<&str>) -> Self {
        Self {
            values: values.into_iter().map(str::to_string).collect(),
        }
    }
}

impl From<&[&str]> for ConditionValues {
    fn from(values: &[&str]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for ConditionValues {
    fn from(values: [&str; N]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl From<Vec<DateTime<Utc>>> for ConditionValues {
    fn from(values: Vec<DateTime<Utc>>) -> Self {
        Self {
            values: values.iter().map(|v| v.to_rfc3339_opts(SecondsFormat::Millis, true)).collect(),
        }
    }
}

impl Serialize for ConditionValues {
    /// Condition values always serialize as an array, even when there is
    /// only one, so multivalued set operators read unambiguously.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// A normalized (operator, key, values) entry ready for insertion into a
/// statement's condition map.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConditionClause {
    op: ConditionOp,
    key: String,
    values: ConditionValues,
}

impl ConditionClause {
    /// Creates a clause with the `StringLike` default operator.
    pub fn new<K: Into<String>, V: Into<ConditionValues>>(key: K, values: V) -> Self {
        Self::with_op(key, values, op::StringLike)
    }

    /// Creates a clause with an explicit operator.
    pub fn with_op<K: Into<String>, V: Into<ConditionValues>>(key: K, values: V, op: ConditionOp) -> Self {
        Self {
            op,
            key: key.into(),
            values: values.into(),
        }
    }

    #[inline]
    pub fn op(&self) -> &ConditionOp {
        &self.op
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn values(&self) -> &ConditionValues {
        &self.values
    }
}

/// Substitutes the tag-key variable in a templated condition key, e.g.
/// `aws:RequestTag/${TagKey}` with `Team` becomes `aws:RequestTag/Team`.
pub fn key_with_tag(template: &str, tag_key: &str) -> String {
    crate::arn::PLACEHOLDER.replace_all(template, regex::NoExpand(tag_key)).into_owned()
}

/// A statement's conditions, grouped by operator and then by key.
///
/// Groups and keys keep first-insertion order; inserting a clause for an
/// existing (operator, key) pair appends its values rather than overwriting.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionMap {
    entries: Vec<(ConditionOp, Vec<(String, ConditionValues)>)>,
}

impl ConditionMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, clause: ConditionClause) {
        let ConditionClause {
            op,
            key,
            values,
        } = clause;

        let group = match self.entries.iter().position(|(existing, _)| *existing == op) {
            Some(index) => index,
            None => {
                self.entries.push((op, Vec::new()));
                self.entries.len() - 1
            }
        };
        let keys = &mut self.entries[group].1;

        match keys.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, existing_values)) => existing_values.append(values),
            None => keys.push((key, values)),
        }
    }

    pub fn get(&self, op: &ConditionOp, key: &str) -> Option<&ConditionValues> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == op)
            .and_then(|(_, keys)| keys.iter().find(|(existing, _)| existing == key))
            .map(|(_, values)| values)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of operator groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConditionOp, &[(String, ConditionValues)])> {
        self.entries.iter().map(|(op, keys)| (op, keys.as_slice()))
    }
}

struct KeyMap<'a>(&'a [(String, ConditionValues)]);

impl Serialize for KeyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in self.0 {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

impl Serialize for ConditionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (op, keys) in &self.entries {
            map.serialize_entry(op, &KeyMap(keys))?;
        }
        map.end()
    }
}
