use std::slice;

use crate::error::{Result, TreeError};

/// A single `key="value"` pair written on a start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered attributes of one element.
///
/// Entries keep the order in which they were written. Duplicate keys are
/// kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    entries: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Attribute::new(key, value));
    }

    /// Bounds-checked access by position
    pub fn get(&self, index: usize) -> Result<&Attribute> {
        self.entries.get(index).ok_or_else(|| {
            TreeError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            }
            .into()
        })
    }

    /// First attribute with the given key
    pub fn find(&self, key: &str) -> Option<&Attribute> {
        self.entries.iter().find(|attr| attr.key == key)
    }

    /// Value of the first attribute with the given key
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.find(key).map(|attr| attr.value.as_str())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Attribute),
    {
        self.entries.iter().for_each(f);
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeList
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| Attribute::new(key, value))
                .collect(),
        }
    }
}
