//! Case-insensitive, multi-valued header collection.
//!
//! Names are stored with the casing they were first inserted under. Every lookup resolves the
//! logical name through an exact match first and a case-folded match second, so one logical name
//! never owns two entries.
//! Iteration order of names is unspecified.
//!
//! Names and values are `String`s. Bytes read off the wire that are not valid UTF-8 are replaced
//! with U+FFFD, so such a header does not serialize back to the bytes it was parsed from.

use std::collections::HashMap;
use std::collections::hash_map;
use std::io::{self, Read, Write};

use crate::codec::LineReader;
use crate::codec::header::{decode_header, encode_header};
use crate::protocol::ParseError;

/// Header names mapped to their ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    inner: HashMap<String, Vec<String>>,
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `key` to the stored name: the exact key first, then a case-folded match.
    fn real_key(&self, key: &str) -> Option<&str> {
        if let Some((k, _)) = self.inner.get_key_value(key) {
            return Some(k);
        }
        self.inner.keys().find(|k| fold_eq(k, key)).map(String::as_str)
    }

    pub fn values(&self, key: &str) -> Option<&[String]> {
        let real = self.real_key(key)?;
        self.inner.get(real).map(Vec::as_slice)
    }

    /// Returns the first value of `key`, or `""` when it is absent or has no values.
    pub fn get(&self, key: &str) -> &str {
        self.values(key).and_then(<[String]>::first).map_or("", String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.real_key(key).is_some()
    }

    /// Replaces every value of `key` and returns the replaced ones.
    ///
    /// Passing no values removes the key, exactly like [`Header::del`].
    pub fn set<I, V>(&mut self, key: &str, values: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return self.del(key);
        }

        let real = self.real_key(key).unwrap_or(key).to_owned();
        self.inner.insert(real, values)
    }

    /// Appends values to `key`, creating it under this casing if absent.
    pub fn add<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let real = self.real_key(key).unwrap_or(key).to_owned();
        self.inner.entry(real).or_default().extend(values.into_iter().map(Into::into));
    }

    pub fn del(&mut self, key: &str) -> Option<Vec<String>> {
        let real = self.real_key(key)?.to_owned();
        self.inner.remove(&real)
    }

    /// Stores `values` under the exact `key` text, bypassing case-insensitive resolution.
    ///
    /// This is how lines read off the wire are recorded: a later line with the same raw name
    /// replaces the earlier one.
    pub fn insert_raw(&mut self, key: String, values: Vec<String>) -> Option<Vec<String>> {
        self.inner.insert(key, values)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.inner.iter() }
    }

    /// Reads header lines up to and including the blank line ending the section.
    pub fn parse<R: Read>(reader: &mut LineReader<R>) -> Result<Self, ParseError> {
        decode_header(reader)
    }

    /// Writes every non-empty entry as `Name: v1,v2\r\n` followed by the terminating blank line.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        encode_header(self, writer)
    }
}

/// Iterator over `(name, values)` pairs in unspecified order.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Vec<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Header
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut header = Header::new();
        for (k, v) in iter {
            header.add(k.as_ref(), [v]);
        }
        header
    }
}
