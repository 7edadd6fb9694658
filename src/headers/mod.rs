use crate::errors::Error;
use crate::grammar::{is_field_value, is_token};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{IntoIter, Iter};
use std::collections::HashMap;
use std::iter::FromIterator;
use std::ops::Index;

/// Response header fields.
///
/// Names are kept exactly as given and are unique; setting a name twice
/// keeps the last value. Iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers {
    headers: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Headers {
            headers: HashMap::new(),
        }
    }

    /// Insert or overwrite a field, returning the value it replaced.
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Option<String>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();

        if !Headers::is_valid_header_name(&name) {
            warn!("header name {:?} is not a valid token", name);
        }

        self.headers.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers.remove(name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.headers.iter()
    }

    pub fn is_valid_header_name(name: &str) -> bool {
        is_token(name.as_bytes())
    }

    /// Check every field can be written to the wire as-is.
    ///
    /// Names must be RFC 7230 tokens and values must not contain control
    /// characters other than HTAB.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in self.headers.iter() {
            if !Headers::is_valid_header_name(name) {
                return Err(Error::InvalidHeaderName(name.clone()));
            }

            if !is_field_value(value.as_bytes()) {
                return Err(Error::InvalidHeaderValue(name.clone()));
            }
        }

        Ok(())
    }
}

impl Index<&str> for Headers {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.headers[name].as_str()
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
