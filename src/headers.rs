use crate::compat::{BTreeMap, String, ToString};

/// Case-insensitive HTTP header collection.
///
/// Names are normalized to ASCII lowercase at insertion, so lookups never
/// depend on the casing a client happened to send. Inserting a name twice
/// joins the values with `", "`, keeping one joined value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: BTreeMap<String, String>,
}

impl HeaderMap {
    /// Create an empty header map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header value, joining it onto any existing value
    pub fn insert(&mut self, name: &str, value: &str) {
        let key = name.to_ascii_lowercase();
        match self.entries.get_mut(&key) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(value);
            }
            None => {
                self.entries.insert(key, value.to_string());
            }
        }
    }

    /// Case-insensitive lookup of a header's joined value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Look up a header value, falling back to a default
    pub fn value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Check if the map holds no headers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct header names
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<N: AsRef<str>, V: AsRef<str>> Extend<(N, V)> for HeaderMap {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name.as_ref(), value.as_ref());
        }
    }
}
