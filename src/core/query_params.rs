use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// Ordering of distinct parameter names when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// First-insertion order. A parameter that gets rewritten moves to the end.
    #[default]
    Insertion,
    Sorted,
}

/// Multi-valued, order-preserving query parameters.
///
/// Parsing is permissive: a leading `?` is optional, `+` decodes to a space,
/// malformed percent escapes are kept literally and pairs with an empty name
/// or an empty value are dropped. An absent parameter is simply an empty
/// value list, never an error.
///
/// # Example
/// ```
/// use catalog::core::query_params::QueryParams;
///
/// let params = QueryParams::parse("?learning_type=course&learning_type=program&q=data+science");
/// assert_eq!(params.get_all("learning_type"), ["course", "program"]);
/// assert_eq!(params.get("q"), Some("data science"));
/// assert!(params.get_all("availability").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            params.append(&key, value.into_owned());
        }
        params
    }

    pub fn contains(&self, key: &str) -> bool {
        !self.get_all(key).is_empty()
    }

    pub fn contains_value(&self, key: &str, value: &str) -> bool {
        self.get_all(key).iter().any(|v| v == value)
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    /// Replace every value of `key`. The parameter moves to the end; an empty
    /// value list removes it.
    pub fn set<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.remove(key);
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if !values.is_empty() {
            self.entries.push((key.to_string(), values));
        }
    }

    pub fn remove(&mut self, key: &str) -> Vec<String> {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(idx) => self.entries.remove(idx).1,
            None => Vec::new(),
        }
    }

    /// Drop every occurrence of `value` under `key`, keeping the other values
    /// in their relative order. Returns whether anything was removed.
    pub fn remove_value(&mut self, key: &str, value: &str) -> bool {
        if !self.contains_value(key, value) {
            return false;
        }
        let remaining: Vec<String> = self
            .remove(key)
            .into_iter()
            .filter(|v| v != value)
            .collect();
        self.set(key, remaining);
        true
    }

    pub fn to_query_string(&self, order: KeyOrder) -> String {
        let mut entries: Vec<&(String, Vec<String>)> = self.entries.iter().collect();
        if order == KeyOrder::Sorted {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in entries {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries.iter().cloned().collect()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string(KeyOrder::Insertion))
    }
}
