//! Locations, the console's notion of "URL".
//!
//! Views that are bookmarkable keep their selector in the location's query
//! string instead of in view state. The shell parses a location once and
//! passes it to pure derivation functions (for example "which tab is
//! active"); switching writes a new location.
//!
//! Values are kept as given. Keys and values must not contain `&`, `=`, or
//! `?`.

use std::fmt;

/// Ordered `key=value` pairs of a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a query string without the leading `?`. Pairs without `=` are
    /// ignored.
    pub fn parse(query: &str) -> Self {
        Self(
            query
                .split('&')
                .filter(|s| !s.is_empty())
                .filter_map(|pair| {
                    let (k, v) = pair.split_once('=')?;
                    Some((k.to_string(), v.to_string()))
                })
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the value for `key`, or append it if absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

/// A path plus query, e.g. `/business/b-42?tab=credit-history`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: QueryParams,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: QueryParams::empty(),
        }
    }

    pub fn parse(url: &str) -> Self {
        let (path, query) = split_url(url);
        Self {
            path: path.to_string(),
            query: QueryParams::parse(query),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    /// Same location with `key` set to `value`.
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.query.set(key, value);
        self
    }

    pub fn without_param(mut self, key: &str) -> Self {
        self.query.remove(key);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// Split `"path?query"` into `("path", "query")`.
fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query() {
        let q = QueryParams::parse("tab=credit-history&page=2&flag");
        assert_eq!(q.get("tab"), Some("credit-history"));
        assert_eq!(q.get("page"), Some("2"));
        assert_eq!(q.get("flag"), None);
        assert!(QueryParams::parse("").is_empty());
    }

    #[test]
    fn set_replaces_in_place() {
        let mut q = QueryParams::parse("tab=overview&page=1");
        q.set("tab", "compliance");
        q.set("size", "20");
        assert_eq!(q.to_string(), "tab=compliance&page=1&size=20");

        q.remove("page");
        assert_eq!(q.to_string(), "tab=compliance&size=20");
    }

    #[test]
    fn location_round_trip() {
        let loc = Location::parse("/business/b-42?tab=credit-history");
        assert_eq!(loc.path(), "/business/b-42");
        assert_eq!(loc.param("tab"), Some("credit-history"));
        assert_eq!(loc.to_string(), "/business/b-42?tab=credit-history");
    }

    #[test]
    fn location_without_query() {
        let loc = Location::parse("/users");
        assert_eq!(loc.path(), "/users");
        assert!(loc.query().is_empty());
        assert_eq!(loc.to_string(), "/users");
    }

    #[test]
    fn with_param_builds_new_location() {
        let loc = Location::new("/business/b-1")
            .with_param("tab", "overview")
            .with_param("tab", "compliance");
        assert_eq!(loc.to_string(), "/business/b-1?tab=compliance");
        assert_eq!(loc.without_param("tab").to_string(), "/business/b-1");
    }
}
