use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Path-pattern trie shared by state subscriptions and request routes.
///
/// Patterns use `/` as the level separator and MQTT-style wildcards:
/// - `+` matches exactly one level (`business/+/credit-history`)
/// - `#` matches zero or more remaining levels and must come last (`users/#`)
///
/// ```ignore
/// let trie = Trie::new();
/// trie.insert("credit/report/+", "report view");
/// trie.insert("credit/#", "credit log");
/// assert_eq!(trie.match_topic("credit/report/CR-1").len(), 2);
/// ```
pub struct Trie<T> {
    root: RwLock<Node<T>>,
}

struct Node<T> {
    /// Literal children keyed by segment.
    exact: HashMap<String, Node<T>>,
    /// Child reached through a `+` segment.
    any_one: Option<Box<Node<T>>>,
    /// Values whose pattern ends here.
    here: Vec<T>,
    /// Values whose pattern ends with `#` at this level.
    rest: Vec<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            any_one: None,
            here: Vec::new(),
            rest: Vec::new(),
        }
    }
}

impl<T: Clone> Trie<T> {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::default()),
        }
    }

    /// Register `value` under `pattern`. The same pattern may hold many values.
    pub fn insert(&self, pattern: &str, value: T) {
        let mut root = self.root.write().unwrap_or_else(PoisonError::into_inner);
        let mut node: &mut Node<T> = &mut root;
        for segment in pattern.split('/') {
            node = match segment {
                "#" => {
                    node.rest.push(value);
                    return;
                }
                "+" => node.any_one.get_or_insert_with(Box::default).as_mut(),
                literal => node.exact.entry(literal.to_string()).or_default(),
            };
        }
        node.here.push(value);
    }

    /// All values whose pattern matches the concrete `topic`.
    ///
    /// Literal matches come first, then `+` matches, then `#` matches,
    /// level by level.
    pub fn match_topic(&self, topic: &str) -> Vec<T> {
        let root = self.root.read().unwrap_or_else(PoisonError::into_inner);
        let segments: Vec<&str> = topic.split('/').collect();
        let mut out = Vec::new();
        root.collect(&segments, &mut out);
        out
    }

    /// Drop values registered under exactly `pattern` that satisfy `predicate`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut root = self.root.write().unwrap_or_else(PoisonError::into_inner);
        match root.slot_mut(pattern) {
            Some(values) => {
                let before = values.len();
                values.retain(|v| !predicate(v));
                values.len() < before
            }
            None => false,
        }
    }

    /// Whether something is registered under exactly `pattern` (no matching).
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let root = self.root.read().unwrap_or_else(PoisonError::into_inner);
        root.slot(pattern).is_some_and(|values| !values.is_empty())
    }
}

impl<T: Clone> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Node<T> {
    fn collect(&self, segments: &[&str], out: &mut Vec<T>) {
        match segments.split_first() {
            None => out.extend(self.here.iter().cloned()),
            Some((first, tail)) => {
                if let Some(child) = self.exact.get(*first) {
                    child.collect(tail, out);
                }
                if let Some(child) = &self.any_one {
                    child.collect(tail, out);
                }
            }
        }
        out.extend(self.rest.iter().cloned());
    }

    fn slot(&self, pattern: &str) -> Option<&Vec<T>> {
        let mut node = self;
        for segment in pattern.split('/') {
            node = match segment {
                "#" => return Some(&node.rest),
                "+" => node.any_one.as_deref()?,
                literal => node.exact.get(literal)?,
            };
        }
        Some(&node.here)
    }

    fn slot_mut(&mut self, pattern: &str) -> Option<&mut Vec<T>> {
        let mut node = self;
        for segment in pattern.split('/') {
            node = match segment {
                "#" => return Some(&mut node.rest),
                "+" => node.any_one.as_deref_mut()?,
                literal => node.exact.get_mut(literal)?,
            };
        }
        Some(&mut node.here)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_match_exactly() {
        let trie = Trie::new();
        trie.insert("users/list", 1);
        trie.insert("users/role-modal", 2);

        assert_eq!(trie.match_topic("users/list"), vec![1]);
        assert_eq!(trie.match_topic("users/role-modal"), vec![2]);
        assert!(trie.match_topic("users").is_empty());
        assert!(trie.match_topic("users/list/extra").is_empty());
    }

    #[test]
    fn same_pattern_keeps_every_value() {
        let trie = Trie::new();
        trie.insert("credit/my-reports", "render");
        trie.insert("credit/my-reports", "log");

        assert_eq!(trie.match_topic("credit/my-reports"), vec!["render", "log"]);
    }

    #[test]
    fn plus_matches_one_level_only() {
        let trie = Trie::new();
        trie.insert("credit/report/+", 7);

        assert_eq!(trie.match_topic("credit/report/CR-2024-0001"), vec![7]);
        assert!(trie.match_topic("credit/report").is_empty());
        assert!(trie.match_topic("credit/report/CR-1/extra").is_empty());
    }

    #[test]
    fn plus_in_the_middle() {
        let trie = Trie::new();
        trie.insert("business/+/credit-history", 3);

        assert_eq!(trie.match_topic("business/b-42/credit-history"), vec![3]);
        assert!(trie.match_topic("business/b-42").is_empty());
        assert!(trie.match_topic("business/b-42/overview").is_empty());
    }

    #[test]
    fn hash_matches_zero_or_more_levels() {
        let trie = Trie::new();
        trie.insert("business/#", 9);

        assert_eq!(trie.match_topic("business"), vec![9]);
        assert_eq!(trie.match_topic("business/b-1"), vec![9]);
        assert_eq!(trie.match_topic("business/b-1/credit-history"), vec![9]);
        assert!(trie.match_topic("users/list").is_empty());
    }

    #[test]
    fn root_hash_matches_everything() {
        let trie = Trie::new();
        trie.insert("#", 0);

        assert_eq!(trie.match_topic("app/location"), vec![0]);
        assert_eq!(trie.match_topic("roles/history"), vec![0]);
    }

    #[test]
    fn literal_before_wildcards() {
        let trie = Trie::new();
        trie.insert("#", "all");
        trie.insert("credit/+", "one");
        trie.insert("credit/my-reports", "exact");

        assert_eq!(
            trie.match_topic("credit/my-reports"),
            vec!["exact", "one", "all"]
        );
    }

    #[test]
    fn remove_by_predicate() {
        let trie = Trie::new();
        trie.insert("users/#", 1);
        trie.insert("users/#", 2);

        assert!(trie.remove("users/#", |v| *v == 1));
        assert_eq!(trie.match_topic("users/list"), vec![2]);
        assert!(!trie.remove("users/#", |v| *v == 1));
        assert!(!trie.remove("never/registered", |_| true));
    }

    #[test]
    fn has_pattern_is_not_matching() {
        let trie = Trie::new();
        trie.insert("business/+", 1);

        assert!(trie.has_pattern("business/+"));
        assert!(!trie.has_pattern("business/b-1"));
        assert!(!trie.has_pattern("business/#"));

        trie.remove("business/+", |_| true);
        assert!(!trie.has_pattern("business/+"));
    }
}
