use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::trie::Trie;
use crate::value::{StateValue, SubscriptionId, Ticket};

/// Callback invoked with `(path, new_value)` after a write.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Path-keyed view state with pattern subscriptions.
///
/// Every view keeps its state at a well-known path (`users/list`,
/// `credit/report/{number}`, ...). Writes notify subscribers whose pattern
/// matches the path; a shell re-renders from those notifications.
///
/// Loads that may be superseded (page flips, route changes) go through
/// [`StateStore::begin`] / [`StateStore::commit`] so an older response can
/// never overwrite a newer one.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    handlers: Trie<HandlerEntry>,
    next_id: AtomicU64,
    /// Newest ticket issued per path.
    tickets: Mutex<HashMap<String, u64>>,
}

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: Trie::new(),
            next_id: AtomicU64::new(1),
            tickets: Mutex::new(HashMap::new()),
        }
    }

    /// Store `value` at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    pub fn set_value(&self, path: &str, value: StateValue) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_string(), value.clone());
        for entry in self.handlers.match_topic(path) {
            (entry.handler)(path, &value);
        }
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Owned copy of the state at `path`, if present and of type `T`.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.cloned::<T>())
    }

    /// Read-modify-write: apply `f` to the current `T` at `path` (or to
    /// `init()` when absent or of another type) and store the result.
    pub fn update<T, I, F>(&self, path: &str, init: I, f: F)
    where
        T: Any + Clone + Send + Sync,
        I: FnOnce() -> T,
        F: FnOnce(&mut T),
    {
        let mut state = self.get_as::<T>(path).unwrap_or_else(init);
        f(&mut state);
        self.set(path, state);
    }

    /// Remove the value at `path`. Subscribers are not notified.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
    }

    /// Entries strictly below `prefix` (`prefix/...`), ordered by path.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        let start = format!("{}/", prefix);
        values
            .range(start.clone()..)
            .take_while(|(k, _)| k.starts_with(&start))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to writes on paths matching `pattern` (`+`/`#` wildcards).
    ///
    /// The handler runs synchronously on the writing thread.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.insert(
            pattern,
            HandlerEntry {
                id,
                handler: Arc::new(handler),
            },
        );
        id
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.handlers.remove(pattern, |entry| entry.id == id);
    }

    /// All entries, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, StateValue)> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn paths(&self) -> Vec<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    // ====================================================================
    // Sequencing
    // ====================================================================

    /// Start a load for `path`. Any ticket issued earlier for the same path
    /// becomes stale.
    pub fn begin(&self, path: &str) -> Ticket {
        let mut tickets = self.tickets.lock().unwrap_or_else(PoisonError::into_inner);
        let seq = tickets.entry(path.to_string()).or_insert(0);
        *seq += 1;
        Ticket {
            path: path.to_string(),
            seq: *seq,
        }
    }

    /// Whether `ticket` is still the newest one for its path.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.tickets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ticket.path)
            .is_some_and(|seq| *seq == ticket.seq)
    }

    /// Write `value` at the ticket's path if the ticket is still current.
    ///
    /// Returns `false` (and writes nothing) for a superseded ticket.
    pub fn commit<T: Any + Send + Sync>(&self, ticket: &Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                path = %ticket.path,
                seq = ticket.seq,
                "dropping superseded response"
            );
            return false;
        }
        self.set(&ticket.path, value);
        true
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
