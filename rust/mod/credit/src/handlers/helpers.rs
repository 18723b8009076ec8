//! State plumbing shared by the handlers.

use std::any::Any;

use credit_flux::{StateStore, Ticket};

/// Read-modify-write the state at the ticket's path, but only while the
/// ticket is still the newest load for that path.
///
/// Returns `false` when a newer load has started; the response is dropped.
pub fn commit_with<T, I, F>(store: &StateStore, ticket: &Ticket, init: I, f: F) -> bool
where
    T: Any + Clone + Send + Sync,
    I: FnOnce() -> T,
    F: FnOnce(&mut T),
{
    if !store.is_current(ticket) {
        tracing::debug!(path = ticket.path(), seq = ticket.seq(), "superseded load dropped");
        return false;
    }
    let mut state = store.get_as::<T>(ticket.path()).unwrap_or_else(init);
    f(&mut state);
    store.commit(ticket, state)
}

/// Read-modify-write only when state of type `T` already exists at `path`.
pub fn update_existing<T, F>(store: &StateStore, path: &str, f: F) -> bool
where
    T: Any + Clone + Send + Sync,
    F: FnOnce(&mut T),
{
    match store.get_as::<T>(path) {
        Some(mut state) => {
            f(&mut state);
            store.set(path, state);
            true
        }
        None => false,
    }
}
