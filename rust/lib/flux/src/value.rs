use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted view state.
///
/// Readers share one allocation; cloning is an atomic increment.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Borrow the value as `T`, or `None` if it holds another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone the value out as `T`.
    ///
    /// Handlers use this for read-modify-write on view state.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Strong reference count of the shared allocation.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type_id", &(*self.inner).type_id())
            .finish()
    }
}

/// Handle returned by `StateStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Sequencing ticket for one load of one state path.
///
/// `StateStore::begin` hands out tickets in increasing order per path; only
/// the newest ticket may commit. A response that arrives after its view has
/// asked for something newer is dropped instead of overwriting fresher state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub(crate) path: String,
    pub(crate) seq: u64,
}

impl Ticket {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
