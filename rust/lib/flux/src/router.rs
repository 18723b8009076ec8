use std::any::{type_name, Any};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::store::StateStore;
use crate::trie::Trie;

/// A boxed, `Send` future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased payload carried by an emitted request.
pub type Payload = Arc<dyn Any + Send + Sync>;

type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Maps request paths to async handlers.
///
/// Several handlers may match one path (through `+`/`#`); they run one after
/// another in match order. Emitting a path nobody handles is a no-op.
pub struct Router {
    trie: Trie<ErasedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Register an untyped handler. It receives the emitted path, the raw
    /// payload, and the store.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.trie.insert(pattern, handler);
    }

    /// Register a handler for requests of type `R`.
    ///
    /// The payload is downcast and cloned before the handler runs. A payload
    /// of another type is logged and skipped.
    pub fn on_request<R, F, Fut>(&self, pattern: &str, handler: F)
    where
        R: Any + Clone + Send + Sync,
        F: Fn(R, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.on(pattern, move |path, payload, store| {
            let handler = Arc::clone(&handler);
            let req = payload.downcast_ref::<R>().cloned();
            async move {
                match req {
                    Some(req) => handler(req, store).await,
                    None => tracing::warn!(
                        %path,
                        expected = type_name::<R>(),
                        "request payload has unexpected type"
                    ),
                }
            }
        });
    }

    /// Run every handler matching `path`, sequentially.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        let handlers = self.trie.match_topic(path);
        if handlers.is_empty() {
            tracing::debug!(%path, "no handler for request");
        }
        for handler in handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Whether a handler is registered under exactly `pattern`.
    pub fn has_handler(&self, pattern: &str) -> bool {
        self.trie.has_pattern(pattern)
    }

    /// Whether any handler would run for `path`.
    pub fn matches(&self, path: &str) -> bool {
        !self.trie.match_topic(path).is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
