//! Flux: path-addressed view state for the credit console.
//!
//! Rust owns every view's state; a shell (CLI, desktop, web) only renders.
//!
//! # Primitives
//!
//! - `get(path)`: read view state (shared, no copy)
//! - `emit(path, request)`: run the handlers registered for a request path
//! - `subscribe(pattern)`: observe state writes
//!
//! # Paths
//!
//! State and requests share one `/`-separated namespace:
//! - List views: `users/list`, `roles/history`, `credit/my-reports`
//! - Keyed views: `credit/report/{number}`, `business/{id}`
//! - Shell: `app/location`
//!
//! Subscriptions and handlers match with MQTT-style wildcards: `+` for one
//! level, `#` for the rest.
//!
//! # Sequencing
//!
//! Loads that can be superseded take a [`Ticket`] from
//! [`StateStore::begin`]; only the newest ticket for a path may
//! [`StateStore::commit`].

pub mod app;
pub mod route;
pub mod router;
pub mod store;
pub mod trie;
pub mod value;

pub use app::Flux;
pub use route::{Location, QueryParams};
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId, Ticket};
