//! Credit administration console.
//!
//! Structure:
//! - `dsl/model/`: records and wire enums of the credit platform API
//! - `dsl/state/`: view state definitions (`#[state]`)
//! - `dsl/request/`: request definitions (`#[request]`)
//! - `src/service/`: domain services over the shared API client
//! - `src/handlers/`: request handlers and Flux wiring
//! - `src/present/`: pure formatting, label tables, score bands, pagination
//! - `src/view/`: text renderers
//!
//! A shell builds a [`Flux`](credit_flux::Flux), calls
//! [`handlers::register_handlers`], emits requests and renders from state.

// API records.
#[path = "../dsl/model/mod.rs"]
pub mod model;

// View state types: flat access as `crate::state::*`.
#[path = "../dsl/state/mod.rs"]
pub mod state;

// Request types: flat access as `crate::request::*`.
#[path = "../dsl/request/mod.rs"]
pub mod request;

pub mod handlers;
pub mod present;
pub mod service;
pub mod view;

pub use handlers::{register_handlers, CreditContext, DEFAULT_PAGE_SIZE};
