//! Attribute macros for console state and request types.
//!
//! - `#[state("path")]`: a view state stored at `path`
//! - `#[request("path")]`: a request payload routed to `path`
//!
//! A fixed path generates `pub const PATH: &'static str`.
//!
//! A templated path such as `"credit/report/{number}"` generates
//! `pub const PATTERN: &'static str = "credit/report/+"` (for subscriptions
//! and handler registration) and `pub fn path(number: &str) -> String`.
//!
//! Missing `Debug`/`Clone` derives are added; `#[state]` also adds
//! `PartialEq`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod path;
mod request;
mod state;

/// Define a view state type.
///
/// ```ignore
/// #[state("users/list")]
/// pub struct UsersState {
///     pub loading: bool,
///     pub users: Vec<User>,
/// }
/// ```
#[proc_macro_attribute]
pub fn state(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    state::expand(attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Define a request payload type.
///
/// ```ignore
/// #[request("credit/report/load")]
/// pub struct LoadReportReq {
///     pub report_number: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn request(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    request::expand(attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
