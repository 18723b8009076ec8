//! `#[request("path")]` expansion.
//!
//! Requests are cloned out of the emitted payload by the router, so `Clone`
//! is always present; `PartialEq` is left to the author.

use proc_macro2::TokenStream;
use syn::ItemStruct;

use crate::path::{emit, PathSpec};

pub fn expand(attr: TokenStream, item: ItemStruct) -> syn::Result<TokenStream> {
    let spec = PathSpec::parse(attr)?;
    Ok(emit(item, &["Debug", "Clone"], spec.items()))
}
