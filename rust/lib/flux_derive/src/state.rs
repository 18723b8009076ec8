//! `#[state("path")]` expansion.

use proc_macro2::TokenStream;
use syn::ItemStruct;

use crate::path::{emit, PathSpec};

pub fn expand(attr: TokenStream, item: ItemStruct) -> syn::Result<TokenStream> {
    let spec = PathSpec::parse(attr)?;
    Ok(emit(item, &["Debug", "Clone", "PartialEq"], spec.items()))
}
