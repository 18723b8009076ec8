//! Path attribute parsing and the code shared by `#[state]` and `#[request]`.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, ItemStruct, LitStr};

/// A parsed `"a/{b}/c"` path attribute.
pub struct PathSpec {
    raw: String,
    segments: Vec<Segment>,
    span: Span,
}

enum Segment {
    Literal(String),
    Param(String),
}

impl PathSpec {
    pub fn parse(attr: TokenStream) -> syn::Result<Self> {
        let lit: LitStr = syn::parse2(attr)?;
        let raw = lit.value();
        if raw.is_empty() {
            return Err(syn::Error::new(lit.span(), "path cannot be empty"));
        }

        let mut segments = Vec::new();
        for segment in raw.split('/') {
            if segment.is_empty() {
                return Err(syn::Error::new(lit.span(), "path has an empty segment"));
            }
            if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if syn::parse_str::<Ident>(name).is_err() {
                    return Err(syn::Error::new(
                        lit.span(),
                        format!("`{}` is not a valid parameter name", name),
                    ));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if segment.contains(['{', '}', '+', '#']) {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("invalid path segment `{}`", segment),
                ));
            } else {
                segments.push(Segment::Literal(segment.to_string()));
            }
        }

        Ok(Self {
            raw,
            segments,
            span: lit.span(),
        })
    }

    fn params(&self) -> Vec<Ident> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(Ident::new(name, self.span)),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Associated items for the path: `PATH`, or `PATTERN` + `path(..)`.
    pub fn items(&self) -> TokenStream {
        let params = self.params();
        if params.is_empty() {
            let raw = &self.raw;
            return quote! {
                /// Flux path of this type.
                pub const PATH: &'static str = #raw;
            };
        }

        let pattern = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(l) => l.as_str(),
                Segment::Param(_) => "+",
            })
            .collect::<Vec<_>>()
            .join("/");
        let fmt = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(l) => l.replace('{', "{{").replace('}', "}}"),
                Segment::Param(_) => "{}".to_string(),
            })
            .collect::<Vec<_>>()
            .join("/");
        let raw = &self.raw;
        let doc = format!("Concrete path for `{}`.", raw);

        quote! {
            /// Wildcard pattern matching every instance of this path.
            pub const PATTERN: &'static str = #pattern;

            #[doc = #doc]
            pub fn path(#(#params: &str),*) -> String {
                format!(#fmt, #(#params),*)
            }
        }
    }
}

/// Re-emit `item` with the missing `required` derives added and `items`
/// placed in an inherent impl.
pub fn emit(item: ItemStruct, required: &[&str], items: TokenStream) -> TokenStream {
    let present = derived_idents(&item);
    let missing: Vec<Ident> = required
        .iter()
        .filter(|name| !present.iter().any(|p| p == *name))
        .map(|name| Ident::new(name, Span::call_site()))
        .collect();

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let extra = if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    };

    quote! {
        #extra
        #item

        impl #impl_generics #name #ty_generics #where_clause {
            #items
        }
    }
}

fn derived_idents(item: &ItemStruct) -> Vec<String> {
    let mut out = Vec::new();
    for attr in item.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let parsed = attr.parse_args_with(
            syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
        );
        if let Ok(paths) = parsed {
            out.extend(
                paths
                    .iter()
                    .filter_map(|p| p.segments.last())
                    .map(|s| s.ident.to_string()),
            );
        }
    }
    out
}
