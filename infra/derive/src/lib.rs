#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@articula_error`] turns an enum into a `thiserror` error with a companion
//!   `...Ext` trait for attaching context to results.
//! * [`macro@articula_slice`] turns a struct into an `Arc`-backed feature slice that can be
//!   registered once and shared by reference.
//!
//! The doc examples are `ignore`d because a proc-macro crate cannot use its own macros;
//! see the consuming crates for compiled usages.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: generates `<Name>Ext` with `.context(...)`, implemented for
///   `Result<T, Name>` and for `Result<T, Source>` of every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for each variant with a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Formatting**: a module-local `format_context` helper rendering the context as ` (...)`.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. Variants with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[articula_derive::articula_error]
/// pub enum CatalogError {
///     #[error("Invalid dataset{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(text: &str) -> Result<serde_json::Value, CatalogError> {
///     serde_json::from_str(text).context("Parsing dataset")
/// }
/// ```
#[proc_macro_attribute]
pub fn articula_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap-to-clone
/// `Arc` wrapper that derefs to the inner state and implements
/// `articula_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[articula_derive::articula_slice]
/// pub struct Consult {
///     pub catalog: Catalog,
/// }
///
/// let slice = Consult::new(ConsultInner { catalog });
/// let shared = slice.clone(); // same catalog, no copy
/// ```
#[proc_macro_attribute]
pub fn articula_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
