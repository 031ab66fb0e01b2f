#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the confdrift workspace.
//!
//! Every crate in the workspace declares its error enum with [`macro@confdrift_error`] so that
//! errors look and behave the same everywhere: a `context` slot, a `...Ext` trait for
//! attaching that context, and `From` conversions for wrapped source errors.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Injected behaviour
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already derived.
/// * **Context trait**: a companion `<Name>Ext` trait with `.context(...)`, implemented for
///   `Result<T, Name>` and for `Result<T, Source>` of every wrapped source type.
/// * **Conversions**: `From<Source>` for every variant with a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
/// * **`format_context`**: a module-level helper rendering the context as ` (…)` for use in
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The item must be an enum with named-field variants only.
/// 2. `context` fields must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source carry exactly `source` and `context`.
///
/// # Example
///
/// ```rust
/// use confdrift_derive::confdrift_error;
/// use std::borrow::Cow;
///
/// #[confdrift_error]
/// pub enum LoadError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context(format!("Reading {path}"))
/// }
///
/// let err = read("/definitely/not/here").unwrap_err();
/// assert!(err.to_string().starts_with("I/O failure (Reading /definitely/not/here)"));
///
/// let internal: LoadError = "boom".into();
/// assert_eq!(internal.to_string(), "Internal error: boom");
/// ```
///
/// Tuple variants are rejected:
///
/// ```compile_fail
/// #[confdrift_derive::confdrift_error]
/// pub enum Broken {
///     #[error("I/O error: {0}")]
///     Io(std::io::Error),
/// }
/// ```
///
/// So are source variants without a context slot:
///
/// ```compile_fail
/// #[confdrift_derive::confdrift_error]
/// pub enum Broken {
///     #[error("I/O error: {source}")]
///     Io { source: std::io::Error },
/// }
/// ```
#[proc_macro_attribute]
pub fn confdrift_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
