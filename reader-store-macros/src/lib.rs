//! Procedural macros for reader-store

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Mutation)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mutation), supports(enum_any))]
struct MutationOpts {
    ident: syn::Ident,
    data: darling::ast::Data<MutationVariant, ()>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(mutation))]
struct MutationVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit mutation identifier override
    #[darling(default)]
    id: Option<String>,

    /// Explicit action name override
    #[darling(default)]
    action: Option<String>,
}

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(current);
            current = String::new();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Convert PascalCase to SCREAMING_SNAKE_CASE
fn to_screaming_snake_case(s: &str) -> String {
    split_pascal_case(s)
        .iter()
        .map(|part| part.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert PascalCase to lowerCamelCase
fn to_lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Derive macro for the Mutation trait
///
/// Generates:
/// - `id()` returning the variant's mutation identifier
///   (SCREAMING_SNAKE_CASE of the variant name unless overridden)
/// - `action_name()` returning the action that commits it
///   (lowerCamelCase of the variant name unless overridden)
/// - `BINDINGS`, one `(action, mutation)` row per variant in declaration order
///
/// Two variants resolving to the same identifier or action name is a
/// compile error.
///
/// # Example
/// ```ignore
/// #[derive(Mutation, Clone, Debug)]
/// enum ReaderMutation {
///     SetProgress(u32),
///     #[mutation(id = "SET_OFFSETY")]
///     SetOffsetY(i32),
/// }
///
/// let m = ReaderMutation::SetOffsetY(0);
/// assert_eq!(m.id(), "SET_OFFSETY");
/// assert_eq!(m.action_name(), "setOffsetY");
/// ```
#[proc_macro_derive(Mutation, attributes(mutation))]
pub fn derive_mutation(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match MutationOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Mutation can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let resolved: Vec<(&MutationVariant, String, String)> = variants
        .iter()
        .map(|v| {
            let variant_str = v.ident.to_string();
            let id = v
                .id
                .clone()
                .unwrap_or_else(|| to_screaming_snake_case(&variant_str));
            let action = v
                .action
                .clone()
                .unwrap_or_else(|| to_lower_camel_case(&variant_str));
            (v, id, action)
        })
        .collect();

    // Reject duplicate identifiers and action names
    let mut errors: Option<syn::Error> = None;
    let mut seen_ids: HashMap<&str, &syn::Ident> = HashMap::new();
    let mut seen_actions: HashMap<&str, &syn::Ident> = HashMap::new();
    for (v, id, action) in &resolved {
        let mut clashes = Vec::new();
        if let Some(other) = seen_ids.insert(id.as_str(), &v.ident) {
            clashes.push(format!("mutation id `{}` is also used by `{}`", id, other));
        }
        if let Some(other) = seen_actions.insert(action.as_str(), &v.ident) {
            clashes.push(format!("action `{}` is also used by `{}`", action, other));
        }
        for msg in clashes {
            let err = syn::Error::new_spanned(&v.ident, msg);
            match errors.as_mut() {
                Some(existing) => existing.combine(err),
                None => errors = Some(err),
            }
        }
    }
    if let Some(err) = errors {
        return err.to_compile_error().into();
    }

    let patterns: Vec<_> = resolved
        .iter()
        .map(|(v, _, _)| {
            let variant_name = &v.ident;
            match &v.fields.style {
                darling::ast::Style::Unit => quote! { #name::#variant_name },
                darling::ast::Style::Tuple => quote! { #name::#variant_name(..) },
                darling::ast::Style::Struct => quote! { #name::#variant_name { .. } },
            }
        })
        .collect();

    let id_arms = resolved
        .iter()
        .zip(&patterns)
        .map(|((_, id, _), pat)| quote! { #pat => #id });

    let action_arms = resolved
        .iter()
        .zip(&patterns)
        .map(|((_, _, action), pat)| quote! { #pat => #action });

    let bindings = resolved
        .iter()
        .map(|(_, id, action)| quote! { reader_store::Binding::new(#action, #id) });

    // Empty enums have no values to match on
    let (id_body, action_body) = if resolved.is_empty() {
        (quote! { match *self {} }, quote! { match *self {} })
    } else {
        (
            quote! { match self { #(#id_arms),* } },
            quote! { match self { #(#action_arms),* } },
        )
    };

    let expanded = quote! {
        impl reader_store::Mutation for #name {
            const BINDINGS: &'static [reader_store::Binding] = &[
                #(#bindings),*
            ];

            fn id(&self) -> &'static str {
                #id_body
            }

            fn action_name(&self) -> &'static str {
                #action_body
            }
        }
    };

    expanded.into()
}
