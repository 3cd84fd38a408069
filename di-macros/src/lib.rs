//! Compile-time dependency injection macros for the HugeGraph client.
//!
//! - `#[derive(Context)]` makes each field of a context struct extractable
//! - `#[derive(FromContext)]` builds a struct by resolving each field from a context
//!
//! Generated code refers to `crate::FromRef`, which the consuming crate
//! re-exports at its root.

use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Derive macro for the DI root.
///
/// Generates `impl FromRef<Ctx> for FieldType` for every field, so
/// `AppRest::from_ref(&ctx)` returns a clone of `ctx.rest`.
/// Field types must be distinct and `Clone`.
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let fields = match named_fields(&input, "Context") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = &field.ty;
        quote! {
            impl #impl_generics crate::FromRef<#name #ty_generics> for #field_type #where_clause {
                fn from_ref(ctx: &#name #ty_generics) -> Self {
                    ctx.#field_name.clone()
                }
            }
        }
    });

    quote! { #(#impls)* }.into()
}

/// Derive macro for types built from a context.
///
/// Each field is resolved with `<FieldType as FromRef<Context>>::from_ref(ctx)`,
/// where `Context` is the type of that name in scope at the derive site.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct SchemaManager {
///     property_keys: PropertyKeyApi,
///     vertex_labels: VertexLabelApi,
/// }
/// ```
#[proc_macro_derive(FromContext)]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let fields = match named_fields(&input, "FromContext") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let inits = fields.iter().map(|field| {
        let field_name = &field.ident;
        let field_type = &field.ty;
        quote! {
            #field_name: <#field_type as crate::FromRef<Context>>::from_ref(ctx)
        }
    });

    quote! {
        impl #impl_generics crate::FromRef<Context> for #name #ty_generics #where_clause {
            fn from_ref(ctx: &Context) -> Self {
                Self { #(#inits),* }
            }
        }
    }
    .into()
}

/// Returns the named fields of a struct, or a spanned error.
fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{derive} can only be derived for structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{derive} can only be derived for structs"),
        )),
    }
}
