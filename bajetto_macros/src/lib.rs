extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Ident, LitStr, parse_macro_input};

/// Derives `bajetto_core::form::Form` for a struct with named fields.
///
/// Field attributes:
/// - `#[form(name = "...")]` renames the field in the value and validator maps.
/// - `#[form(validator = <expr>)]` guards the field with a `Box<dyn Validator>`.
/// - `#[form(skip)]` leaves the field out of the form entirely.
///
/// Every included field must be `Clone` and convertible into `FieldValue`.
#[proc_macro_derive(Form, attributes(form))]
pub fn form_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct FormField {
    ident: Ident,
    key: String,
    validator: Option<Expr>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Form can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Form can only be derived for structs",
            ));
        }
    };

    let mut form_fields = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(parsed) = parse_field(field)? {
            form_fields.push(parsed);
        }
    }

    let value_inserts = form_fields.iter().map(|f| {
        let ident = &f.ident;
        let key = &f.key;
        quote! {
            values.insert(
                ::std::string::String::from(#key),
                ::bajetto_core::validators::FieldValue::from(
                    ::core::clone::Clone::clone(&self.#ident),
                ),
            );
        }
    });

    let validator_inserts = form_fields.iter().filter_map(|f| {
        let key = &f.key;
        f.validator.as_ref().map(|validator| {
            quote! {
                validators.insert(::std::string::String::from(#key), #validator);
            }
        })
    });

    Ok(quote! {
        impl #impl_generics ::bajetto_core::form::Form for #name #ty_generics #where_clause {
            fn values(&self) -> ::bajetto_core::form::FormValues {
                #[allow(unused_mut)]
                let mut values = ::bajetto_core::form::FormValues::new();
                #(#value_inserts)*
                values
            }

            fn validators() -> ::bajetto_core::form::FormValidators {
                #[allow(unused_mut)]
                let mut validators = ::bajetto_core::form::FormValidators::new();
                #(#validator_inserts)*
                validators
            }
        }
    })
}

// --- Helper Functions for Attribute Parsing ---

/// Reads the `#[form(...)]` attributes of one field. `None` means skipped.
fn parse_field(field: &syn::Field) -> syn::Result<Option<FormField>> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "Expected a named field"))?;
    let mut key = ident.to_string();
    let mut validator = None;
    let mut skip = false;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("form")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                key = lit.value();
                Ok(())
            } else if meta.path.is_ident("validator") {
                validator = Some(meta.value()?.parse::<Expr>()?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown form attribute, expected `name`, `validator` or `skip`"))
            }
        })?;
    }

    if skip {
        if validator.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "a skipped field cannot carry a validator",
            ));
        }
        return Ok(None);
    }

    Ok(Some(FormField {
        ident,
        key,
        validator,
    }))
}
