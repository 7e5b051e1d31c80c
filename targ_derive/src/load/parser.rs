use crate::model::{DeriveParameter, DeriveParser, DeriveValue, IntermediateAttributes, Names};
use quote::{quote, ToTokens};
use std::collections::HashSet;

const STRUCT_PAIRS: &[&str] = &["convention"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        attributes.allow(value.ident.span(), &[], STRUCT_PAIRS)?;

        let convention = match attributes.single(value.ident.span(), "convention")? {
            Some(DeriveValue { tokens }) => quote! { #tokens },
            None => quote! { ::targ::Unix::default() },
        };

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - parser struct cannot be generic.",
            ));
        }

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::load)
                .filter_map(Result::transpose)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - parser must be a struct with named fields.",
                ));
            }
        };

        check_unique(&parameters)?;

        Ok(DeriveParser {
            struct_name: value.ident,
            visibility: DeriveValue {
                tokens: value.vis.to_token_stream(),
            },
            convention: DeriveValue { tokens: convention },
            parameters,
        })
    }
}

// Names are literals, so a repeated one is caught here rather than when the parser is built.
fn check_unique(parameters: &[DeriveParameter]) -> Result<(), syn::Error> {
    let mut shorts = HashSet::new();
    let mut longs = HashSet::new();
    let mut positionals = HashSet::new();

    for parameter in parameters {
        let (short, long, positional) = match &parameter.names {
            Names::Short(short) => (Some(short), None, None),
            Names::Long(long) => (None, Some(long), None),
            Names::Option { short, long } => (Some(short), Some(long), None),
            Names::Positional(name) => (None, None, Some(name)),
        };

        if let Some(short) = short {
            let short = syn::parse2::<syn::LitChar>(short.tokens.clone())?.value();

            if short.is_whitespace() {
                return Err(syn::Error::new(
                    parameter.field_name.span(),
                    "Invalid - `short` must not be whitespace.",
                ));
            }

            if !shorts.insert(short) {
                return Err(syn::Error::new(
                    parameter.field_name.span(),
                    format!("Invalid - duplicate short option '{short}'."),
                ));
            }
        }

        if let Some(long) = long {
            let long = syn::parse2::<syn::LitStr>(long.tokens.clone())?.value();

            if !longs.insert(long.clone()) {
                return Err(syn::Error::new(
                    parameter.field_name.span(),
                    format!("Invalid - duplicate long option '{long}'."),
                ));
            }
        }

        if let Some(positional) = positional {
            let positional = syn::parse2::<syn::LitStr>(positional.tokens.clone())?.value();

            if !positionals.insert(positional.clone()) {
                return Err(syn::Error::new(
                    parameter.field_name.span(),
                    format!("Invalid - duplicate positional '{positional}'."),
                ));
            }
        }
    }

    Ok(())
}
