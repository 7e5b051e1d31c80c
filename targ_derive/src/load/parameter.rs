use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, Names, ParameterType};
use quote::quote;

const FIELD_SINGLETONS: &[&str] = &["positional", "skip"];
const FIELD_PAIRS: &[&str] = &["short", "long", "help"];

impl DeriveParameter {
    /// Load the parameter declared by a struct field.
    /// Returns `None` for a `#[targ(skip)]` field.
    pub(crate) fn load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(value, "Invalid - fields must be named.")
        })?;
        let attributes = IntermediateAttributes::collect(&value.attrs)?;
        attributes.allow(field_name.span(), FIELD_SINGLETONS, FIELD_PAIRS)?;

        let skip = attributes.singletons.contains("skip");
        let positional = attributes.singletons.contains("positional");
        let short = attributes.single(field_name.span(), "short")?;
        let long = attributes.single(field_name.span(), "long")?;
        let help = attributes.single(field_name.span(), "help")?;

        if skip {
            if attributes.singletons.len() > 1 || !attributes.pairs.is_empty() {
                return Err(syn::Error::new(
                    field_name.span(),
                    "Invalid - `#[targ(skip)]` cannot be combined with other attributes.",
                ));
            }

            return Ok(None);
        }

        if let Some(short) = short {
            syn::parse2::<syn::LitChar>(short.tokens.clone()).map_err(|_| {
                syn::Error::new(field_name.span(), "Invalid - `short` must be a char literal.")
            })?;
        }

        if let Some(long) = long {
            let literal = syn::parse2::<syn::LitStr>(long.tokens.clone()).map_err(|_| {
                syn::Error::new(field_name.span(), "Invalid - `long` must be a string literal.")
            })?;

            if literal.value().is_empty() {
                return Err(syn::Error::new(
                    field_name.span(),
                    "Invalid - `long` must not be empty.",
                ));
            }
        }

        let parameter_type = parameter_type(&value.ty);
        let names = if positional {
            if short.is_some() {
                return Err(incompatible_error(
                    &field_name,
                    "#[targ(positional)]",
                    "#[targ(short = ..)]",
                ));
            }

            if long.is_some() {
                return Err(incompatible_error(
                    &field_name,
                    "#[targ(positional)]",
                    "#[targ(long = ..)]",
                ));
            }

            match parameter_type {
                ParameterType::Switch => {
                    return Err(incompatible_error(&field_name, "#[targ(positional)]", "bool"));
                }
                ParameterType::Optional => {
                    return Err(incompatible_error(
                        &field_name,
                        "#[targ(positional)]",
                        "Option<..>",
                    ));
                }
                ParameterType::Scalar | ParameterType::Collection => {}
            };

            let name = field_name.to_string().to_uppercase();
            Names::Positional(DeriveValue {
                tokens: quote! { #name },
            })
        } else {
            match (short, long) {
                (Some(short), Some(long)) => Names::Option {
                    short: DeriveValue {
                        tokens: short.tokens.clone(),
                    },
                    long: DeriveValue {
                        tokens: long.tokens.clone(),
                    },
                },
                (Some(short), None) => Names::Short(DeriveValue {
                    tokens: short.tokens.clone(),
                }),
                (None, Some(long)) => Names::Long(DeriveValue {
                    tokens: long.tokens.clone(),
                }),
                (None, None) => {
                    let name = field_name.to_string().replace('_', "-");
                    Names::Long(DeriveValue {
                        tokens: quote! { #name },
                    })
                }
            }
        };

        Ok(Some(DeriveParameter {
            field_name,
            names,
            parameter_type,
            help: help.map(|h| DeriveValue {
                tokens: h.tokens.clone(),
            }),
        }))
    }
}

fn parameter_type(ty: &syn::Type) -> ParameterType {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => match segment.ident.to_string().as_str() {
                "bool" => ParameterType::Switch,
                "Option" => ParameterType::Optional,
                "Vec" | "HashSet" => ParameterType::Collection,
                _ => ParameterType::Scalar,
            },
            None => ParameterType::Scalar,
        },
        _ => ParameterType::Scalar,
    }
}
