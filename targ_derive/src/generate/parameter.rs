use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParameter, Names, ParameterType};

impl From<DeriveParameter> for TokenStream2 {
    fn from(value: DeriveParameter) -> Self {
        let DeriveParameter {
            field_name,
            names,
            parameter_type,
            help,
        } = value;

        let field = match parameter_type {
            ParameterType::Collection => quote! { ::targ::Collection::new(&mut target.#field_name) },
            ParameterType::Optional => quote! { ::targ::Optional::new(&mut target.#field_name) },
            ParameterType::Scalar => quote! { ::targ::Scalar::new(&mut target.#field_name) },
            ParameterType::Switch => quote! { ::targ::Switch::new(&mut target.#field_name) },
        };

        let parameter = match names {
            Names::Short(short) => {
                let short = short.tokens;
                quote! { ::targ::Parameter::short(#field, #short) }
            }
            Names::Long(long) => {
                let long = long.tokens;
                quote! { ::targ::Parameter::long(#field, #long) }
            }
            Names::Option { short, long } => {
                let short = short.tokens;
                let long = long.tokens;
                quote! { ::targ::Parameter::option(#field, #short, #long) }
            }
            Names::Positional(name) => {
                let name = name.tokens;
                quote! { ::targ::Parameter::positional(#field, #name) }
            }
        };

        match help {
            Some(help) => {
                let help = help.tokens;
                quote! { clp = clp.add(#parameter.help(#help)); }
            }
            None => quote! { clp = clp.add(#parameter); },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_switch_short_help() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("verbose"),
            names: Names::Short(DeriveValue {
                tokens: Literal::character('v').into_token_stream(),
            }),
            parameter_type: ParameterType::Switch,
            help: Some(DeriveValue {
                tokens: Literal::string("Show more").into_token_stream(),
            }),
        };

        // Execute
        let token_stream = TokenStream2::from(parameter);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                clp = clp.add(::targ::Parameter::short(::targ::Switch::new(&mut target.verbose), 'v').help("Show more"));
            }
            .to_string()
        );
    }

    #[test]
    fn render_optional_long() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("level"),
            names: Names::Long(DeriveValue {
                tokens: Literal::string("level").into_token_stream(),
            }),
            parameter_type: ParameterType::Optional,
            help: None,
        };

        // Execute
        let token_stream = TokenStream2::from(parameter);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                clp = clp.add(::targ::Parameter::long(::targ::Optional::new(&mut target.level), "level"));
            }
            .to_string()
        );
    }

    #[test]
    fn render_collection_option() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("multiple"),
            names: Names::Option {
                short: DeriveValue {
                    tokens: Literal::character('m').into_token_stream(),
                },
                long: DeriveValue {
                    tokens: Literal::string("multiple").into_token_stream(),
                },
            },
            parameter_type: ParameterType::Collection,
            help: None,
        };

        // Execute
        let token_stream = TokenStream2::from(parameter);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                clp = clp.add(::targ::Parameter::option(::targ::Collection::new(&mut target.multiple), 'm', "multiple"));
            }
            .to_string()
        );
    }

    #[test]
    fn render_scalar_positional() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("input"),
            names: Names::Positional(DeriveValue {
                tokens: Literal::string("INPUT").into_token_stream(),
            }),
            parameter_type: ParameterType::Scalar,
            help: None,
        };

        // Execute
        let token_stream = TokenStream2::from(parameter);

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                clp = clp.add(::targ::Parameter::positional(::targ::Scalar::new(&mut target.input), "INPUT"));
            }
            .to_string()
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
