use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            visibility,
            convention,
            parameters,
        } = value;
        let visibility = visibility.tokens;
        let convention = convention.tokens;

        let clp = if parameters.is_empty() {
            quote! {
                let clp = ::targ::CommandLineParser::new(#convention);
            }
        } else {
            let fields = parameters.into_iter().map(TokenStream2::from);

            quote! {
                let mut clp = ::targ::CommandLineParser::new(#convention);
                #( #fields )*
            }
        };

        quote! {
            impl #struct_name {
                fn targ_parser(target: &mut #struct_name) -> ::targ::GeneralParser<'_> {
                    #clp
                    clp.build()
                }

                #visibility fn targ_parse_argv(argv: &[&str]) -> Result<#struct_name, ::targ::ParseError> {
                    let mut target = #struct_name::default();
                    #struct_name::targ_parser(&mut target).parse_argv(argv)?;
                    Ok(target)
                }

                #visibility fn targ_parse() -> #struct_name {
                    let mut target = #struct_name::default();
                    #struct_name::targ_parser(&mut target).parse();
                    target
                }
            }
        }
    }
}
