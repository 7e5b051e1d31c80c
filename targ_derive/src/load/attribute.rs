use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut attributes = IntermediateAttributes::default();

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = attributes.pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(ref path) => match path.path.get_ident() {
                    Some(ident) => {
                        attributes.singletons.insert(ident.to_string());
                    }
                    None => {
                        return Err(syn::Error::new_spanned(
                            &expression,
                            "Unparseable attribute: expected an identifier.",
                        ));
                    }
                },
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        "Unparseable attribute: expected `key = value` or `key`.",
                    ));
                }
            };
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    /// Collect every `#[targ(..)]` attribute, merging them.
    pub(crate) fn collect(attrs: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut merged = IntermediateAttributes::default();

        for attribute in attrs {
            if attribute.path().is_ident("targ") {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                merged.singletons.extend(singletons);

                for (key, values) in pairs {
                    merged.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(merged)
    }

    /// Reject any key outside of the allowed ones.
    pub(crate) fn allow(
        &self,
        span: proc_macro2::Span,
        singletons: &[&str],
        pairs: &[&str],
    ) -> Result<(), syn::Error> {
        let mut unknown: Vec<&String> = self
            .singletons
            .iter()
            .filter(|s| !singletons.contains(&s.as_str()))
            .chain(self.pairs.keys().filter(|p| !pairs.contains(&p.as_str())))
            .collect();
        unknown.sort();

        match unknown.first() {
            Some(key) => Err(syn::Error::new(
                span,
                format!("Invalid - unknown attribute `{key}`."),
            )),
            None => Ok(()),
        }
    }

    /// The single value of a pair, erroring if the pair is repeated.
    pub(crate) fn single(
        &self,
        span: proc_macro2::Span,
        key: &str,
    ) -> Result<Option<&DeriveValue>, syn::Error> {
        match self.pairs.get(key).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value)),
            Some(_) => Err(syn::Error::new(
                span,
                format!("Invalid - attribute `{key}` cannot be repeated."),
            )),
        }
    }
}
