use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Collection,
    Optional,
    Scalar,
    Switch,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Names {
    Short(DeriveValue),
    Long(DeriveValue),
    Option {
        short: DeriveValue,
        long: DeriveValue,
    },
    Positional(DeriveValue),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub names: Names,
    pub parameter_type: ParameterType,
    pub help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub visibility: DeriveValue,
    pub convention: DeriveValue,
    pub parameters: Vec<DeriveParameter>,
}
