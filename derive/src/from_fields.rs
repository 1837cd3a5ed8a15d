use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Data, DeriveInput, Error, Expr, ExprLit, Field, Fields, Ident, Lit, Result, Type};

/// Number of indices a `FieldMask` can record.
const MASK_CAPACITY: u64 = 32;

pub(crate) fn expand_from_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromFields` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromFields` may only be derived on structs with named fields.",
        ))?
    };

    let mut decoded = Vec::new();
    let mut defaulted = Vec::new();

    for field in &fields.named {
        match FieldMetadata::parse(field)? {
            Some(metadata) => decoded.push(metadata),
            None => defaulted.push(field.ident.clone().unwrap()),
        }
    }

    let mut seen = HashSet::new();

    for field in &decoded {
        if !seen.insert(field.index.to_token_stream().to_string()) {
            Err(Error::new_spanned(
                &field.index,
                "Field indices must be unique.",
            ))?
        }
    }

    let bindings: Vec<Ident> = decoded
        .iter()
        .map(|field| format_ident!("__{}", field.name))
        .collect();

    let names = decoded.iter().map(|field| &field.name);

    let parses = decoded.iter().zip(&bindings).map(|(field, binding)| {
        let FieldMetadata { index, ty, .. } = field;

        quote! {
            let #binding = <Self as ::rawimu::decode::text::FromFields>::parse_field::<#ty, _>(
                fields, #index, &mut failed,
            );
        }
    });

    let body = if decoded.is_empty() {
        quote! {
            let _ = fields;
            Ok(Self {
                #(#defaulted: Default::default(),)*
            })
        }
    } else {
        quote! {
            let mut failed = ::rawimu::decode::text::FieldMask::empty();

            #(#parses)*

            match (#(#bindings,)*) {
                (#(Some(#bindings),)*) => Ok(Self {
                    #(#names: #bindings,)*
                    #(#defaulted: Default::default(),)*
                }),
                _ => Err(failed),
            }
        }
    };

    let name = &input.ident;

    let expanded = quote! {
        impl ::rawimu::decode::text::FromFields for #name {
            fn from_fields<S: AsRef<str>>(
                fields: &[S],
            ) -> Result<Self, ::rawimu::decode::text::FieldMask> {
                #body
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    ty: Type,
    index: Expr,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let index: Expr = attr.meta.require_list()?.parse_args()?;

        match &index {
            Expr::Lit(ExprLit {
                lit: Lit::Int(literal),
                ..
            }) => {
                if literal.base10_parse::<u64>()? >= MASK_CAPACITY {
                    Err(Error::new_spanned(
                        literal,
                        "Field index must be below 32.",
                    ))?
                }
            }
            Expr::Lit(_) => Err(Error::new_spanned(
                &index,
                "Field index must be an integer literal or a constant.",
            ))?,
            _ => {}
        }

        Ok(Some(Self {
            name,
            ty: field.ty.clone(),
            index,
        }))
    }
}
