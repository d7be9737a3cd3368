//! `fmt!` implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! fmt!("{} => {}", sub(json!(1), "%d"), inner)
//!
//! // Generates:
//! // ::fmtsub::Fmt::from_raw_parts(
//! //     vec![String::from(""), String::from(" => "), String::from("")],
//! //     vec![::fmtsub::Slot::from(sub(json!(1), "%d")), ::fmtsub::Slot::from(inner)],
//! // )
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Error, Expr, LitStr, Result, Token,
};

use crate::split::{split_placeholders, SplitError};

/// Parsed `fmt!` arguments: a template literal and its slot expressions.
pub(crate) struct FmtInput {
    template: LitStr,
    args: Vec<Expr>,
}

impl Parse for FmtInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let template: LitStr = input.parse()?;

        if input.is_empty() {
            return Ok(FmtInput {
                template,
                args: Vec::new(),
            });
        }

        input.parse::<Token![,]>()?;
        let args: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(input)?;

        Ok(FmtInput {
            template,
            args: args.into_iter().collect(),
        })
    }
}

fn split_message(error: SplitError) -> String {
    match error {
        SplitError::Unclosed { offset } => {
            format!("unclosed placeholder at byte {offset}; use `{{{{` for a literal brace")
        }
        SplitError::Invalid { offset } => format!(
            "invalid placeholder at byte {offset}: only `{{}}` is supported, use `{{{{` for a literal brace"
        ),
    }
}

pub(crate) fn fmt_impl(input: FmtInput) -> Result<TokenStream> {
    let FmtInput { template, args } = input;

    let segments = split_placeholders(&template.value())
        .map_err(|e| Error::new(template.span(), split_message(e)))?;

    let placeholders = segments.len() - 1;
    if placeholders != args.len() {
        return Err(Error::new(
            template.span(),
            format!(
                "template has {} placeholder(s) but {} argument(s) were given",
                placeholders,
                args.len()
            ),
        ));
    }

    let segments = segments.iter().map(|segment| {
        let lit = LitStr::new(segment, template.span());
        quote! { ::std::string::String::from(#lit) }
    });
    let slots = args.iter().map(|arg| quote! { ::fmtsub::Slot::from(#arg) });

    Ok(quote! {
        ::fmtsub::Fmt::from_raw_parts(
            ::std::vec![#(#segments),*],
            ::std::vec![#(#slots),*],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_error_messages() {
        let input: FmtInput = syn::parse_quote!("Hello {name}");
        let err = fmt_impl(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid placeholder at byte 6: only `{}` is supported, use `{{` for a literal brace"
        );

        let input: FmtInput = syn::parse_quote!("ab{");
        let err = fmt_impl(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unclosed placeholder at byte 2; use `{{` for a literal brace"
        );
    }

    #[test]
    fn test_parse_input_with_trailing_comma() {
        let input: FmtInput = syn::parse_quote!("{} {}", a, b,);
        assert_eq!(input.args.len(), 2);
        assert_eq!(input.template.value(), "{} {}");
    }

    #[test]
    fn test_parse_literal_only() {
        let input: FmtInput = syn::parse_quote!("plain");
        assert!(input.args.is_empty());
    }

    #[test]
    fn test_count_mismatch_is_an_error() {
        let input: FmtInput = syn::parse_quote!("{} {}", only_one);
        let err = fmt_impl(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "template has 2 placeholder(s) but 1 argument(s) were given"
        );
    }

    #[test]
    fn test_expansion_uses_unchecked_constructor() {
        let input: FmtInput = syn::parse_quote!("x = {}", value);
        let tokens = fmt_impl(input).unwrap().to_string();
        assert!(tokens.contains("from_raw_parts"));
        assert!(tokens.contains("Slot :: from (value)"));
    }
}
