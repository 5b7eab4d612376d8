//! Expansion of `#[derive(ErrorKind)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Data,
    DeriveInput,
    Expr,
    ExprArray,
    Fields,
    Ident,
    Result,
};

/// A struct deriving `ErrorKind`, along with the contents of its `#[error(...)]` attribute.
pub struct ErrorKindTarget {
    /// The name of the struct.
    pub name: Ident,

    /// Names of the struct's fields, which are in scope in the `message`, `labels` and `help`
    /// expressions.
    fields: Vec<Ident>,

    message: Expr,

    /// The text of each label, matched with the error's spans in order.
    labels: Vec<Expr>,

    help: Option<Expr>,
}

/// Collects the field names of the struct, rejecting anything the derive cannot bind.
fn field_names(item: &DeriveInput) -> Result<Vec<Ident>> {
    let Data::Struct(data) = &item.data else {
        return Err(syn::Error::new_spanned(&item.ident, "`ErrorKind` can only be derived for structs"));
    };

    match &data.fields {
        Fields::Named(named) => Ok(named.named.iter().filter_map(|field| field.ident.clone()).collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            &item.ident,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
    }
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: DeriveInput = input.parse()?;
        let fields = field_names(&item)?;

        let attr = item.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "missing `#[error(...)]` attribute"))?;

        let mut message = None;
        let mut labels = Vec::new();
        let mut help = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("message") {
                message = Some(meta.value()?.parse::<Expr>()?);
            } else if meta.path.is_ident("labels") {
                let array: ExprArray = meta.value()?.parse()?;
                labels = array.elems.into_iter().collect();
            } else if meta.path.is_ident("help") {
                help = Some(meta.value()?.parse::<Expr>()?);
            } else {
                return Err(meta.error("expected `message`, `labels`, or `help`"));
            }
            Ok(())
        })?;

        let message = message.ok_or_else(|| syn::Error::new_spanned(attr, "missing `message`"))?;

        Ok(Self { name: item.ident, fields, message, labels, help })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Self { fields, message, labels, help, .. } = self;

        let bind_fields = (!fields.is_empty()).then(|| quote! {
            #[allow(unused_variables)]
            let Self { #(#fields),* } = self;
        });

        // without labels, the first span is still highlighted
        let labels = if labels.is_empty() {
            vec![quote! { "" }]
        } else {
            labels.iter().map(ToTokens::to_token_stream).collect()
        };

        let help = help.as_ref().map(|help| quote! {
            builder.set_help(#help);
        });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bind_fields
                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message);

                let mut spans = spans.iter();
                #(
                    if let Some(span) = spans.next() {
                        let text = ToString::to_string(&(#labels));
                        let mut label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(implot_error::EXPR);
                        if !text.is_empty() {
                            label = label.with_message(text);
                        }
                        builder.add_label(label);
                    }
                )*

                #help
                builder.finish()
            }
        });
    }
}
