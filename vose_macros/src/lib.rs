use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Lit, LitFloat, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[weight(<expr>)]
#[proc_macro_derive(WeightedOutcomes, attributes(weight))]
pub fn derive_weighted_outcomes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "WeightedOutcomes can only be derived for enums",
        ));
    };

    let mut entries = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedOutcomes only supports fieldless variants",
            ));
        }

        let mut weight = None;
        for attr in &variant.attrs {
            if !attr.path().is_ident("weight") {
                continue;
            }
            if weight.is_some() {
                return Err(syn::Error::new(attr.span(), "duplicate #[weight(...)]"));
            }
            let expr: Expr = attr
                .parse_args()
                .map_err(|e| syn::Error::new(attr.span(), format!("invalid weight expr: {e}")))?;
            weight = Some(expr);
        }
        let Some(expr) = weight else {
            return Err(syn::Error::new(
                variant.span(),
                "missing #[weight(...)] on variant",
            ));
        };

        let ident = &variant.ident;
        let expr = to_f64_expr(expr);
        entries.push(quote! { (Self::#ident, #expr) });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::vose::WeightedOutcomes for #enum_ident #ty_generics #where_clause {
            const WEIGHTS: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }
    })
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/100` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                let s = format!("{}.0", int.base10_digits());
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}
