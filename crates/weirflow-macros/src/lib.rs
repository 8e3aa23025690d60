use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive a struct-of-vectors companion for a struct of `f64` components.
///
/// For `struct Foo { a: f64, b: f64 }` this generates `FooSeries` with one
/// `Vec<f64>` per field plus `with_capacity`, `push`, `len`, `is_empty`,
/// `row` (rebuild the `Foo` at an index) and `column` (look a field up by
/// name). `Foo::field_names()` lists the fields in declaration order.
///
/// `#[components(series_name = "Table")]` overrides the generated name.
#[proc_macro_derive(Components, attributes(components))]
pub fn derive_components(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let series_name = match series_name_override(&input) {
        Ok(Some(ident)) => ident,
        Ok(None) => format_ident!("{}Series", name),
        Err(err) => return err.to_compile_error().into(),
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Components requires a struct with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Components can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut idents = Vec::with_capacity(fields.len());
    for field in fields {
        if !is_f64(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Components fields must be f64")
                .to_compile_error()
                .into();
        }
        if let Some(ident) = field.ident.as_ref() {
            idents.push(ident);
        }
    }

    let Some(first) = idents.first() else {
        return syn::Error::new_spanned(name, "Components struct needs at least one field")
            .to_compile_error()
            .into();
    };

    let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();

    let expanded = quote! {
        /// Column-wise collection generated by `#[derive(Components)]`.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #series_name {
            #(pub #idents: Vec<f64>,)*
        }

        impl #series_name {
            /// Pre-allocate every column for `n` rows.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#idents: Vec::with_capacity(n),)*
                }
            }

            /// Append one row.
            pub fn push(&mut self, row: &#name) {
                #(self.#idents.push(row.#idents);)*
            }

            pub fn len(&self) -> usize {
                self.#first.len()
            }

            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }

            /// Row `i` reassembled, or `None` past the end.
            pub fn row(&self, i: usize) -> Option<#name> {
                if i >= self.len() {
                    return None;
                }
                Some(#name {
                    #(#idents: self.#idents[i],)*
                })
            }

            /// Column by field name.
            pub fn column(&self, field: &str) -> Option<&[f64]> {
                match field {
                    #(#names => Some(self.#idents.as_slice()),)*
                    _ => None,
                }
            }
        }

        impl #name {
            /// Field names in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    };

    expanded.into()
}

fn series_name_override(input: &DeriveInput) -> syn::Result<Option<proc_macro2::Ident>> {
    let mut series_name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("components") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            let nv = match meta {
                Meta::NameValue(nv) => nv,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected `series_name = \"...\"`",
                    ))
                }
            };
            if !nv.path.is_ident("series_name") {
                return Err(syn::Error::new_spanned(nv.path, "unknown components attribute"));
            }
            if series_name.is_some() {
                return Err(syn::Error::new_spanned(nv.path, "duplicate series_name"));
            }
            series_name = match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(format_ident!("{}", s.value())),
                other => {
                    return Err(syn::Error::new_spanned(other, "series_name must be a string"))
                }
            };
        }
    }
    Ok(series_name)
}

fn is_f64(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("f64"))
}
