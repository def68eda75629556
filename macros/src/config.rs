//! Config derive macro - generates FIELDS and FIELD_DOCS.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta};

/// Key renaming rule, mirroring serde's `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    None,
    CamelCase,
}

impl RenameRule {
    fn parse(value: Option<String>) -> Result<Self, String> {
        match value.as_deref() {
            None | Some("snake_case") => Ok(Self::None),
            Some("camelCase") => Ok(Self::CamelCase),
            Some(other) => Err(format!("unsupported rename_all rule `{other}`")),
        }
    }

    fn apply(self, ident: &str) -> String {
        match self {
            Self::None => ident.to_string(),
            Self::CamelCase => to_camel_case(ident),
        }
    }
}

/// Parsed field information.
#[derive(Debug)]
struct FieldInfo {
    name: syn::Ident,
    toml_name: String,
    doc: Option<String>,
}

/// Generate Config implementation (FIELDS + FIELD_DOCS).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let Some(section) = get_string_attr(&input.attrs, "section") else {
        return quote! { compile_error!("Config requires #[config(section = \"...\")]"); };
    };

    let rule = match RenameRule::parse(get_string_attr(&input.attrs, "rename_all")) {
        Ok(rule) => rule,
        Err(msg) => return quote! { compile_error!(#msg); },
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return quote! { compile_error!("Config only works on structs with named fields"); },
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            Some(FieldInfo {
                name: ident.clone(),
                toml_name: rule.apply(&ident.to_string()),
                doc: extract_doc_comment(&field.attrs),
            })
        })
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{}.{}", section, f.toml_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    let doc_entries = field_infos.iter().map(|f| {
        let key = &f.toml_name;
        let doc = f.doc.clone().unwrap_or_default();
        quote! { (#key, #doc), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output (empty for the root table).
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// `(toml key, doc comment)` pairs in declaration order.
            pub const FIELD_DOCS: &'static [(&'static str, &'static str)] = &[
                #(#doc_entries)*
            ];

            /// Look up the doc comment for a TOML key.
            pub fn field_doc(key: &str) -> Option<&'static str> {
                Self::FIELD_DOCS
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, doc)| *doc)
                    .filter(|doc| !doc.is_empty())
            }
        }
    }
}

// ============================================================================
// Attribute parsing helpers
// ============================================================================

fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _ = meta.value()?.parse::<syn::Lit>();
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value().trim().to_string());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}

// ============================================================================
// Name helpers
// ============================================================================

fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut upper_next = false;
    for c in s.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}
