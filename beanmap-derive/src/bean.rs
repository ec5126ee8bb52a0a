// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

use crate::util::{capitalize, parse_field_attrs, to_lower_camel};

/// Value-model binding for a supported field type: the `ValueType` variant
/// and the consuming converter the generated setter calls.
struct ValueBinding {
    variant: &'static str,
    into_fn: &'static str,
    is_bool: bool,
}

/// Maps a field type's token text to its value-model binding.
///
/// Matching on the rendered tokens mirrors how declared types are compared
/// elsewhere in the workspace; paths are normalized by stripping spaces.
fn classify(ty: &Type) -> Option<ValueBinding> {
    let rendered = ty.to_token_stream().to_string().replace(' ', "");
    let (variant, into_fn, is_bool) = match rendered.as_str() {
        "bool" => ("Bool", "into_bool", true),
        "i8" => ("Int8", "into_i8", false),
        "i16" => ("Int16", "into_i16", false),
        "i32" => ("Int32", "into_i32", false),
        "i64" => ("Int64", "into_i64", false),
        "f32" => ("Float32", "into_f32", false),
        "f64" => ("Float64", "into_f64", false),
        "String" | "std::string::String" => ("String", "into_string", false),
        "Vec<u8>" => ("Binary", "into_binary", false),
        "NaiveDate" | "chrono::NaiveDate" => ("LocalDate", "into_local_date", false),
        "NaiveDateTime" | "chrono::NaiveDateTime" => ("Timestamp", "into_timestamp", false),
        _ => return None,
    };
    Some(ValueBinding {
        variant,
        into_fn,
        is_bool,
    })
}

/// Returns the inner type of `Option<T>`, or `None` when the type is not an
/// `Option`.
fn extract_option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

pub fn derive_bean(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(&ast.generics, "Bean cannot be derived for generic types")
            .to_compile_error()
            .into();
    }

    let fields = match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Bean can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Bean can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut entries: Vec<TokenStream2> = Vec::new();
    for field in fields {
        let attrs = match parse_field_attrs(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        if attrs.skip {
            continue;
        }

        let ident = field.ident.as_ref().unwrap();
        let inner = extract_option_inner(&field.ty);
        let optional = inner.is_some();
        let value_ty = inner.unwrap_or(&field.ty);
        let Some(binding) = classify(value_ty) else {
            return syn::Error::new_spanned(
                &field.ty,
                "field type is not representable as a beanmap Value",
            )
            .to_compile_error()
            .into();
        };

        let property = attrs
            .rename
            .unwrap_or_else(|| to_lower_camel(&ident.to_string()));
        let upper = capitalize(&property);
        let getter_name = if binding.is_bool {
            format!("is{}", upper)
        } else {
            format!("get{}", upper)
        };
        let setter_name = format!("set{}", upper);
        let variant = format_ident!("{}", binding.variant);
        let into_fn = format_ident!("{}", binding.into_fn);

        entries.push(quote! {
            .getter(#getter_name, |bean: &#name| {
                beanmap_core::value::Value::from(bean.#ident.clone())
            })
        });
        if optional {
            entries.push(quote! {
                .nullable_setter(
                    #setter_name,
                    beanmap_core::value::ValueType::#variant,
                    |bean: &mut #name, value: beanmap_core::value::Value| {
                        bean.#ident = if value.is_null() {
                            None
                        } else {
                            Some(value.#into_fn()?)
                        };
                        Ok(())
                    },
                )
            });
        } else {
            entries.push(quote! {
                .setter(
                    #setter_name,
                    beanmap_core::value::ValueType::#variant,
                    |bean: &mut #name, value: beanmap_core::value::Value| {
                        bean.#ident = value.#into_fn()?;
                        Ok(())
                    },
                )
            });
        }
    }

    let name_str = name.to_string();
    let generated = quote! {
        impl beanmap_core::descriptor::Bean for #name {
            fn type_descriptor() -> beanmap_core::descriptor::TypeDescriptor {
                beanmap_core::descriptor::TypeDescriptor::builder::<#name>(#name_str)
                    .constructor(<#name as ::core::default::Default>::default)
                    #(#entries)*
                    .build()
            }
        }
    };
    generated.into()
}
