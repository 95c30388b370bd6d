//! Procedural macros for the aoc-harness library

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Lit, parse_macro_input};

/// Derive macro for automatically registering puzzles with the plugin system
///
/// Generates an `inventory` submission so the puzzle is picked up by
/// `RegistryBuilder::register_all_plugins` without being listed anywhere.
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Puzzle` trait. If the
/// trait is not implemented you get a compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourPuzzle: Puzzle` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_harness::{AutoRegisterPuzzle, Puzzle};
///
/// #[derive(AutoRegisterPuzzle)]
/// #[aoc(day = 1)]
/// struct CalorieCounting;
///
/// impl Puzzle for CalorieCounting {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterPuzzle, attributes(aoc))]
pub fn derive_auto_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterPuzzle cannot be derived for generic types",
        ));
    }
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AutoRegisterPuzzle can only be derived for unit structs",
            ));
        }
    }

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterPuzzle derive macro requires #[aoc(day = N)] attribute",
            )
        })?;

    let mut day: Option<(u8, proc_macro2::Span)> = None;
    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => {
                    day = Some((lit_int.base10_parse()?, lit_int.span()));
                    Ok(())
                }
                other => Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
        } else {
            Err(meta.error("unsupported aoc attribute, expected `day`"))
        }
    })?;

    let (day, span) =
        day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "Missing required 'day' attribute"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new(span, "day must be between 1 and 25"));
    }

    Ok(quote! {
        // Compile-time check that the type implements Puzzle trait
        const _: () = {
            trait MustImplementPuzzle: ::aoc_harness::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::aoc_harness::inventory::submit! {
            ::aoc_harness::PuzzlePlugin {
                day: #day,
                puzzle: &#name,
            }
        }
    })
}
