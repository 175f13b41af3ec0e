use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::Index;
use zip_clone::ZipClone as _;

use crate::arity::Arities;

/// The element type parameters and field indices of one tuple arity.
struct TupleShape {
    count: usize,
    types: Vec<Ident>,
    indices: Vec<Index>,
}

impl TupleShape {
    fn new(count: usize, prefix: &str) -> Self {
        TupleShape {
            count,
            types: (0..count).map(|i| format_ident!("{}{}", prefix, i)).collect(),
            indices: (0..count).map(Index::from).collect(),
        }
    }

    // (T0, T1,) - the trailing comma keeps one-element tuples well-formed
    fn tuple_type(&self) -> TokenStream {
        let types = &self.types;
        quote!((#(#types,)*))
    }
}

pub fn expand(arities: &Arities) -> TokenStream {
    let mut output = TokenStream::new();
    for count in arities.iter() {
        let elements = TupleShape::new(count, "T");
        output.extend(tuple_impls(&elements));
        output.extend(get_impls(&elements));
        output.extend(dyn_tuple_impl(&elements));
        output.extend(traversal_impls(&elements));
        output.extend(read_only_impl(&elements));
        output.extend(bindings_impl(&elements));
        if count > 0 {
            let ranges = TupleShape::new(count, "R");
            output.extend(range_tuple_impls(&ranges));
        }
    }
    output
}

fn tuple_impls(shape: &TupleShape) -> TokenStream {
    let types = &shape.types;
    let tuple = shape.tuple_type();
    let count = shape.count;
    let indices = &shape.indices;
    let separators = (0..count).map(|i| if i == 0 { "{}" } else { ", {}" });
    quote! {
        impl<#(#types),*> crate::tuple::Tuple for #tuple {
            const ARITY: usize = #count;
        }

        impl<#(#types: ::core::fmt::Display),*> crate::tuple::TupleDisplay for #tuple {
            #[allow(unused_variables)]
            fn fmt_elements(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #(::core::write!(f, #separators, self.#indices)?;)*
                ::core::result::Result::Ok(())
            }
        }
    }
}

fn get_impls(shape: &TupleShape) -> TokenStream {
    let tuple = shape.tuple_type();
    let mut output = TokenStream::new();
    for ((index, element), types) in shape
        .indices
        .iter()
        .zip(&shape.types)
        .zip_clone(shape.types.clone())
    {
        let position = Literal::usize_unsuffixed(index.index as usize);
        output.extend(quote! {
            impl<#(#types),*> crate::tuple::Get<#position> for #tuple {
                type Output = #element;

                fn get(&self) -> &#element {
                    &self.#index
                }

                fn get_mut(&mut self) -> &mut #element {
                    &mut self.#index
                }

                fn into_get(self) -> #element {
                    self.#index
                }
            }
        });
    }
    output
}

fn dyn_tuple_impl(shape: &TupleShape) -> TokenStream {
    let types = &shape.types;
    let tuple = shape.tuple_type();
    let count = shape.count;
    let indices = &shape.indices;
    let positions = (0..count).map(Literal::usize_unsuffixed);
    quote! {
        impl<#(#types),*> crate::tuple::DynTuple for #tuple
        where
            #(#types: ::core::any::Any + ::core::clone::Clone + ::core::fmt::Display,)*
        {
            fn element(&self, index: usize) -> crate::Result<crate::variant::Variant> {
                match index {
                    #(#positions => ::core::result::Result::Ok(
                        crate::variant::Variant::new(::core::clone::Clone::clone(&self.#indices))
                    ),)*
                    _ => ::core::result::Result::Err(crate::Error::OutOfBounds { index, len: #count }),
                }
            }
        }
    }
}

fn traversal_impls(shape: &TupleShape) -> TokenStream {
    let types = &shape.types;
    let tuple = shape.tuple_type();
    let indices = &shape.indices;
    quote! {
        impl<__M, #(#types),*> crate::tuple::TupleMap<__M> for #tuple
        where
            #(__M: crate::tuple::Mapper<#types>,)*
        {
            type Output = (#(<__M as crate::tuple::Mapper<#types>>::Output,)*);

            #[allow(unused_mut, unused_variables)]
            fn map_elements(self, mut mapper: __M) -> Self::Output {
                (#(<__M as crate::tuple::Mapper<#types>>::map(&mut mapper, self.#indices),)*)
            }
        }

        impl<__F, __A, #(#types),*> crate::tuple::TupleFold<__F, __A> for #tuple
        where
            #(__F: crate::tuple::Folder<__A, #types>,)*
        {
            #[allow(unused_mut, unused_variables)]
            fn fold_elements(&self, init: __A, mut folder: __F) -> __A {
                let acc = init;
                #(let acc = <__F as crate::tuple::Folder<__A, #types>>::fold(&mut folder, acc, &self.#indices);)*
                acc
            }
        }

        impl<__V, #(#types),*> crate::tuple::TupleForEach<__V> for #tuple
        where
            #(__V: crate::tuple::Visitor<#types>,)*
        {
            #[allow(unused_variables)]
            fn for_each_element(&self, visitor: &mut __V) {
                #(<__V as crate::tuple::Visitor<#types>>::visit(visitor, &self.#indices);)*
            }
        }
    }
}

fn read_only_impl(shape: &TupleShape) -> TokenStream {
    let types = &shape.types;
    let tuple = shape.tuple_type();
    let indices = &shape.indices;
    quote! {
        impl<#(#types: crate::range::ReadOnly),*> crate::range::ReadOnly for #tuple {
            type View = (#(<#types as crate::range::ReadOnly>::View,)*);

            fn read_only(self) -> Self::View {
                (#(crate::range::ReadOnly::read_only(self.#indices),)*)
            }
        }
    }
}

fn bindings_impl(shape: &TupleShape) -> TokenStream {
    let types = &shape.types;
    let tuple = shape.tuple_type();
    let indices = &shape.indices;
    let lifetime = syn::Lifetime::new("'__a", Span::call_site());
    quote! {
        impl<#lifetime, #(#types),*> crate::expr::IntoBindings<#lifetime> for #tuple
        where
            #(#types: ::core::convert::Into<crate::expr::Binding<#lifetime>>,)*
        {
            fn into_bindings(self) -> ::std::vec::Vec<crate::expr::Binding<#lifetime>> {
                ::std::vec![#(::core::convert::Into::into(self.#indices)),*]
            }
        }
    }
}

fn range_tuple_impls(shape: &TupleShape) -> TokenStream {
    let ranges = &shape.types;
    let tuple = shape.tuple_type();
    let indices = &shape.indices;
    let first = &indices[0];
    let rest = &indices[1..];
    quote! {
        impl<#(#ranges: crate::range::ForwardRange),*> crate::range::RangeTuple for #tuple {
            type Fronts = (#(<#ranges as crate::range::ForwardRange>::Item,)*);

            fn any_empty(&self) -> bool {
                #(crate::range::ForwardRange::is_empty(&self.#indices))||*
            }

            fn all_empty(&self) -> bool {
                #(crate::range::ForwardRange::is_empty(&self.#indices))&&*
            }

            fn fronts(&self) -> Self::Fronts {
                (#(crate::range::ForwardRange::front(&self.#indices),)*)
            }

            fn pop_fronts(&mut self) {
                #(crate::range::ForwardRange::pop_front(&mut self.#indices);)*
            }

            fn pop_remaining_fronts(&mut self) {
                #(
                    if !crate::range::ForwardRange::is_empty(&self.#indices) {
                        crate::range::ForwardRange::pop_front(&mut self.#indices);
                    }
                )*
            }

            fn shortest_size_hint(&self) -> (usize, ::core::option::Option<usize>) {
                let (lower, upper) = crate::range::ForwardRange::size_hint(&self.#first);
                #(
                    let (next_lower, next_upper) = crate::range::ForwardRange::size_hint(&self.#rest);
                    let lower = ::core::cmp::min(lower, next_lower);
                    let upper = match (upper, next_upper) {
                        (::core::option::Option::Some(a), ::core::option::Option::Some(b)) => {
                            ::core::option::Option::Some(::core::cmp::min(a, b))
                        }
                        (::core::option::Option::Some(a), ::core::option::Option::None)
                        | (::core::option::Option::None, ::core::option::Option::Some(a)) => {
                            ::core::option::Option::Some(a)
                        }
                        (::core::option::Option::None, ::core::option::Option::None) => {
                            ::core::option::Option::None
                        }
                    };
                )*
                (lower, upper)
            }

            fn longest_size_hint(&self) -> (usize, ::core::option::Option<usize>) {
                let (lower, upper) = crate::range::ForwardRange::size_hint(&self.#first);
                #(
                    let (next_lower, next_upper) = crate::range::ForwardRange::size_hint(&self.#rest);
                    let lower = ::core::cmp::max(lower, next_lower);
                    let upper = match (upper, next_upper) {
                        (::core::option::Option::Some(a), ::core::option::Option::Some(b)) => {
                            ::core::option::Option::Some(::core::cmp::max(a, b))
                        }
                        _ => ::core::option::Option::None,
                    };
                )*
                (lower, upper)
            }
        }

        impl<#(#ranges: crate::range::FiniteRange),*> crate::range::FiniteRangeTuple for #tuple {
            fn min_len(&self) -> usize {
                let len = crate::range::FiniteRange::len(&self.#first);
                #(let len = ::core::cmp::min(len, crate::range::FiniteRange::len(&self.#rest));)*
                len
            }

            fn max_len(&self) -> usize {
                let len = crate::range::FiniteRange::len(&self.#first);
                #(let len = ::core::cmp::max(len, crate::range::FiniteRange::len(&self.#rest));)*
                len
            }
        }

        impl<__F, #(#ranges),*> crate::range::FillRangeTuple<__F> for #tuple
        where
            __F: ::core::clone::Clone,
            #(#ranges: crate::range::ForwardRange<Item = __F>,)*
        {
            fn fronts_or(&self, fill: &__F) -> Self::Fronts {
                (#(
                    if crate::range::ForwardRange::is_empty(&self.#indices) {
                        ::core::clone::Clone::clone(fill)
                    } else {
                        crate::range::ForwardRange::front(&self.#indices)
                    },
                )*)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_element_tuples_keep_their_comma() {
        let shape = TupleShape::new(1, "T");
        assert_eq!(shape.tuple_type().to_string(), "(T0 ,)");
        let shape = TupleShape::new(0, "T");
        assert_eq!(shape.tuple_type().to_string(), "()");
    }

    #[test]
    fn one_get_impl_per_element() {
        let shape = TupleShape::new(3, "T");
        let tokens = get_impls(&shape).to_string();
        assert_eq!(tokens.matches("crate :: tuple :: Get <").count(), 3);
        assert!(tokens.contains("type Output = T2"));
        assert!(!tokens.contains("type Output = T3"));
    }

    #[test]
    fn range_impls_start_at_arity_one() {
        let unit = expand(&Arities { min: 0, max: 0 }).to_string();
        assert!(unit.contains("crate :: tuple :: Tuple for ()"));
        assert!(!unit.contains("RangeTuple"));
        let pairs = expand(&Arities { min: 2, max: 2 }).to_string();
        assert!(pairs.contains("crate :: range :: RangeTuple for (R0 , R1 ,)"));
    }

    #[test]
    fn size_hints_visit_every_range() {
        let shape = TupleShape::new(3, "R");
        let tokens = range_tuple_impls(&shape).to_string();
        assert!(tokens.contains("fn shortest_size_hint"));
        assert!(tokens.contains("fn longest_size_hint"));
        assert_eq!(
            tokens.matches("crate :: range :: ForwardRange :: size_hint").count(),
            6
        );
    }
}
